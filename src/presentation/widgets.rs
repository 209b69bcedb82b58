//! Reusable UI widgets
//!
//! Small `Widget` implementations shared by the section components.

pub mod form_field;
pub mod status_bar;
pub mod tab_bar;
pub mod toast;

pub use form_field::FormFieldWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
pub use toast::ToastWidget;
