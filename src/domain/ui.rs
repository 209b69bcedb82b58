use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Top-level portfolio sections, in navigation order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    pub fn all() -> Vec<Section> {
        Section::iter().collect()
    }

    pub fn index(self) -> usize {
        Section::iter().position(|s| s == self).unwrap_or_default()
    }

    /// Section at `index`, if any
    pub fn from_index(index: usize) -> Option<Section> {
        Section::iter().nth(index)
    }

    pub fn next(self) -> Self {
        Section::from_index((self.index() + 1) % Section::iter().len()).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        let len = Section::iter().len();
        Section::from_index((self.index() + len - 1) % len).unwrap_or_default()
    }
}
