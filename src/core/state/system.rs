use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Process-level state: lifecycle flags, terminal size and the status line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Last size reported by the terminal
    pub terminal_size: Option<(u16, u16)>,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => self.should_quit = true,
            SystemMsg::Suspend => self.should_suspend = true,
            SystemMsg::Resume => self.should_suspend = false,

            SystemMsg::Resize(width, height) => {
                if self.terminal_size == Some((width, height)) {
                    return vec![];
                }
                self.terminal_size = Some((width, height));
                return vec![Cmd::Tui(TuiCommand::Resize { width, height })];
            }

            SystemMsg::UpdateStatusMessage(message) => self.status_message = Some(message),
            SystemMsg::ClearStatusMessage => self.status_message = None,
            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                return vec![Cmd::LogError { message: error }];
            }
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_quit_and_suspend_flags() {
        let mut system = SystemState::default();

        assert!(system.update(SystemMsg::Suspend).is_empty());
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);

        system.update(SystemMsg::Quit);
        assert!(system.should_quit);
    }

    #[test]
    fn test_repeated_resize_is_coalesced() {
        let mut system = SystemState::default();
        let resize = vec![Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        })];

        assert_eq!(system.update(SystemMsg::Resize(80, 24)), resize);
        assert!(system.update(SystemMsg::Resize(80, 24)).is_empty());
        assert_eq!(system.terminal_size, Some((80, 24)));
        assert_eq!(system.update(SystemMsg::Resize(100, 30)).len(), 1);
    }

    #[test]
    fn test_status_line() {
        let mut system = SystemState::default();

        system.update(SystemMsg::UpdateStatusMessage("Sending...".into()));
        assert_eq!(system.status_message.as_deref(), Some("Sending..."));

        let cmds = system.update(SystemMsg::ShowError("backend down".into()));
        assert_eq!(system.status_message.as_deref(), Some("Error: backend down"));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "backend down".into()
            }]
        );

        system.update(SystemMsg::ClearStatusMessage);
        assert!(system.status_message.is_none());
    }
}
