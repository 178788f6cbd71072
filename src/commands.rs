//! Command names exposed by the host's `windows` plugin.

/// A host command. [`Command::name`] is the bare name; the namespaced form
/// (`plugin:windows|open_window`) comes from [`crate::ServiceConfig::command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    OpenWindow,
    OpenEmptyWindow,
    OpenExistingWindow,
    SendToFocused,
    SendToAll,
    GetFocusedWindow,
    GetLastActiveWindow,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::OpenWindow,
        Command::OpenEmptyWindow,
        Command::OpenExistingWindow,
        Command::SendToFocused,
        Command::SendToAll,
        Command::GetFocusedWindow,
        Command::GetLastActiveWindow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::OpenWindow => "open_window",
            Command::OpenEmptyWindow => "open_empty_window",
            Command::OpenExistingWindow => "open_existing_window",
            Command::SendToFocused => "send_to_focused",
            Command::SendToAll => "send_to_all",
            Command::GetFocusedWindow => "get_focused_window",
            Command::GetLastActiveWindow => "get_last_active_window",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_name(cmd.name()), Some(cmd));
        }
        assert_eq!(Command::from_name("close_window"), None);
    }
}
