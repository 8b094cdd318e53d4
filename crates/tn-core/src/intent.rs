//! Player intents forwarded from the presentation layer.

/// Something the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Leave the title screen.
    StartNameEntry,
    /// Confirm the typed name.
    ConfirmName(String),
    /// Open a level.
    SelectLevel(u32),
    /// Answer the current scenario.
    SubmitAnswer(char),
    /// Go back to the level grid without answering.
    LeaveLevel,
    /// Start over from the title screen.
    ResetSession,
}

impl Intent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::StartNameEntry => "start_name_entry",
            Intent::ConfirmName(_) => "confirm_name",
            Intent::SelectLevel(_) => "select_level",
            Intent::SubmitAnswer(_) => "submit_answer",
            Intent::LeaveLevel => "leave_level",
            Intent::ResetSession => "reset_session",
        }
    }
}
