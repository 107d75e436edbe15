//! Shell command parsing.

use urgentbox_core::{DraftField, UrgencyTab};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a draft field.
    Set(DraftField, String),
    /// Show the current draft.
    ShowDraft,
    /// Submit the draft.
    Send,
    /// Show an inbox tab.
    Inbox(UrgencyTab),
    /// Discard the draft.
    Clear,
    /// Show usage.
    Help,
    /// Leave the shell.
    Quit,
    /// Blank line.
    Empty,
}

/// Command parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unrecognized command word.
    #[error("Unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),

    /// Unrecognized inbox tab.
    #[error("Unknown tab: {0} (use all, high, medium, low or unknown)")]
    UnknownTab(String),
}

/// Usage text.
pub const HELP: &str = "\
Commands:
  name <text>        set your name
  email <text>       set the sender email
  subject <text>     set the subject
  body <text>        set the message (use \\n for line breaks)
  draft              show the current draft
  send               send the draft
  inbox [tab]        show the inbox: all, high, medium, low, unknown
  clear              discard the draft
  help               show this help
  quit               exit";

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or tabs.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let set = |field: DraftField| -> Result<Self, ParseError> {
            Ok(Self::Set(field, rest.replace("\\n", "\n")))
        };

        match word.to_lowercase().as_str() {
            "name" => set(DraftField::Name),
            "email" | "from" => set(DraftField::SenderAddress),
            "subject" => set(DraftField::Subject),
            "body" | "message" => set(DraftField::Body),
            "draft" => Ok(Self::ShowDraft),
            "send" => Ok(Self::Send),
            "inbox" | "list" => UrgencyTab::parse(rest)
                .map(Self::Inbox)
                .ok_or_else(|| ParseError::UnknownTab(rest.to_string())),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ParseError::UnknownCommand(word.to_string())),
        }
    }
}
