//! Interactive line shell.
//!
//! Reads one command per line and writes plain text back. This is the
//! display layer: it owns the composer and inbox for the session and hands
//! submissions to the core.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use urgentbox_core::{Classify, Composer, Inbox, SubmitError};

use crate::command::{Command, HELP};
use crate::render;

/// Shell session state.
pub struct Shell<C> {
    composer: Composer,
    inbox: Inbox,
    classifier: Option<C>,
}

impl<C: Classify> Shell<C> {
    /// Creates a session. Without a classifier every message is `unknown`.
    pub fn new(classifier: Option<C>) -> Self {
        Self {
            composer: Composer::new(),
            inbox: Inbox::new(),
            classifier,
        }
    }

    /// Session inbox.
    #[cfg(test)]
    pub const fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer
            .write_all(b"urgentbox - type `help` for commands\n")
            .await?;

        let mut lines = reader.lines();
        loop {
            writer.write_all(b"> ").await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let output = match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await,
                Err(e) => format!("{e}\n"),
            };

            writer.write_all(output.as_bytes()).await?;
        }

        writer.write_all(b"\n").await?;
        writer.flush().await
    }

    /// Executes a command and returns the text to show.
    async fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Set(field, value) => {
                self.composer.update(field, value);
                String::new()
            }
            Command::ShowDraft => render::draft(self.composer.draft()),
            Command::Send => self.send().await,
            Command::Inbox(tab) => render::inbox(&self.inbox, tab),
            Command::Clear => {
                self.composer.clear();
                "Draft cleared.\n".to_string()
            }
            Command::Help => format!("{HELP}\n"),
            Command::Quit | Command::Empty => String::new(),
        }
    }

    async fn send(&mut self) -> String {
        let result = match &self.classifier {
            Some(classifier) => self.composer.submit(classifier, &mut self.inbox).await,
            None => self.composer.submit_unclassified(&mut self.inbox),
        };

        match result {
            Ok(id) => {
                let urgency = self
                    .inbox
                    .get(id)
                    .map(|m| m.urgency().display_name())
                    .unwrap_or_default();
                format!("Message #{id} sent ({urgency} urgency).\n")
            }
            Err(e @ SubmitError::Invalid(_)) => format!("⚠️  {e}\n"),
            Err(e @ SubmitError::InFlight) => format!("{e}\n"),
        }
    }
}
