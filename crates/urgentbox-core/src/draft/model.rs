//! Draft model.

/// A field of the compose form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Submitter's display name.
    Name,
    /// Address entered in the form's sender-email field.
    SenderAddress,
    /// Subject line.
    Subject,
    /// Message body.
    Body,
}

impl DraftField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::SenderAddress, Self::Subject, Self::Body];

    /// Field identifier used in warnings and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::SenderAddress => "sender_address",
            Self::Subject => "subject",
            Self::Body => "body",
        }
    }

    /// Form label shown to the user.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::SenderAddress => "Sender Email",
            Self::Subject => "Subject",
            Self::Body => "Message",
        }
    }
}

/// In-progress message data, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Submitter's display name. Becomes the message sender.
    pub name: String,
    /// Sender-email field. Becomes the message recipient.
    pub sender_address: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl Draft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::SenderAddress => &self.sender_address,
            DraftField::Subject => &self.subject,
            DraftField::Body => &self.body,
        }
    }

    /// Replaces the value of a field.
    pub fn update(&mut self, field: DraftField, value: impl Into<String>) {
        let target = match field {
            DraftField::Name => &mut self.name,
            DraftField::SenderAddress => &mut self.sender_address,
            DraftField::Subject => &mut self.subject,
            DraftField::Body => &mut self.body,
        };
        *target = value.into();
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no field has been filled in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
