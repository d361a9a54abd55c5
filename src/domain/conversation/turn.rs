//! Turn entity - one message in a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::TurnId;

/// Role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// Reference to a document a user turn was extracted from.
///
/// The document content itself is not retained; only the extracted text
/// lives on as the turn text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Original file name as uploaded.
    pub file_name: String,
}

impl DocumentRef {
    /// Creates a reference to an uploaded document.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub role: TurnRole,
    pub text: String,
    pub attachment: Option<DocumentRef>,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Creates a user turn from typed or transcribed text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            role: TurnRole::User,
            text: text.into(),
            attachment: None,
            timestamp: Utc::now(),
        }
    }

    /// Creates a user turn whose text was extracted from a document.
    pub fn user_with_attachment(text: impl Into<String>, attachment: DocumentRef) -> Self {
        Self {
            id: TurnId::new(),
            role: TurnRole::User,
            text: text.into(),
            attachment: Some(attachment),
            timestamp: Utc::now(),
        }
    }

    /// Creates an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            role: TurnRole::Assistant,
            text: text.into(),
            attachment: None,
            timestamp: Utc::now(),
        }
    }

    /// True if this turn was authored by the user.
    pub fn is_user(&self) -> bool {
        self.role == TurnRole::User
    }
}
