//! Classification outcome - interpretation of one classifier reply.

use serde::{Deserialize, Serialize};

/// Result of interpreting a single classifier reply.
///
/// Produced once per classifier call and consumed immediately by the
/// orchestrator; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationOutcome {
    /// The classifier recommended a specialist. The specialty label is
    /// free text and still has to be resolved against the taxonomy.
    Recommendation { message: String, specialty: String },

    /// The classifier asked for more detail before it can recommend.
    NeedsInfo {
        message: String,
        missing_category: String,
    },

    /// The reply carried no structure; its text is surfaced verbatim.
    Plain { message: String },

    /// Not even a message could be extracted from the reply.
    Unparseable,
}

impl ClassificationOutcome {
    /// The user-facing message carried by this outcome, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ClassificationOutcome::Recommendation { message, .. }
            | ClassificationOutcome::NeedsInfo { message, .. }
            | ClassificationOutcome::Plain { message } => Some(message),
            ClassificationOutcome::Unparseable => None,
        }
    }

    /// True if this outcome carries a specialty to resolve.
    pub fn is_recommendation(&self) -> bool {
        matches!(self, ClassificationOutcome::Recommendation { .. })
    }
}
