//! Response interpreter - decodes the classifier's unreliable reply.
//!
//! The classifier is asked for one of two mutually exclusive JSON shapes
//! (`message` + `speciality`, or `message` + `missing_information`) but the
//! payload it actually returns may be fenced, partial, malformed, or plain
//! prose. The interpreter tries each shape in a fixed priority order and
//! degrades to a plain message rather than dropping the reply.

use serde::Deserialize;

use super::outcome::ClassificationOutcome;

/// Superset of both reply shapes the classifier was instructed to emit.
///
/// Decoding into one permissive struct and discriminating on which fields
/// are present mirrors the priority order: `missing_information` first,
/// then `speciality`, then plain message.
#[derive(Debug, Deserialize)]
struct ReplyShape {
    message: Option<String>,
    speciality: Option<String>,
    missing_information: Option<String>,
}

/// Interprets a raw classifier reply into a `ClassificationOutcome`.
///
/// A reply is never silently dropped: malformed payloads with any visible
/// text degrade to `Plain`, and only a blank reply is `Unparseable`.
pub fn interpret(raw_reply: &str) -> ClassificationOutcome {
    let trimmed = raw_reply.trim();
    if trimmed.is_empty() {
        return ClassificationOutcome::Unparseable;
    }

    let payload = strip_code_fence(trimmed);

    match serde_json::from_str::<ReplyShape>(payload) {
        Ok(shape) => outcome_from_shape(shape, trimmed),
        Err(_) => ClassificationOutcome::Plain {
            message: trimmed.to_string(),
        },
    }
}

fn outcome_from_shape(shape: ReplyShape, raw: &str) -> ClassificationOutcome {
    if let Some(missing) = non_empty(shape.missing_information) {
        let message = non_empty(shape.message)
            .unwrap_or_else(|| format!("Could you provide more information on {}?", missing));
        return ClassificationOutcome::NeedsInfo {
            message,
            missing_category: missing,
        };
    }

    if let Some(specialty) = non_empty(shape.speciality) {
        if !specialty.eq_ignore_ascii_case("none") {
            let message = non_empty(shape.message).unwrap_or_else(|| {
                format!(
                    "Based on your symptoms, it would be best to consult a {} specialist.",
                    specialty
                )
            });
            return ClassificationOutcome::Recommendation { message, specialty };
        }
    }

    match non_empty(shape.message) {
        Some(message) => ClassificationOutcome::Plain { message },
        // Valid JSON, but nothing usable in it; fall back to the raw text.
        None => ClassificationOutcome::Plain {
            message: raw.to_string(),
        },
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Strips a Markdown code fence (```json ... ```) if the payload is wrapped
/// in one, which the upstream model does routinely.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.split_once('\n').map(|(_, body)| body) else {
        return text;
    };
    match rest.rsplit_once("```") {
        Some((body, _)) => body.trim(),
        None => text,
    }
}
