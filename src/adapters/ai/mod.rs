//! Classifier adapters.

mod mock_classifier;
mod openai_classifier;

pub use mock_classifier::{MockClassifier, MockClassifierError};
pub use openai_classifier::{OpenAiClassifier, OpenAiClassifierConfig};
