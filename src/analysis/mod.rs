//! Symptom analysis: one outbound call to a text-generation endpoint,
//! guarded by input validation and an emergency short-circuit, with a
//! fixed JSON contract parsed out of the unstructured model reply.

pub mod analyzer;
pub mod client;
pub mod emergency;
pub mod parser;
pub mod prompt;
pub mod validate;

pub use analyzer::Analyzer;
pub use client::{GenerationParams, HttpGenClient, MockGenClient, TextGenClient};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    // ── Validation: recovered locally, never a hard failure ──
    #[error("No symptoms were provided")]
    NoSymptoms,

    #[error("Too many symptoms ({0}); at most {max} are analyzed", max = validate::MAX_SYMPTOMS)]
    TooManySymptoms(usize),

    #[error("Symptom entry too short: {0:?}")]
    EntryTooShort(String),

    #[error("Symptom entry contains a disallowed character: {0:?}")]
    DisallowedCharacter(String),

    #[error("Age must be a whole number")]
    AgeNotANumber,

    #[error("Age out of range: {0} (expected {min}..={max})", min = validate::MIN_AGE, max = validate::MAX_AGE)]
    AgeOutOfRange(u32),

    // ── Transport: surfaced as a retry invitation ──
    #[error("Cannot reach the generation endpoint at {0}")]
    Connection(String),

    #[error("Generation endpoint returned error (status {status}): {body}")]
    Endpoint { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    // ── Parse: surfaced as a retry invitation ──
    #[error("No JSON object found in the model reply")]
    MissingJson,

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}

impl AnalysisError {
    /// Validation failures are recovered in the dialogue by re-asking;
    /// everything else is surfaced as a retryable transcript message.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoSymptoms
                | Self::TooManySymptoms(_)
                | Self::EntryTooShort(_)
                | Self::DisallowedCharacter(_)
                | Self::AgeNotANumber
                | Self::AgeOutOfRange(_)
        )
    }
}
