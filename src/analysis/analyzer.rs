use std::sync::Arc;

use crate::models::{AnalysisResult, MedicalHistory};

use super::client::{GenerationParams, TextGenClient};
use super::emergency::{emergency_result, find_emergency_phrase};
use super::parser::{parse_analysis_response, parse_preventive_response};
use super::prompt::{build_analysis_prompt, build_preventive_prompt};
use super::validate::validate_symptoms;
use super::AnalysisError;

/// Composed analysis flow: validate → emergency short-circuit → one
/// generate call → parse. Side-effect-free aside from the network call;
/// no caching, no retry, no rate limiting.
#[derive(Clone)]
pub struct Analyzer {
    client: Arc<dyn TextGenClient>,
    params: GenerationParams,
}

impl Analyzer {
    pub fn new(client: Arc<dyn TextGenClient>) -> Self {
        Self {
            client,
            params: GenerationParams::default(),
        }
    }

    /// Produce a structured report for the collected intake data.
    ///
    /// Validation is re-checked here even though the intake flow already
    /// enforces it at collection time. A matching emergency phrase
    /// returns the fixed high-severity result with zero network calls.
    pub fn analyze(
        &self,
        symptoms: &[String],
        history: &MedicalHistory,
        duration: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        validate_symptoms(symptoms)?;

        if let Some(phrase) = find_emergency_phrase(symptoms) {
            tracing::warn!(phrase, "emergency phrase detected, short-circuiting analysis");
            return Ok(emergency_result());
        }

        let prompt = build_analysis_prompt(symptoms, history, duration);
        let reply = self.client.generate(&prompt, &self.params)?;
        parse_analysis_response(&reply)
    }

    /// One-shot preventive recommendations for a known age and gender.
    /// Errors propagate; the caller decides whether to swallow them.
    pub fn preventive_recommendations(
        &self,
        age: u32,
        gender: &str,
        existing_conditions: &[String],
    ) -> Result<Vec<String>, AnalysisError> {
        let prompt = build_preventive_prompt(age, gender, existing_conditions);
        let reply = self.client.generate(&prompt, &self.params)?;
        Ok(parse_preventive_response(&reply))
    }
}
