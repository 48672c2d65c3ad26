use serde::{Deserialize, Serialize};

use super::enums::{Severity, Urgency};
use super::history::MedicalHistory;

/// One candidate condition in an analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub name: String,
    /// Likelihood estimate, 0–100.
    pub probability: f32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub severity: Severity,
    pub urgency: Urgency,
}

/// Structured report produced once per completed conversation.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub overall_severity: Severity,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
    #[serde(default)]
    pub follow_up_actions: Vec<String>,
}

/// The persisted bundle the results view reads: the analysis plus the
/// inputs that produced it. Written to a single storage slot, each new
/// analysis overwriting the prior one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    #[serde(default)]
    pub preventive_recommendations: Vec<String>,
    /// RFC 3339 completion timestamp.
    pub date: String,
    pub symptoms: Vec<String>,
    pub medical_history: MedicalHistory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            conditions: vec![Condition {
                name: "Tension headache".into(),
                probability: 72.0,
                description: "Common stress-related headache".into(),
                recommendations: vec!["Rest".into(), "Hydrate".into()],
                severity: Severity::Low,
                urgency: Urgency::Routine,
            }],
            overall_severity: Severity::Low,
            recommendations: vec!["Rest in a quiet room".into()],
            preventive_measures: vec!["Regular sleep schedule".into()],
            follow_up_actions: vec!["See a doctor if it persists a week".into()],
        }
    }

    #[test]
    fn snapshot_flattens_analysis_fields() {
        let snapshot = AnalysisSnapshot {
            analysis: sample_result(),
            preventive_recommendations: vec!["Stay active".into()],
            date: "2026-03-01T10:00:00+00:00".into(),
            symptoms: vec!["headache".into()],
            medical_history: MedicalHistory::default(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&snapshot).unwrap()).unwrap();
        // Analysis fields sit at the top level, next to the context fields
        assert!(json["conditions"].is_array());
        assert_eq!(json["overallSeverity"], "low");
        assert!(json["preventiveRecommendations"].is_array());
        assert_eq!(json["symptoms"][0], "headache");
        assert!(json["medicalHistory"].is_object());
    }

    #[test]
    fn result_parses_with_missing_optional_lists() {
        let json = r#"{
            "conditions": [],
            "overallSeverity": "medium",
            "recommendations": ["See a pharmacist"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.overall_severity, Severity::Medium);
        assert!(result.preventive_measures.is_empty());
        assert!(result.follow_up_actions.is_empty());
    }
}
