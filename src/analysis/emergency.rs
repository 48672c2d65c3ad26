use crate::models::enums::Severity;
use crate::models::AnalysisResult;

/// Canonical emergency phrase list — the single source of truth for the
/// emergency short-circuit. Matching is case-insensitive substring
/// containment against reported symptoms.
pub const EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "shortness of breath",
    "severe bleeding",
    "sudden weakness",
    "sudden numbness",
    "loss of consciousness",
    "unconscious",
    "severe allergic reaction",
    "anaphylaxis",
    "stroke",
    "heart attack",
    "seizure",
    "suicidal",
];

/// Fixed instructions returned when an emergency phrase is detected.
const EMERGENCY_INSTRUCTIONS: &[&str] = &[
    "Call your local emergency number now or go to the nearest emergency department.",
    "Do not wait for an online assessment; these symptoms need in-person care immediately.",
    "If you are alone, tell someone nearby what is happening.",
    "Stay as calm and still as possible until help arrives.",
];

/// Scan reported symptoms for an emergency phrase.
/// Returns the first matching phrase, if any.
pub fn find_emergency_phrase(symptoms: &[String]) -> Option<&'static str> {
    for symptom in symptoms {
        let lowered = symptom.to_lowercase();
        for phrase in EMERGENCY_PHRASES {
            if lowered.contains(phrase) {
                return Some(phrase);
            }
        }
    }
    None
}

/// The fixed high-severity result emitted without consulting the model:
/// empty conditions, emergency instructions as recommendations.
pub fn emergency_result() -> AnalysisResult {
    AnalysisResult {
        conditions: vec![],
        overall_severity: Severity::High,
        recommendations: EMERGENCY_INSTRUCTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        preventive_measures: vec![],
        follow_up_actions: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_matching_is_case_insensitive_substring() {
        let symptoms = vec!["I have CHEST PAIN since this morning".to_string()];
        assert_eq!(find_emergency_phrase(&symptoms), Some("chest pain"));
    }

    #[test]
    fn any_entry_in_the_list_can_match() {
        let symptoms = vec![
            "headache".to_string(),
            "some difficulty breathing at night".to_string(),
        ];
        assert_eq!(find_emergency_phrase(&symptoms), Some("difficulty breathing"));
    }

    #[test]
    fn ordinary_symptoms_do_not_match() {
        let symptoms = vec!["headache".to_string(), "mild fever".to_string()];
        assert_eq!(find_emergency_phrase(&symptoms), None);
    }

    #[test]
    fn emergency_result_shape() {
        let result = emergency_result();
        assert_eq!(result.overall_severity, Severity::High);
        assert!(result.conditions.is_empty());
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn phrase_list_is_lowercase() {
        // Matching lowercases the input only, so the list itself must be lowercase
        for phrase in EMERGENCY_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }
}
