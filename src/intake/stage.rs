use serde::{Deserialize, Serialize};

/// The conversational stage of an intake dialogue.
///
/// One variant per scripted question, so every dispatch over the stage
/// is an exhaustive match. `index()` preserves the 0..=6 step numbering
/// the web client renders. Progress is monotonically non-decreasing
/// except the two self-looping list stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// First symptom ("what brings you here?").
    ChiefComplaint,
    /// How long the chief complaint has been going on.
    Duration,
    /// Whether anything has been taken for it.
    Medication,
    /// Loop: more symptoms until a negation phrase.
    AdditionalSymptoms,
    /// Patient age (validated 1–149).
    Age,
    /// Patient gender, stored verbatim.
    Gender,
    /// Loop: existing conditions until a negation phrase, which
    /// triggers the final analysis.
    ExistingConditions,
    /// Terminal: analysis has run; only a reset starts a new dialogue.
    Complete,
}

impl Stage {
    /// Wire-facing step index, 0..=6 for the dialogue stages and 7 for
    /// the terminal state.
    pub fn index(&self) -> u8 {
        match self {
            Self::ChiefComplaint => 0,
            Self::Duration => 1,
            Self::Medication => 2,
            Self::AdditionalSymptoms => 3,
            Self::Age => 4,
            Self::Gender => 5,
            Self::ExistingConditions => 6,
            Self::Complete => 7,
        }
    }

    /// Stages that re-prompt in place instead of advancing.
    pub fn is_loop(&self) -> bool {
        matches!(self, Self::AdditionalSymptoms | Self::ExistingConditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_sequential() {
        let stages = [
            Stage::ChiefComplaint,
            Stage::Duration,
            Stage::Medication,
            Stage::AdditionalSymptoms,
            Stage::Age,
            Stage::Gender,
            Stage::ExistingConditions,
            Stage::Complete,
        ];
        for (expected, stage) in stages.iter().enumerate() {
            assert_eq!(stage.index() as usize, expected);
        }
    }

    #[test]
    fn only_list_stages_loop() {
        assert!(Stage::AdditionalSymptoms.is_loop());
        assert!(Stage::ExistingConditions.is_loop());
        assert!(!Stage::Age.is_loop());
        assert!(!Stage::Complete.is_loop());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Stage::ChiefComplaint).unwrap(),
            "\"chief_complaint\""
        );
    }
}
