use serde::{Deserialize, Serialize};

/// Patient background accumulated over the intake dialogue.
///
/// Mutated incrementally as the conversation progresses; the only
/// cross-field invariant is the age range (1–149), enforced at the
/// collection point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    pub age: Option<u32>,
    pub gender: Option<String>,
    #[serde(default)]
    pub existing_conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub family_history: Vec<String>,
}

impl MedicalHistory {
    /// True when nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.gender.is_none()
            && self.existing_conditions.is_empty()
            && self.medications.is_empty()
            && self.allergies.is_empty()
            && self.family_history.is_empty()
    }
}
