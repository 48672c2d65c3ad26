use super::AnalysisError;

/// Upper bound on symptoms carried into one analysis.
pub const MAX_SYMPTOMS: usize = 10;

/// Minimum length of a single symptom entry.
pub const MIN_SYMPTOM_LEN: usize = 2;

/// Characters rejected in symptom entries before they reach a prompt.
pub const DISALLOWED_CHARS: &[char] = &['<', '>', '{', '}', '[', ']', '\\'];

/// Valid age range for the intake dialogue, inclusive.
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 149;

/// Check a symptom list against the intake rules: non-empty, at most
/// [`MAX_SYMPTOMS`] entries, each at least [`MIN_SYMPTOM_LEN`] characters
/// after trimming, none containing a disallowed character.
pub fn validate_symptoms(symptoms: &[String]) -> Result<(), AnalysisError> {
    if symptoms.is_empty() {
        return Err(AnalysisError::NoSymptoms);
    }
    if symptoms.len() > MAX_SYMPTOMS {
        return Err(AnalysisError::TooManySymptoms(symptoms.len()));
    }
    for entry in symptoms {
        if entry.trim().chars().count() < MIN_SYMPTOM_LEN {
            return Err(AnalysisError::EntryTooShort(entry.clone()));
        }
        if entry.contains(DISALLOWED_CHARS) {
            return Err(AnalysisError::DisallowedCharacter(entry.clone()));
        }
    }
    Ok(())
}

/// Convenience predicate over [`validate_symptoms`].
pub fn symptoms_are_valid(symptoms: &[String]) -> bool {
    validate_symptoms(symptoms).is_ok()
}

/// Parse a patient-typed age, enforcing the [`MIN_AGE`]..=[`MAX_AGE`] range.
pub fn parse_age(text: &str) -> Result<u32, AnalysisError> {
    let age: u32 = text
        .trim()
        .parse()
        .map_err(|_| AnalysisError::AgeNotANumber)?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(AnalysisError::AgeOutOfRange(age));
    }
    Ok(age)
}
