use crate::models::MedicalHistory;

/// Fixed framing prepended to every analysis request.
pub const ANALYSIS_SYSTEM_FRAMING: &str = r#"You are a careful medical triage assistant. You are NOT a doctor and you never present your output as a diagnosis.

Given a patient's reported symptoms and background, respond with EXACTLY ONE JSON object and nothing else, matching this shape:

{
  "conditions": [
    {
      "name": "string",
      "probability": 0-100,
      "description": "string",
      "recommendations": ["string"],
      "severity": "low" | "medium" | "high",
      "urgency": "routine" | "urgent" | "emergency"
    }
  ],
  "overallSeverity": "low" | "medium" | "high",
  "recommendations": ["string"],
  "preventiveMeasures": ["string"],
  "followUpActions": ["string"]
}

List at most three plausible conditions, most likely first. Keep language plain and non-alarming. Always advise consulting a healthcare professional."#;

/// Build the analysis prompt from the collected intake data.
pub fn build_analysis_prompt(
    symptoms: &[String],
    history: &MedicalHistory,
    duration: Option<&str>,
) -> String {
    let mut prompt = String::from(ANALYSIS_SYSTEM_FRAMING);
    prompt.push_str("\n\nPATIENT REPORT\n");

    prompt.push_str("Symptoms:\n");
    for symptom in symptoms {
        prompt.push_str(&format!("- {symptom}\n"));
    }

    if let Some(duration) = duration {
        prompt.push_str(&format!("Reported duration: {duration}\n"));
    }

    if let Some(age) = history.age {
        prompt.push_str(&format!("Age: {age}\n"));
    }
    if let Some(gender) = &history.gender {
        prompt.push_str(&format!("Gender: {gender}\n"));
    }
    push_list(&mut prompt, "Existing conditions", &history.existing_conditions);
    push_list(&mut prompt, "Current medications", &history.medications);
    push_list(&mut prompt, "Allergies", &history.allergies);
    push_list(&mut prompt, "Family history", &history.family_history);

    prompt.push_str("\nRespond with the JSON object only.");
    prompt
}

/// Build the one-shot preventive-recommendations prompt.
/// Only issued when age and gender are both known.
pub fn build_preventive_prompt(age: u32, gender: &str, existing_conditions: &[String]) -> String {
    let mut prompt = format!(
        "List 5 short, practical preventive health recommendations for a {age}-year-old {gender} patient"
    );
    if existing_conditions.is_empty() {
        prompt.push('.');
    } else {
        prompt.push_str(&format!(
            " with the following existing conditions: {}.",
            existing_conditions.join(", ")
        ));
    }
    prompt.push_str(" Write one recommendation per line, with no numbering and no extra commentary.");
    prompt
}

fn push_list(prompt: &mut String, label: &str, items: &[String]) {
    if !items.is_empty() {
        prompt.push_str(&format!("{label}: {}\n", items.join(", ")));
    }
}
