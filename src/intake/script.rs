//! The fixed conversational script: greeting pool, per-stage prompts,
//! and the phrase checks that drive branching.

use rand::seq::SliceRandom;

// ═══════════════════════════════════════════
// Greetings
// ═══════════════════════════════════════════

/// Greeting pool for new conversations; one is rolled at random.
pub const GREETINGS: &[&str] = &[
    "Hello! I'm the MediSense health assistant. What symptoms are you experiencing today?",
    "Hi there! I can help you make sense of your symptoms. What's bothering you today?",
    "Welcome to MediSense. Tell me about the main symptom that brought you here today.",
    "Hello! Let's go through your symptoms together. What are you experiencing?",
];

/// Pick a greeting for a fresh conversation.
pub fn roll_greeting() -> &'static str {
    GREETINGS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETINGS[0])
}

// ═══════════════════════════════════════════
// Phrase checks
// ═══════════════════════════════════════════

/// Exit phrases for the two list loops and the medication question.
const NEGATION_PHRASES: &[&str] = &[
    "no",
    "none",
    "nothing",
    "nope",
    "that's it",
    "thats it",
    "no more",
    "nothing else",
];

/// Substrings that indicate the patient answered with a timeframe.
const DURATION_INDICATORS: &[&str] = &[
    "day", "week", "month", "year", "hour", "today", "yesterday", "morning", "night",
];

/// Substrings that indicate the patient named something they took.
const MEDICATION_INDICATORS: &[&str] = &[
    "paracetamol",
    "acetaminophen",
    "ibuprofen",
    "aspirin",
    "tylenol",
    "advil",
    "antibiotic",
    "medicine",
    "medication",
    "tablet",
    "pill",
    "syrup",
];

/// Whether the input is a negation phrase (exact match after trimming
/// and lowercasing, trailing punctuation ignored).
pub fn is_negation(text: &str) -> bool {
    let normalized = text
        .trim()
        .trim_end_matches(['.', '!', ','])
        .to_lowercase();
    NEGATION_PHRASES.contains(&normalized.as_str())
}

/// Whether the input mentions a recognizable timeframe.
pub fn mentions_duration(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DURATION_INDICATORS.iter().any(|w| lowered.contains(w))
}

/// Whether the input names a recognizable medication.
pub fn mentions_medication(text: &str) -> bool {
    let lowered = text.to_lowercase();
    MEDICATION_INDICATORS.iter().any(|w| lowered.contains(w))
}

// ═══════════════════════════════════════════
// Stage prompts
// ═══════════════════════════════════════════

/// Reply to the chief complaint, asking for its duration.
pub fn chief_complaint_reply(symptom: &str) -> String {
    format!("I understand you're experiencing {symptom}. How long has this been going on?")
}

pub const DURATION_ACK_RECOGNIZED: &str =
    "Thank you, that helps me understand the timeline. Have you taken any medication for it?";

pub const DURATION_ACK_GENERIC: &str =
    "Okay, noted. Have you taken any medication for it?";

pub const MEDICATION_ACK_TAKEN: &str =
    "Noted, I've added that to your medication list. Are you experiencing any other symptoms? If not, just say \"no\".";

pub const MEDICATION_ACK_NOTED: &str =
    "Okay, I've noted that. Are you experiencing any other symptoms? If not, just say \"no\".";

pub const MEDICATION_ACK_NONE: &str =
    "Understood, no medication so far. Are you experiencing any other symptoms? If not, just say \"no\".";

pub const SYMPTOM_LOOP_PROMPT: &str = "Noted. Any other symptoms? If not, say \"no\".";

pub const AGE_PROMPT: &str = "Thanks. Could you tell me your age?";

pub const AGE_REPROMPT: &str =
    "I need a valid age between 1 and 149 to continue. Could you give me your age as a number?";

/// Age-contextual acknowledgement plus the gender prompt.
pub fn age_ack(age: u32) -> String {
    let context = if age < 18 {
        "Thanks. Since you're under 18, please make sure a parent or guardian knows about these symptoms."
    } else if age < 65 {
        "Thanks, got it."
    } else {
        "Thanks. I'll keep your age in mind, as some symptoms deserve extra attention later in life."
    };
    format!("{context} What is your gender?")
}

pub const GENDER_ACK_CONDITIONS_PROMPT: &str =
    "Thank you. Do you have any existing medical conditions I should know about? If none, say \"no\".";

pub const CONDITIONS_LOOP_PROMPT: &str =
    "Noted. Any other existing conditions? If not, say \"no\".";

/// Appended once the analysis has been produced and persisted.
pub const COMPLETION_MESSAGE: &str =
    "Thank you. I've completed your assessment and I'm taking you to your results now.";

/// Appended when the analysis attempt fails; the dialogue stays on the
/// conditions stage so another negation retries it.
pub const RETRY_MESSAGE: &str =
    "I'm sorry, I couldn't complete your assessment just now. Please say \"no\" again in a moment and I'll retry.";

/// Reply to any message sent after the dialogue has completed.
pub const RESET_HINT: &str =
    "This assessment is finished. Start a new conversation to check other symptoms.";
