use crate::analysis::validate::{parse_age, MAX_SYMPTOMS};
use crate::models::{ConversationMessage, MedicalHistory};

use super::script;
use super::stage::Stage;

/// What a submitted message amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Scripted replies were appended; the dialogue continues.
    Continue,
    /// The exit phrase at the final stage fired: run the analysis.
    RunAnalysis,
}

/// Pure dialogue state machine for one intake conversation.
///
/// Owns the stage, the collected symptoms, the medical history, and the
/// transcript. Performs no I/O: the final analysis is signalled to the
/// caller via [`Turn::RunAnalysis`], and its outcome is fed back through
/// [`complete`](Self::complete) / [`analysis_failed`](Self::analysis_failed).
pub struct IntakeController {
    stage: Stage,
    symptoms: Vec<String>,
    history: MedicalHistory,
    duration: Option<String>,
    transcript: Vec<ConversationMessage>,
}

impl IntakeController {
    /// Fresh conversation with a greeting rolled from the fixed pool.
    pub fn new() -> Self {
        let mut controller = Self {
            stage: Stage::ChiefComplaint,
            symptoms: Vec::new(),
            history: MedicalHistory::default(),
            duration: None,
            transcript: Vec::new(),
        };
        controller.say(script::roll_greeting());
        controller
    }

    /// Reset all accumulated state, re-rolling the greeting.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ── Accessors ────────────────────────────────────────────

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn history(&self) -> &MedicalHistory {
        &self.history
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn transcript(&self) -> &[ConversationMessage] {
        &self.transcript
    }

    // ── Dialogue ─────────────────────────────────────────────

    /// Feed one patient message through the current stage.
    ///
    /// Appends the patient message and the scripted reply to the
    /// transcript, updates accumulated state, and advances the stage
    /// (except in the self-looping list stages and on invalid age).
    pub fn submit(&mut self, text: &str) -> Turn {
        let text = text.trim().to_string();
        self.transcript.push(ConversationMessage::patient(&text));

        match self.stage {
            Stage::ChiefComplaint => self.on_chief_complaint(&text),
            Stage::Duration => self.on_duration(&text),
            Stage::Medication => self.on_medication(&text),
            Stage::AdditionalSymptoms => self.on_additional_symptoms(&text),
            Stage::Age => self.on_age(&text),
            Stage::Gender => self.on_gender(&text),
            Stage::ExistingConditions => self.on_existing_conditions(&text),
            Stage::Complete => {
                self.say(script::RESET_HINT);
                Turn::Continue
            }
        }
    }

    /// The analysis succeeded and its snapshot is persisted.
    pub fn complete(&mut self) {
        self.say(script::COMPLETION_MESSAGE);
        self.stage = Stage::Complete;
    }

    /// The analysis attempt failed; stay on the conditions stage so a
    /// subsequent exit phrase retries it.
    pub fn analysis_failed(&mut self) {
        self.say(script::RETRY_MESSAGE);
    }

    // ── Stage handlers ───────────────────────────────────────

    fn on_chief_complaint(&mut self, text: &str) -> Turn {
        self.symptoms.push(text.to_string());
        self.say(script::chief_complaint_reply(text));
        self.stage = Stage::Duration;
        Turn::Continue
    }

    fn on_duration(&mut self, text: &str) -> Turn {
        self.duration = Some(text.to_string());
        if script::mentions_duration(text) {
            self.say(script::DURATION_ACK_RECOGNIZED);
        } else {
            self.say(script::DURATION_ACK_GENERIC);
        }
        self.stage = Stage::Medication;
        Turn::Continue
    }

    fn on_medication(&mut self, text: &str) -> Turn {
        if script::is_negation(text) {
            self.say(script::MEDICATION_ACK_NONE);
        } else {
            self.history.medications.push(text.to_string());
            if script::mentions_medication(text) {
                self.say(script::MEDICATION_ACK_TAKEN);
            } else {
                self.say(script::MEDICATION_ACK_NOTED);
            }
        }
        self.stage = Stage::AdditionalSymptoms;
        Turn::Continue
    }

    fn on_additional_symptoms(&mut self, text: &str) -> Turn {
        if script::is_negation(text) {
            self.say(script::AGE_PROMPT);
            self.stage = Stage::Age;
        } else {
            // Silently capped; the analysis takes at most MAX_SYMPTOMS
            if self.symptoms.len() < MAX_SYMPTOMS {
                self.symptoms.push(text.to_string());
            }
            self.say(script::SYMPTOM_LOOP_PROMPT);
        }
        Turn::Continue
    }

    fn on_age(&mut self, text: &str) -> Turn {
        match parse_age(text) {
            Ok(age) => {
                self.history.age = Some(age);
                self.say(script::age_ack(age));
                self.stage = Stage::Gender;
            }
            Err(_) => {
                // Recovered locally: re-ask without advancing
                self.say(script::AGE_REPROMPT);
            }
        }
        Turn::Continue
    }

    fn on_gender(&mut self, text: &str) -> Turn {
        self.history.gender = Some(text.to_string());
        self.say(script::GENDER_ACK_CONDITIONS_PROMPT);
        self.stage = Stage::ExistingConditions;
        Turn::Continue
    }

    fn on_existing_conditions(&mut self, text: &str) -> Turn {
        if script::is_negation(text) {
            Turn::RunAnalysis
        } else {
            self.history.existing_conditions.push(text.to_string());
            self.say(script::CONDITIONS_LOOP_PROMPT);
            Turn::Continue
        }
    }

    fn say(&mut self, text: impl Into<String>) {
        self.transcript.push(ConversationMessage::assistant(text));
    }
}

impl Default for IntakeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Speaker;

    fn drive(controller: &mut IntakeController, inputs: &[&str]) -> Vec<Turn> {
        inputs.iter().map(|text| controller.submit(text)).collect()
    }

    #[test]
    fn new_conversation_opens_with_one_greeting() {
        let controller = IntakeController::new();
        assert_eq!(controller.stage(), Stage::ChiefComplaint);
        assert_eq!(controller.transcript().len(), 1);
        assert_eq!(controller.transcript()[0].speaker, Speaker::Assistant);
        assert!(script::GREETINGS.contains(&controller.transcript()[0].text.as_str()));
    }

    #[test]
    fn reset_twice_yields_identical_reset_state() {
        let mut controller = IntakeController::new();
        drive(&mut controller, &["headache", "3 days", "no"]);

        controller.reset();
        let first_stage = controller.stage();
        let first_symptoms = controller.symptoms().to_vec();
        let first_history = controller.history().clone();
        let first_len = controller.transcript().len();

        controller.reset();
        assert_eq!(controller.stage(), first_stage);
        assert_eq!(controller.stage(), Stage::ChiefComplaint);
        assert_eq!(controller.symptoms(), first_symptoms.as_slice());
        assert!(controller.symptoms().is_empty());
        assert_eq!(controller.history(), &first_history);
        assert!(controller.history().is_empty());
        assert!(controller.duration().is_none());
        // Single greeting message, modulo which greeting was rolled
        assert_eq!(controller.transcript().len(), first_len);
        assert_eq!(controller.transcript().len(), 1);
    }

    #[test]
    fn happy_path_drives_all_stages_and_triggers_analysis() {
        let mut controller = IntakeController::new();
        let turns = drive(
            &mut controller,
            &["headache", "3 days", "ibuprofen", "no", "34", "female", "none"],
        );

        assert_eq!(turns[..6], [Turn::Continue; 6]);
        assert_eq!(turns[6], Turn::RunAnalysis);

        assert_eq!(controller.symptoms(), ["headache"]);
        assert_eq!(controller.duration(), Some("3 days"));
        let history = controller.history();
        assert_eq!(history.age, Some(34));
        assert_eq!(history.gender.as_deref(), Some("female"));
        assert!(history.existing_conditions.is_empty());
        assert_eq!(history.medications, ["ibuprofen"]);
        // Still on the conditions stage until the analysis outcome lands
        assert_eq!(controller.stage(), Stage::ExistingConditions);
    }

    #[test]
    fn stage_indices_progress_zero_to_six() {
        let mut controller = IntakeController::new();
        assert_eq!(controller.stage().index(), 0);
        let inputs = ["headache", "3 days", "ibuprofen", "no", "34", "female"];
        for (i, text) in inputs.iter().enumerate() {
            controller.submit(text);
            assert_eq!(controller.stage().index() as usize, i + 1);
        }
    }

    #[test]
    fn out_of_range_age_reprompts_without_advancing() {
        let mut controller = IntakeController::new();
        drive(&mut controller, &["fever", "today", "nothing", "nausea", "no"]);
        assert_eq!(controller.stage(), Stage::Age);

        controller.submit("200");
        assert_eq!(controller.stage(), Stage::Age);
        assert!(controller.history().age.is_none());
        assert_eq!(
            controller.transcript().last().unwrap().text,
            script::AGE_REPROMPT
        );

        controller.submit("not a number");
        assert_eq!(controller.stage(), Stage::Age);

        controller.submit("41");
        assert_eq!(controller.stage(), Stage::Gender);
        assert_eq!(controller.history().age, Some(41));
    }

    #[test]
    fn symptom_loop_accumulates_until_negation() {
        let mut controller = IntakeController::new();
        drive(&mut controller, &["fever", "today", "no"]);
        assert_eq!(controller.stage(), Stage::AdditionalSymptoms);

        controller.submit("nausea");
        controller.submit("sore throat");
        assert_eq!(controller.stage(), Stage::AdditionalSymptoms);
        assert_eq!(controller.symptoms(), ["fever", "nausea", "sore throat"]);

        controller.submit("that's it");
        assert_eq!(controller.stage(), Stage::Age);
    }

    #[test]
    fn symptom_loop_caps_at_maximum() {
        let mut controller = IntakeController::new();
        drive(&mut controller, &["symptom one", "2 days", "no"]);
        for i in 0..15 {
            controller.submit(&format!("extra symptom {i}"));
        }
        assert_eq!(controller.symptoms().len(), MAX_SYMPTOMS);
        assert_eq!(controller.stage(), Stage::AdditionalSymptoms);
    }

    #[test]
    fn conditions_loop_accumulates_until_negation() {
        let mut controller = IntakeController::new();
        drive(
            &mut controller,
            &["headache", "1 week", "no", "no", "52", "male"],
        );
        assert_eq!(controller.stage(), Stage::ExistingConditions);

        assert_eq!(controller.submit("diabetes"), Turn::Continue);
        assert_eq!(controller.submit("hypertension"), Turn::Continue);
        assert_eq!(
            controller.history().existing_conditions,
            ["diabetes", "hypertension"]
        );

        assert_eq!(controller.submit("none"), Turn::RunAnalysis);
    }

    #[test]
    fn medication_negation_is_not_recorded() {
        let mut controller = IntakeController::new();
        drive(&mut controller, &["cough", "2 days", "no"]);
        assert!(controller.history().medications.is_empty());
    }

    #[test]
    fn failed_analysis_keeps_the_trigger_armed() {
        let mut controller = IntakeController::new();
        drive(
            &mut controller,
            &["headache", "3 days", "no", "no", "34", "female"],
        );

        assert_eq!(controller.submit("no"), Turn::RunAnalysis);
        controller.analysis_failed();
        assert_eq!(controller.stage(), Stage::ExistingConditions);

        // Resubmitting the exit phrase re-runs the negation check
        assert_eq!(controller.submit("no"), Turn::RunAnalysis);
    }

    #[test]
    fn completion_is_terminal_until_reset() {
        let mut controller = IntakeController::new();
        drive(
            &mut controller,
            &["headache", "3 days", "no", "no", "34", "female"],
        );
        assert_eq!(controller.submit("no"), Turn::RunAnalysis);
        controller.complete();
        assert_eq!(controller.stage(), Stage::Complete);

        assert_eq!(controller.submit("hello?"), Turn::Continue);
        assert_eq!(controller.stage(), Stage::Complete);
        assert_eq!(
            controller.transcript().last().unwrap().text,
            script::RESET_HINT
        );

        controller.reset();
        assert_eq!(controller.stage(), Stage::ChiefComplaint);
    }

    #[test]
    fn duration_ack_differs_by_indicator() {
        let mut with_indicator = IntakeController::new();
        with_indicator.submit("headache");
        with_indicator.submit("3 days");
        assert_eq!(
            with_indicator.transcript().last().unwrap().text,
            script::DURATION_ACK_RECOGNIZED
        );

        let mut without = IntakeController::new();
        without.submit("headache");
        without.submit("a while");
        assert_eq!(
            without.transcript().last().unwrap().text,
            script::DURATION_ACK_GENERIC
        );
    }
}
