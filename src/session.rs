//! Per-visitor conversation sessions.
//!
//! Each visitor's intake dialogue lives in an `IntakeSession`, which
//! composes the pure dialogue controller with the shared analyzer and
//! result store. Sessions are held in a registry keyed by session id,
//! each behind its own mutex so one visitor's in-flight analysis never
//! blocks another's.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::analysis::Analyzer;
use crate::intake::{IntakeController, Stage, Turn};
use crate::models::{AnalysisSnapshot, ConversationMessage};
use crate::store::{ResultStore, StoreError};

/// Where the client is sent once an assessment completes, and how long
/// it should linger on the completion message first.
pub const RESULTS_REDIRECT: &str = "/results";
pub const RESULTS_REDIRECT_DELAY_MS: u64 = 2000;

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Unknown session: {0}")]
    UnknownSession(Uuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What one submitted message produced.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Assistant messages appended this turn, in order.
    pub replies: Vec<ConversationMessage>,
    /// Wire-facing stage index after the turn.
    pub stage_index: u8,
    /// True once the analysis snapshot has been persisted.
    pub completed: bool,
}

// ═══════════════════════════════════════════════════════════
// IntakeSession — one visitor's composed flow
// ═══════════════════════════════════════════════════════════

/// One visitor's conversation plus the shared analysis/persistence handles.
pub struct IntakeSession {
    controller: IntakeController,
    analyzer: Analyzer,
    results: ResultStore,
}

impl IntakeSession {
    pub fn new(analyzer: Analyzer, results: ResultStore) -> Self {
        Self {
            controller: IntakeController::new(),
            analyzer,
            results,
        }
    }

    pub fn transcript(&self) -> &[ConversationMessage] {
        self.controller.transcript()
    }

    pub fn stage(&self) -> Stage {
        self.controller.stage()
    }

    /// Reset the dialogue, re-rolling the greeting. The shared handles
    /// and any persisted snapshot are untouched.
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Feed one patient message through the flow.
    ///
    /// On the final-stage exit phrase this runs the analysis: on success
    /// the snapshot (plus preventive recommendations when age and gender
    /// are both known) is persisted before the completion message is
    /// appended; on failure a retry invitation is appended and the stage
    /// stays put so another exit phrase retries.
    pub fn submit_user_message(&mut self, text: &str) -> Result<SubmitOutcome, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let before = self.controller.transcript().len();
        let turn = self.controller.submit(text);
        let mut completed = false;

        if turn == Turn::RunAnalysis {
            match self.analyzer.analyze(
                self.controller.symptoms(),
                self.controller.history(),
                self.controller.duration(),
            ) {
                Ok(analysis) => {
                    let snapshot = AnalysisSnapshot {
                        analysis,
                        preventive_recommendations: self.fetch_preventive(),
                        date: chrono::Utc::now().to_rfc3339(),
                        symptoms: self.controller.symptoms().to_vec(),
                        medical_history: self.controller.history().clone(),
                    };
                    self.results.save(&snapshot)?;
                    self.controller.complete();
                    completed = true;
                }
                Err(e) => {
                    tracing::error!(error = %e, "symptom analysis failed");
                    self.controller.analysis_failed();
                }
            }
        }

        let replies = self.controller.transcript()[before + 1..].to_vec();
        Ok(SubmitOutcome {
            replies,
            stage_index: self.controller.stage().index(),
            completed,
        })
    }

    /// Secondary call, only when age and gender are both present.
    /// Failure is logged and swallowed; the primary flow proceeds.
    fn fetch_preventive(&self) -> Vec<String> {
        let history = self.controller.history();
        let (Some(age), Some(gender)) = (history.age, history.gender.as_deref()) else {
            return Vec::new();
        };
        match self
            .analyzer
            .preventive_recommendations(age, gender, &history.existing_conditions)
        {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(error = %e, "preventive recommendations unavailable");
                Vec::new()
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════
// SessionRegistry — all live conversations
// ═══════════════════════════════════════════════════════════

/// Registry of live intake sessions, keyed by session id.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, Arc<Mutex<IntakeSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh session; returns its id.
    pub fn insert(&mut self, session: IntakeSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, Arc::new(Mutex::new(session)));
        id
    }

    /// Look up a session by id.
    pub fn get(&self, id: &Uuid) -> Option<Arc<Mutex<IntakeSession>>> {
        self.sessions.get(id).cloned()
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
