//! Shared context and wire DTOs for the API layer.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{Analyzer, TextGenClient};
use crate::appointment::AppointmentBook;
use crate::models::ConversationMessage;
use crate::session::SessionRegistry;
use crate::store::{KvStore, ResultStore};

// ═══════════════════════════════════════════════════════════
// API context — shared state for all routes
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes: the injected store, the analyzer,
/// and the live session registry.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn KvStore>,
    pub analyzer: Analyzer,
    pub sessions: Arc<Mutex<SessionRegistry>>,
}

impl ApiContext {
    pub fn new(store: Arc<dyn KvStore>, client: Arc<dyn TextGenClient>) -> Self {
        Self {
            store,
            analyzer: Analyzer::new(client),
            sessions: Arc::new(Mutex::new(SessionRegistry::new())),
        }
    }

    pub fn results(&self) -> ResultStore {
        ResultStore::new(self.store.clone())
    }

    pub fn bookings(&self) -> AppointmentBook {
        AppointmentBook::new(self.store.clone())
    }
}

// ═══════════════════════════════════════════════════════════
// Chat DTOs
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStartResponse {
    pub session_id: Uuid,
    pub greeting: String,
    pub stage_index: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub session_id: Uuid,
    pub message: String,
}

/// Navigation hint returned once the assessment completes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub redirect: &'static str,
    pub delay_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub replies: Vec<ConversationMessage>,
    pub stage_index: u8,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResetRequest {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub messages: Vec<ConversationMessage>,
    pub stage_index: u8,
}

// ═══════════════════════════════════════════════════════════
// Appointment DTOs
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub cancelled: bool,
}
