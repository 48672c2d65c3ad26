//! Chat endpoints driving the symptom-intake flow.
//!
//! - `POST /api/chat/start` — open a conversation
//! - `POST /api/chat/message` — submit one patient message
//! - `POST /api/chat/reset` — start over in the same session
//! - `GET  /api/chat/:id/transcript` — full ordered transcript

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{
    ApiContext, ChatMessageRequest, ChatMessageResponse, ChatResetRequest, ChatStartResponse,
    Navigation, TranscriptResponse,
};
use crate::session::{IntakeSession, RESULTS_REDIRECT, RESULTS_REDIRECT_DELAY_MS};

/// `POST /api/chat/start` — create a session and return its greeting.
pub async fn start(State(ctx): State<ApiContext>) -> Result<Json<ChatStartResponse>, ApiError> {
    let session = IntakeSession::new(ctx.analyzer.clone(), ctx.results());
    let greeting = session
        .transcript()
        .first()
        .map(|m| m.text.clone())
        .unwrap_or_default();
    let stage_index = session.stage().index();

    let mut registry = ctx
        .sessions
        .lock()
        .map_err(|_| ApiError::Internal("session registry lock poisoned".into()))?;
    let session_id = registry.insert(session);

    tracing::info!(%session_id, "conversation started");
    Ok(Json(ChatStartResponse {
        session_id,
        greeting,
        stage_index,
    }))
}

/// `POST /api/chat/message` — feed one message through the flow.
///
/// The analysis step issues a blocking outbound call, so the whole
/// submission runs on the blocking pool while only this session's
/// mutex is held.
pub async fn message(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".into()));
    }

    let session = lookup(&ctx, &req.session_id)?;
    let outcome = tokio::task::spawn_blocking(move || {
        let mut session = session
            .lock()
            .map_err(|_| ApiError::Internal("session lock poisoned".into()))?;
        session
            .submit_user_message(&req.message)
            .map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("submission task failed: {e}")))??;

    let navigation = outcome.completed.then_some(Navigation {
        redirect: RESULTS_REDIRECT,
        delay_ms: RESULTS_REDIRECT_DELAY_MS,
    });

    Ok(Json(ChatMessageResponse {
        replies: outcome.replies,
        stage_index: outcome.stage_index,
        completed: outcome.completed,
        navigation,
    }))
}

/// `POST /api/chat/reset` — wipe the dialogue, keep the session id.
pub async fn reset(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatResetRequest>,
) -> Result<Json<ChatStartResponse>, ApiError> {
    let session = lookup(&ctx, &req.session_id)?;
    let mut session = session
        .lock()
        .map_err(|_| ApiError::Internal("session lock poisoned".into()))?;
    session.reset();

    Ok(Json(ChatStartResponse {
        session_id: req.session_id,
        greeting: session
            .transcript()
            .first()
            .map(|m| m.text.clone())
            .unwrap_or_default(),
        stage_index: session.stage().index(),
    }))
}

/// `GET /api/chat/:id/transcript` — ordered transcript for one session.
pub async fn transcript(
    State(ctx): State<ApiContext>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let session = lookup(&ctx, &session_id)?;
    let session = session
        .lock()
        .map_err(|_| ApiError::Internal("session lock poisoned".into()))?;

    Ok(Json(TranscriptResponse {
        session_id,
        messages: session.transcript().to_vec(),
        stage_index: session.stage().index(),
    }))
}

fn lookup(ctx: &ApiContext, id: &Uuid) -> Result<Arc<Mutex<IntakeSession>>, ApiError> {
    let registry = ctx
        .sessions
        .lock()
        .map_err(|_| ApiError::Internal("session registry lock poisoned".into()))?;
    registry
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown session: {id}")))
}
