use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::schema::{validate_message, NewMessage};
use crate::state::AppState;

/// POST /api/contact
/// Validates the contact-form payload and stores it as a Message.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<NewMessage>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    validate_message(&payload)?;

    let message = state.storage.create_message(payload).await;
    info!("Contact message {} received from {}", message.id, message.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Message sent successfully!",
        })),
    ))
}
