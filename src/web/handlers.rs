use axum::{extract::rejection::JsonRejection, extract::State, response::IntoResponse, Json};
use serde_json::{json, Value};

use super::{error::AppError, AppState};
use crate::{predict, Answers, QUESTIONS};

/// Scores the posted answers.
///
/// The configured input policy runs before scoring, so out-of-range values
/// are scored, clamped or refused depending on the server setup.
pub async fn predict_stress(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;
    let answers = Answers::from_json(&body)?;
    let answers = state.config.input_policy.apply(answers)?;
    let prediction = predict(&answers);
    tracing::info!(score = prediction.score, label = prediction.label, "prediction served");
    Ok(Json(prediction))
}

/// Lists the questionnaire so a client can build its form.
pub async fn list_questions() -> impl IntoResponse {
    Json(json!({
        "title": QUESTIONS.title,
        "questions": QUESTIONS.views(),
    }))
}
