//! Handlers for storefront registrations.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use signup_core::error::CoreError;
use signup_core::metadata::MetadataValues;
use signup_core::registration::RegistrationForm;
use uuid::Uuid;

use crate::dispatch;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::tracker::RegistrationStatus;

/// Body posted by the storefront form.
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    /// Form field values.
    pub customer: Option<RegistrationForm>,
    /// Custom metadata values.
    pub metafield: Option<MetadataValues>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationAccepted {
    pub id: Uuid,
    pub status: RegistrationStatus,
    pub message: &'static str,
}

/// POST /process-shopify-registration
/// POST /api/v1/registrations
///
/// Validate that both top-level fields are present and dispatch the
/// registration. Answers 200 as soon as the task is spawned; the platform
/// calls finish later and are visible through [`get_registration`].
pub async fn submit_registration(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let (Some(form), Some(metadata)) = (request.customer, request.metafield) else {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid input: customer or metafield is missing".to_string(),
        )));
    };

    let id = dispatch::spawn_registration(
        &state.orchestrator,
        &state.tracker,
        &state.tasks,
        form,
        metadata,
    )
    .await;

    tracing::info!(registration_id = %id, "Registration accepted");

    Ok(Json(DataResponse {
        data: RegistrationAccepted {
            id,
            status: RegistrationStatus::Pending,
            message: "Form data received successfully",
        },
    }))
}

/// GET /api/v1/registrations/{id}
///
/// Current status of a registration, with the step report once finished.
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let record = state
        .tracker
        .get(id)
        .await
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Registration",
                id: id.to_string(),
            })
        })?;

    Ok(Json(DataResponse { data: record }))
}
