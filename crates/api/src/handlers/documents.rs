//! Handlers for uploaded documents.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_db::models::document::Document;
use kompass_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/participants/{id}/documents (multipart)
///
/// Stores the file bytes in the file store and persists only metadata.
pub async fn upload(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Document>>)> {
    user.ensure_participant_access(participant_id)?;

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("document").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some((filename, data.to_vec()));
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Required multipart field 'file' is missing".into(),
        ))
    })?;

    let stored = state
        .files
        .save("documents", &filename, &bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("File store error: {e}")))?;

    let document = DocumentRepo::create(
        &state.pool,
        participant_id,
        &stored.file_name,
        &stored.file_path,
    )
    .await?;

    tracing::info!(
        participant_id,
        document_id = document.id,
        actor = %user.username,
        "Document uploaded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

/// GET /api/v1/participants/{id}/documents
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(participant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Document>>>> {
    user.ensure_participant_access(participant_id)?;
    let documents = DocumentRepo::list_by_participant(&state.pool, participant_id).await?;
    Ok(Json(DataResponse { data: documents }))
}
