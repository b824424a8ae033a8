//! Handlers for the `/insatser` catalog resource.
//!
//! Templates are created from a multipart form so attachments can ride
//! along: text fields describe the template, any number of `files` fields
//! carry attachments.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use kompass_core::error::CoreError;
use kompass_core::types::DbId;
use kompass_core::validation::require_present;
use kompass_db::models::insats::{CreateInsats, InsatsWithFiles, NewInsatsFile};
use kompass_db::repositories::InsatsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// Parse a multipart form into the template DTO plus raw attachments.
async fn parse_form(
    multipart: &mut Multipart,
) -> Result<(CreateInsats, Vec<(String, Vec<u8>)>), AppError> {
    let mut input = CreateInsats {
        name: None,
        focus_type: None,
        description: None,
        combine_with: None,
        insats_type1: None,
        insats_type2: None,
        insats_type3: None,
        insats_type4: None,
        insats_type5: None,
        start_date: None,
        end_date: None,
        last_date: None,
        responsible: None,
    };
    let mut uploads: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "files" {
            let filename = field.file_name().unwrap_or("attachment").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            uploads.push((filename, data.to_vec()));
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        // Empty form fields mean "not set".
        let value = (!text.trim().is_empty()).then(|| text.trim().to_string());

        match name.as_str() {
            "name" => input.name = value,
            "focusType" => input.focus_type = value,
            "description" => input.description = value,
            "combineWith" => input.combine_with = value,
            "insatsType1" => input.insats_type1 = value,
            "insatsType2" => input.insats_type2 = value,
            "insatsType3" => input.insats_type3 = value,
            "insatsType4" => input.insats_type4 = value,
            "insatsType5" => input.insats_type5 = value,
            "startDate" => input.start_date = parse_date(value.as_deref(), "startDate")?,
            "endDate" => input.end_date = parse_date(value.as_deref(), "endDate")?,
            "lastDate" => input.last_date = parse_date(value.as_deref(), "lastDate")?,
            "responsible" => input.responsible = value,
            _ => {}
        }
    }

    Ok((input, uploads))
}

/// Parse an optional `YYYY-MM-DD` form value.
fn parse_date(value: Option<&str>, field: &'static str) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Field '{field}' must be YYYY-MM-DD"))),
    }
}

/// POST /api/v1/insatser (multipart)
///
/// Create a catalog template together with its attachments. File bytes go
/// to the file store; the template row and all file rows are inserted in
/// one transaction.
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<InsatsWithFiles>>)> {
    let (input, uploads) = parse_form(&mut multipart).await?;

    require_present(&input.name, "name").map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    require_present(&input.focus_type, "focusType")
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let mut files = Vec::with_capacity(uploads.len());
    for (filename, bytes) in &uploads {
        let stored = state
            .files
            .save("insatser", filename, bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("File store error: {e}")))?;
        files.push(NewInsatsFile {
            file_name: stored.file_name,
            file_path: stored.file_path,
        });
    }

    let insats = InsatsRepo::create(&state.pool, &input, &files).await?;
    let with_files = InsatsRepo::find_with_files(&state.pool, insats.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Insats",
            id: insats.id,
        }))?;

    tracing::info!(
        insats_id = insats.id,
        files = files.len(),
        actor = %user.username,
        "Insats template created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: with_files })))
}

/// GET /api/v1/insatser
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<InsatsWithFiles>>>> {
    let templates = InsatsRepo::list_with_files(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/insatser/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<InsatsWithFiles>>> {
    let insats = InsatsRepo::find_with_files(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Insats",
            id,
        }))?;
    Ok(Json(DataResponse { data: insats }))
}

/// DELETE /api/v1/insatser/{id}
///
/// Removing a template affects every case worker's catalog, so only
/// admins may do it.
pub async fn delete(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = InsatsRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Insats",
            id,
        }))
    }
}
