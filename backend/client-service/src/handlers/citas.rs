/// Appointment handlers
use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{db, error::AppError, metrics, models::NewCitaRequest, AppState};

/// Create an appointment. A single insert; the schedule is not checked for
/// overlapping slots.
#[utoipa::path(
    post,
    path = "/api/v1/citas",
    tag = "Citas",
    request_body = NewCitaRequest,
    responses(
        (status = 201, description = "Appointment created", body = crate::models::Cita),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_cita(
    state: web::Data<AppState>,
    payload: web::Json<NewCitaRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let cita = db::citas::insert_cita(&state.db, &payload)
        .await
        .map_err(|error| {
            metrics::CITAS_CREATED_TOTAL
                .with_label_values(&["failed"])
                .inc();
            AppError::from(error)
        })?;

    metrics::CITAS_CREATED_TOTAL
        .with_label_values(&["success"])
        .inc();

    Ok(HttpResponse::Created().json(cita))
}

/// List all appointments
#[utoipa::path(
    get,
    path = "/api/v1/citas",
    tag = "Citas",
    responses(
        (status = 200, description = "All appointments", body = [crate::models::Cita])
    )
)]
pub async fn list_citas(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let citas = db::citas::list_citas(&state.db).await?;
    Ok(HttpResponse::Ok().json(citas))
}
