use actix_web::{web, HttpResponse};

use crate::{db, error::AppError, AppState};

#[utoipa::path(
    get,
    path = "/api/v1/empleados",
    tag = "Empleados",
    responses(
        (status = 200, description = "All employees", body = [crate::models::Empleado])
    )
)]
pub async fn list_empleados(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let empleados = db::empleados::list_empleados(&state.db).await?;
    Ok(HttpResponse::Ok().json(empleados))
}
