use actix_web::{web, HttpResponse};

use crate::{db, error::AppError, AppState};

/// List all accounts. Stored credentials are skipped during serialization.
#[utoipa::path(
    get,
    path = "/api/v1/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "All accounts", body = [crate::models::Usuario])
    )
)]
pub async fn list_usuarios(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let usuarios = db::usuarios::list_usuarios(&state.db).await?;
    Ok(HttpResponse::Ok().json(usuarios))
}
