use actix_web::{web, HttpResponse};

use crate::{db, error::AppError, AppState};

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "All roles", body = [crate::models::Rol])
    )
)]
pub async fn list_roles(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let roles = db::roles::list_roles(&state.db).await?;
    Ok(HttpResponse::Ok().json(roles))
}
