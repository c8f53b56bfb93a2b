/// Client registration and listing handlers
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    db,
    error::AppError,
    metrics,
    models::RegisterClienteRequest,
    security::password,
    services::registration::NewClientRegistration,
    AppState,
};

/// Confirmation returned after a committed registration
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterClienteResponse {
    pub message: String,
    pub id_usuario: i32,
    pub id_cliente: i32,
}

/// Register endpoint handler
///
/// Validates and hashes at the boundary, then hands the payload to the
/// registration transaction manager. Any core failure surfaces as an opaque
/// 500; the failed step is never exposed.
#[utoipa::path(
    post,
    path = "/api/v1/clientes",
    tag = "Clientes",
    request_body = RegisterClienteRequest,
    responses(
        (status = 201, description = "Client registered", body = RegisterClienteResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Registration failed")
    )
)]
pub async fn register_cliente(
    state: web::Data<AppState>,
    payload: web::Json<RegisterClienteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let request = payload.into_inner();

    let password_hash = password::hash_password(&request.password)?;

    let registration = state
        .registration
        .register(NewClientRegistration {
            nombre: request.nombre,
            apellido: request.apellido,
            tipo_documento: request.tipo_documento,
            numero_documento: request.numero_documento,
            correo: request.correo,
            telefono: request.telefono,
            direccion: request.direccion,
            foto_perfil: request.foto_perfil,
            estado: request.estado,
            password: password_hash,
        })
        .await
        .map_err(|error| {
            metrics::REGISTRATIONS_TOTAL
                .with_label_values(&["failed"])
                .inc();
            AppError::from(error)
        })?;

    metrics::REGISTRATIONS_TOTAL
        .with_label_values(&["success"])
        .inc();

    Ok(HttpResponse::Created().json(RegisterClienteResponse {
        message: "Cliente registrado correctamente".to_string(),
        id_usuario: registration.id_usuario,
        id_cliente: registration.cliente.id_cliente,
    }))
}

/// List active clients
#[utoipa::path(
    get,
    path = "/api/v1/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Active clients", body = [crate::models::Cliente])
    )
)]
pub async fn list_clientes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let clientes = db::clientes::list_active_clientes(&state.db).await?;
    Ok(HttpResponse::Ok().json(clientes))
}
