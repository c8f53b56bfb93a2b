use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Account row from the `usuarios` table.
///
/// The stored credential is never serialized in API responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Usuario {
    pub id_usuario: i32,
    pub correo: String,
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    pub estado: String,
    pub fk_rol: i32,
    pub created_at: DateTime<Utc>,
}
