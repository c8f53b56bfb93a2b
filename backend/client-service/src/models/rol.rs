use serde::Serialize;
use utoipa::ToSchema;

/// Role id assigned to every self-registered client account.
/// Matches the `Cliente` row seeded by the initial migration.
pub const DEFAULT_CLIENT_ROLE: i32 = 2;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Rol {
    pub id_rol: i32,
    pub nombre: String,
    pub estado: String,
}
