use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Empleado {
    pub id_empleado: i32,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: String,
    pub cargo: String,
    pub estado: String,
}
