use crate::models::Empleado;
use sqlx::PgPool;

/// List all employees
pub async fn list_empleados(pool: &PgPool) -> Result<Vec<Empleado>, sqlx::Error> {
    sqlx::query_as::<_, Empleado>(
        r#"
        SELECT id_empleado, nombre, apellido, correo, telefono, cargo, estado
        FROM empleados
        ORDER BY id_empleado
        "#,
    )
    .fetch_all(pool)
    .await
}
