use crate::models::Rol;
use sqlx::PgPool;

/// List all roles
pub async fn list_roles(pool: &PgPool) -> Result<Vec<Rol>, sqlx::Error> {
    sqlx::query_as::<_, Rol>(
        r#"
        SELECT id_rol, nombre, estado
        FROM roles
        ORDER BY id_rol
        "#,
    )
    .fetch_all(pool)
    .await
}
