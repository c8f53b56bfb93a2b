//! Account queries against the `usuarios` table
use crate::models::rol::DEFAULT_CLIENT_ROLE;
use crate::models::Usuario;
use sqlx::{PgPool, Postgres, Transaction};

/// Insert the account row for a new client registration and return the
/// generated key. Runs inside the caller's transaction; the key is what the
/// dependent profile insert links against.
pub async fn insert_account(
    tx: &mut Transaction<'_, Postgres>,
    correo: &str,
    password: &str,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO usuarios (correo, password, estado, fk_rol)
        VALUES ($1, $2, 'Activo', $3)
        RETURNING id_usuario
        "#,
    )
    .bind(correo)
    .bind(password)
    .bind(DEFAULT_CLIENT_ROLE)
    .fetch_one(&mut **tx)
    .await
}

/// List all accounts
pub async fn list_usuarios(pool: &PgPool) -> Result<Vec<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>(
        r#"
        SELECT id_usuario, correo, password, estado, fk_rol, created_at
        FROM usuarios
        ORDER BY id_usuario
        "#,
    )
    .fetch_all(pool)
    .await
}
