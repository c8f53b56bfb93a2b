//! Profile queries against the `clientes` table
use crate::models::Cliente;
use crate::services::registration::NewClientRegistration;
use sqlx::{PgPool, Postgres, Transaction};

/// Insert the profile row for a freshly created account. Runs inside the
/// caller's transaction; `fk_id_usuario` must be the key generated by the
/// account insert in the same transaction.
pub async fn insert_profile(
    tx: &mut Transaction<'_, Postgres>,
    fk_id_usuario: i32,
    registration: &NewClientRegistration,
) -> Result<Cliente, sqlx::Error> {
    sqlx::query_as::<_, Cliente>(
        r#"
        INSERT INTO clientes (
            nombre, apellido, tipo_documento, numero_documento,
            correo, telefono, direccion, foto_perfil, estado, fk_id_usuario
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&registration.nombre)
    .bind(&registration.apellido)
    .bind(&registration.tipo_documento)
    .bind(&registration.numero_documento)
    .bind(&registration.correo)
    .bind(&registration.telefono)
    .bind(&registration.direccion)
    .bind(&registration.foto_perfil)
    .bind(&registration.estado)
    .bind(fk_id_usuario)
    .fetch_one(&mut **tx)
    .await
}

/// List active client profiles
pub async fn list_active_clientes(pool: &PgPool) -> Result<Vec<Cliente>, sqlx::Error> {
    sqlx::query_as::<_, Cliente>(
        r#"
        SELECT *
        FROM clientes
        WHERE estado = 'Activo'
        ORDER BY id_cliente
        "#,
    )
    .fetch_all(pool)
    .await
}
