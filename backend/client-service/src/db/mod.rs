pub mod citas;
pub mod clientes;
pub mod empleados;
pub mod roles;
pub mod usuarios;

use sqlx::PgPool;

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
