//! Appointment queries against the `citas` table
use crate::models::{Cita, NewCitaRequest};
use sqlx::PgPool;

/// Create an appointment. Single-statement insert; slot conflicts are not
/// checked here.
pub async fn insert_cita(pool: &PgPool, cita: &NewCitaRequest) -> Result<Cita, sqlx::Error> {
    sqlx::query_as::<_, Cita>(
        r#"
        INSERT INTO citas (fk_id_empleado, servicio, fecha, hora, notas, estado)
        VALUES ($1, $2, $3, $4, $5, 'Pendiente')
        RETURNING *
        "#,
    )
    .bind(cita.fk_id_empleado)
    .bind(&cita.servicio)
    .bind(cita.fecha)
    .bind(cita.hora)
    .bind(&cita.notas)
    .fetch_one(pool)
    .await
}

/// List all appointments
pub async fn list_citas(pool: &PgPool) -> Result<Vec<Cita>, sqlx::Error> {
    sqlx::query_as::<_, Cita>(
        r#"
        SELECT *
        FROM citas
        ORDER BY fecha, hora
        "#,
    )
    .fetch_all(pool)
    .await
}
