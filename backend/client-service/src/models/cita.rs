use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Appointment row from the `citas` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Cita {
    pub id_cita: i32,
    pub fk_id_empleado: i32,
    pub servicio: String,
    pub fecha: NaiveDate,
    #[schema(value_type = String, example = "10:30:00")]
    pub hora: NaiveTime,
    pub notas: Option<String>,
    pub estado: String,
    pub created_at: DateTime<Utc>,
}

/// Appointment creation body. One plain insert, no slot-conflict checking.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewCitaRequest {
    #[validate(range(min = 1))]
    pub fk_id_empleado: i32,

    #[validate(length(min = 1, max = 150))]
    pub servicio: String,

    pub fecha: NaiveDate,

    #[schema(value_type = String, example = "10:30:00")]
    pub hora: NaiveTime,

    pub notas: Option<String>,
}
