use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Profile row from the `clientes` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Cliente {
    pub id_cliente: i32,
    pub nombre: String,
    pub apellido: String,
    pub tipo_documento: String,
    pub numero_documento: String,
    pub correo: String,
    pub telefono: String,
    pub direccion: String,
    pub foto_perfil: Option<String>,
    pub estado: String,
    pub fk_id_usuario: i32,
    pub created_at: DateTime<Utc>,
}

/// Registration request body accepted by `POST /api/v1/clientes`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterClienteRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,

    #[validate(length(min = 1, max = 100))]
    pub apellido: String,

    #[validate(length(min = 1, max = 20))]
    pub tipo_documento: String,

    #[validate(length(min = 1, max = 30))]
    pub numero_documento: String,

    #[validate(email)]
    pub correo: String,

    #[validate(length(min = 1, max = 20))]
    pub telefono: String,

    #[validate(length(min = 1, max = 200))]
    pub direccion: String,

    pub foto_perfil: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub estado: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterClienteRequest {
        RegisterClienteRequest {
            nombre: "Ana".to_string(),
            apellido: "Ruiz".to_string(),
            tipo_documento: "CC".to_string(),
            numero_documento: "123".to_string(),
            correo: "ana@x.com".to_string(),
            telefono: "555".to_string(),
            direccion: "Calle 1".to_string(),
            foto_perfil: None,
            estado: "Activo".to_string(),
            password: "secret-password".to_string(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut request = valid_request();
        request.correo = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut request = valid_request();
        request.password = "short".to_string();
        assert!(request.validate().is_err());
    }
}
