//! Client registration transaction manager
//!
//! Owns the atomic two-step write behind `POST /api/v1/clientes`: the
//! account insert into `usuarios` and the dependent profile insert into
//! `clientes`. Either both rows are committed or neither survives.

use crate::db;
use crate::models::Cliente;
use sqlx::{PgPool, Postgres, Transaction};
use thiserror::Error;

/// Payload for one registration attempt. Fields are carried through to the
/// store verbatim; `password` is expected to be hashed by the caller.
#[derive(Debug, Clone)]
pub struct NewClientRegistration {
    pub nombre: String,
    pub apellido: String,
    pub tipo_documento: String,
    pub numero_documento: String,
    pub correo: String,
    pub telefono: String,
    pub direccion: String,
    pub foto_perfil: Option<String>,
    pub estado: String,
    pub password: String,
}

/// Outcome of a committed registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub id_usuario: i32,
    pub cliente: Cliente,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The store could not open a transaction; nothing was attempted.
    #[error("failed to open registration transaction: {0}")]
    Begin(#[source] sqlx::Error),

    /// One of the two inserts failed and the transaction was rolled back.
    /// The two insert steps are deliberately not distinguished here.
    #[error("registration write failed: {0}")]
    Write(#[source] sqlx::Error),

    /// Rollback itself failed after a write error. The store state is
    /// unknown; this must never be treated as retryable.
    #[error("rollback failed after write error ({write}): {rollback}")]
    Rollback {
        write: sqlx::Error,
        #[source]
        rollback: sqlx::Error,
    },

    /// The commit acknowledgement was lost. The outcome is store-determined
    /// and unknown to the caller; fatal, like a failed rollback.
    #[error("registration commit outcome unknown: {0}")]
    Commit(#[source] sqlx::Error),
}

/// Performs the account + profile registration as one atomic unit of work.
///
/// Holds no state besides the injected pool handle; concurrent `register`
/// calls each run in their own transaction.
#[derive(Clone)]
pub struct RegistrationService {
    pool: PgPool,
}

impl RegistrationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically create the account row and its dependent profile row.
    ///
    /// On success exactly one `usuarios` row and one `clientes` row are
    /// durably persisted, with `clientes.fk_id_usuario` equal to the key
    /// generated for the account in this same call. On failure zero rows of
    /// either kind survive. If the returned future is dropped before commit,
    /// the open transaction rolls back on drop.
    pub async fn register(
        &self,
        registration: NewClientRegistration,
    ) -> Result<Registration, RegistrationError> {
        let mut tx = self.pool.begin().await.map_err(RegistrationError::Begin)?;

        let id_usuario =
            match db::usuarios::insert_account(&mut tx, &registration.correo, &registration.password)
                .await
            {
                Ok(id) => id,
                Err(write) => return Err(abort(tx, write).await),
            };

        let cliente = match db::clientes::insert_profile(&mut tx, id_usuario, &registration).await {
            Ok(cliente) => cliente,
            Err(write) => return Err(abort(tx, write).await),
        };

        tx.commit().await.map_err(RegistrationError::Commit)?;

        tracing::info!(
            id_usuario,
            id_cliente = cliente.id_cliente,
            "client registered"
        );

        Ok(Registration {
            id_usuario,
            cliente,
        })
    }
}

/// Roll back after a failed insert, folding a rollback failure into the
/// fatal unknown-state variant.
async fn abort(tx: Transaction<'_, Postgres>, write: sqlx::Error) -> RegistrationError {
    match tx.rollback().await {
        Ok(()) => {
            tracing::warn!(error = %write, "registration rolled back");
            RegistrationError::Write(write)
        }
        Err(rollback) => {
            tracing::error!(
                write_error = %write,
                rollback_error = %rollback,
                "registration rollback failed, store state unknown"
            );
            RegistrationError::Rollback { write, rollback }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_message_does_not_name_the_failed_step() {
        let error = RegistrationError::Write(sqlx::Error::PoolClosed);
        let rendered = error.to_string();
        assert!(rendered.starts_with("registration write failed"));
        assert!(!rendered.contains("usuarios"));
        assert!(!rendered.contains("clientes"));
    }

    #[test]
    fn rollback_error_carries_both_causes() {
        let error = RegistrationError::Rollback {
            write: sqlx::Error::PoolClosed,
            rollback: sqlx::Error::PoolTimedOut,
        };
        let rendered = error.to_string();
        assert!(rendered.contains("rollback failed"));
        assert!(rendered.contains("timed out"));
    }
}
