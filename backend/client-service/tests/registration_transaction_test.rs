//! Integration tests for the registration transaction manager.
//!
//! Coverage:
//! - Atomicity of the account + profile pair
//! - Key linkage between `clientes.fk_id_usuario` and the generated account key
//! - Rollback when the profile insert fails after the account insert
//! - Retry safety after a failed attempt
//! - Isolation of concurrent registrations

mod common;

use client_service::models::rol::DEFAULT_CLIENT_ROLE;
use client_service::services::registration::{RegistrationError, RegistrationService};
use common::{
    count_clientes_with_documento, count_usuarios_with_correo, sample_registration, setup_test_db,
};

#[tokio::test]
async fn register_persists_linked_account_and_profile() {
    let pool = setup_test_db().await.expect("test database");
    let service = RegistrationService::new(pool.clone());

    let registration = service
        .register(sample_registration("happy"))
        .await
        .expect("registration should commit");

    assert_eq!(
        registration.cliente.fk_id_usuario,
        registration.id_usuario,
        "profile must reference the account created in the same call"
    );
    assert_eq!(registration.cliente.nombre, "Ana");

    let (correo, estado, fk_rol): (String, String, i32) = sqlx::query_as(
        "SELECT correo, estado, fk_rol FROM usuarios WHERE id_usuario = $1",
    )
    .bind(registration.id_usuario)
    .fetch_one(&pool)
    .await
    .expect("account row must exist");

    assert_eq!(correo, "ana+happy@x.com");
    assert_eq!(estado, "Activo");
    assert_eq!(fk_rol, DEFAULT_CLIENT_ROLE);

    let profile_count = count_clientes_with_documento(&pool, "123happy")
        .await
        .unwrap();
    assert_eq!(profile_count, 1);
}

#[tokio::test]
async fn profile_failure_rolls_back_the_account_insert() {
    let pool = setup_test_db().await.expect("test database");
    let service = RegistrationService::new(pool.clone());

    service
        .register(sample_registration("dup"))
        .await
        .expect("first registration should commit");

    // Same document number violates the UNIQUE constraint on `clientes`,
    // so the second attempt fails only at the profile step.
    let mut second = sample_registration("dup");
    second.correo = "otra@x.com".to_string();

    let result = service.register(second).await;
    assert!(
        matches!(result, Err(RegistrationError::Write(_))),
        "profile constraint violation must surface as an undifferentiated write error"
    );

    let orphaned = count_usuarios_with_correo(&pool, "otra@x.com").await.unwrap();
    assert_eq!(
        orphaned, 0,
        "the account insert must not survive the failed profile insert"
    );

    let profiles = count_clientes_with_documento(&pool, "123dup").await.unwrap();
    assert_eq!(profiles, 1, "only the first registration persists");
}

#[tokio::test]
async fn retry_after_failure_leaves_no_residue() {
    let pool = setup_test_db().await.expect("test database");
    let service = RegistrationService::new(pool.clone());

    service
        .register(sample_registration("retry"))
        .await
        .expect("first registration should commit");

    let mut failing = sample_registration("retry");
    failing.correo = "failing@x.com".to_string();
    assert!(service.register(failing).await.is_err());

    // A fresh payload goes through untouched by the failed attempt.
    let registration = service
        .register(sample_registration("fresh"))
        .await
        .expect("retry with a fresh payload should commit");

    assert_eq!(
        count_usuarios_with_correo(&pool, "failing@x.com")
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        count_usuarios_with_correo(&pool, "ana+fresh@x.com")
            .await
            .unwrap(),
        1
    );
    assert_eq!(registration.cliente.numero_documento, "123fresh");
}

#[tokio::test]
async fn concurrent_registrations_produce_independent_pairs() {
    let pool = setup_test_db().await.expect("test database");
    let service = RegistrationService::new(pool.clone());

    let (first, second) = tokio::join!(
        service.register(sample_registration("uno")),
        service.register(sample_registration("dos"))
    );

    let first = first.expect("first concurrent registration");
    let second = second.expect("second concurrent registration");

    assert_ne!(first.id_usuario, second.id_usuario);
    assert_ne!(first.cliente.id_cliente, second.cliente.id_cliente);
    assert_eq!(first.cliente.fk_id_usuario, first.id_usuario);
    assert_eq!(second.cliente.fk_id_usuario, second.id_usuario);

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 2);
}
