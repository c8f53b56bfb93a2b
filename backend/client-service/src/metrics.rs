/// Prometheus metrics for the client service
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Total client registrations (labels: status=success|failed)
    pub static ref REGISTRATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "client_registrations_total",
        "Total number of client registration attempts",
        &["status"]
    )
    .unwrap();

    /// Total appointments created
    pub static ref CITAS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "citas_created_total",
        "Total number of appointments created",
        &["status"]
    )
    .unwrap();
}

/// Serialize all registered metrics in Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("failed to encode metrics: {}", err);
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_default()
}
