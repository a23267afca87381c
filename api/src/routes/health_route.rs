use axum::{Json, response::IntoResponse};
use serde::Serialize;

use crate::core::http::envelope::DataEnvelope;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health_route() -> impl IntoResponse {
    Json(DataEnvelope::new(HealthStatus { status: "ok" }))
}
