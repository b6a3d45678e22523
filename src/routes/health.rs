//! Health check and service descriptor endpoints

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "pdf-extraction-server",
    })
}

/// Service descriptor returned from `GET /`
#[derive(Serialize)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

pub async fn describe() -> Json<ServiceDescriptor> {
    let endpoints = BTreeMap::from([
        ("GET /health", "Service health"),
        ("POST /extract-pdf", "Extract text from uploaded PDF file"),
        ("POST /extract-pdf-url", "Extract text from PDF by URL"),
    ]);

    Json(ServiceDescriptor {
        message: "PDF Extraction API is running!",
        endpoints,
    })
}
