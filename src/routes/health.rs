use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::suggestion_service::SuggestionResolver;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(resolver: web::Data<SuggestionResolver>) -> impl Responder {
    let mut health = HealthStatus {
        status: "healthy".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health
        .services
        .insert("catalog".to_string(), check_catalog(&resolver));
    health
        .services
        .insert("gemini".to_string(), check_gemini(&resolver));

    // The catalog always answers, so a disabled generator is not a degradation.
    if health.services.values().any(|service| service.status == "error") {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_catalog(resolver: &SuggestionResolver) -> ServiceStatus {
    let combinations = resolver.catalog().combination_count();
    if combinations == 0 {
        return ServiceStatus {
            status: "error".to_string(),
            details: Some("Catalog has no curated suggestions".to_string()),
        };
    }

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!(
            "{} curated combinations, max {} suggestions per request",
            combinations,
            resolver.max_count()
        )),
    }
}

fn check_gemini(resolver: &SuggestionResolver) -> ServiceStatus {
    match resolver.generator().and_then(|client| client.masked_key()) {
        Some(masked_key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Gemini API key configured ({})", masked_key)),
        },
        None => ServiceStatus {
            status: "disabled".to_string(),
            details: Some("GEMINI_API_KEY not configured, serving catalog only".to_string()),
        },
    }
}
