#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use dmv_adventure_api::config::GeminiConfig;
use dmv_adventure_api::routes;
use dmv_adventure_api::services::{
    catalog_service::SuggestionCatalog, gemini_service::GeminiClient,
    suggestion_service::SuggestionResolver,
};

pub const TEST_API_KEY: &str = "test-gemini-key-0001";

pub struct TestApp {
    pub resolver: web::Data<SuggestionResolver>,
}

impl TestApp {
    /// Catalog only, no generation credential.
    pub fn new() -> Self {
        Self::with_gemini(GeminiConfig::default())
    }

    pub fn with_gemini(config: GeminiConfig) -> Self {
        let catalog = Arc::new(SuggestionCatalog::builtin().expect("builtin catalog"));
        let client = GeminiClient::new(&config).expect("gemini client");
        Self {
            resolver: web::Data::new(SuggestionResolver::new(catalog, Some(client))),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.resolver.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    }
}

pub fn gemini_config(endpoint: &str, model: &str) -> GeminiConfig {
    GeminiConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        model: model.to_string(),
        endpoint: endpoint.to_string(),
        timeout: Duration::from_millis(500),
    }
}

fn candidate_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

async fn generate_ok(req: HttpRequest, body: web::Json<serde_json::Value>) -> impl Responder {
    let key = req
        .headers()
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok());
    if key != Some(TEST_API_KEY) {
        return HttpResponse::Forbidden().json(json!({ "error": { "message": "bad key" } }));
    }

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    if !prompt.contains("Washington D.C.") {
        return HttpResponse::BadRequest().json(json!({ "error": { "message": "unexpected prompt" } }));
    }

    let text = r#"Here are four ideas for your morning:
[
  {"name": "Sunrise at the Lincoln Memorial Steps", "description": "Dup of a catalog title.", "estimated_cost": "Free", "location_hint": "National Mall"},
  {"name": "Hains Point Loop Walk", "description": "Walk the peninsula loop.", "estimated_cost": "Free", "location_hint": "East Potomac Park"},
  {"name": "Broken Entry", "description": "No cost or hint."},
  {"name": "Embassy Row Architecture Walk", "description": "Admire the embassies.", "estimated_cost": "Free", "location_hint": "Massachusetts Avenue"},
  {"name": "Dawn Birding on the Anacostia", "description": "Spot herons.", "estimated_cost": "Free", "location_hint": "Kenilworth Park"}
]
Have fun!"#;
    HttpResponse::Ok().json(candidate_text(text))
}

async fn generate_error() -> impl Responder {
    HttpResponse::InternalServerError().json(json!({ "error": { "message": "overloaded" } }))
}

async fn generate_garbage() -> impl Responder {
    HttpResponse::Ok().json(candidate_text("Sorry, I cannot produce suggestions right now."))
}

async fn generate_slow() -> impl Responder {
    actix_rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().json(candidate_text("[]"))
}

/// Starts a local stand-in for the Gemini API and returns its base URL.
/// Each model name selects a behavior: ok-model, error-model, garbage-model, slow-model.
pub fn spawn_mock_gemini() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route(
                "/v1beta/models/ok-model:generateContent",
                web::post().to(generate_ok),
            )
            .route(
                "/v1beta/models/error-model:generateContent",
                web::post().to(generate_error),
            )
            .route(
                "/v1beta/models/garbage-model:generateContent",
                web::post().to(generate_garbage),
            )
            .route(
                "/v1beta/models/slow-model:generateContent",
                web::post().to(generate_slow),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind mock gemini");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{}", addr)
}
