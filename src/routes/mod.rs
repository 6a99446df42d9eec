pub mod health;
pub mod options;
pub mod suggestion;

use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

/// Routes under /api plus the health check.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/suggestions", web::post().to(suggestion::get_suggestions))
                .route("/options", web::get().to(options::get_options)),
        );
}

/// Malformed or mistyped JSON bodies get the same JSON 400 as missing fields.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": "Missing required parameters" })),
        )
        .into()
    })
}
