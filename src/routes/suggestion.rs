use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::suggestion::SuggestionRequest;
use crate::services::suggestion_service::SuggestionResolver;

/*
    /api/suggestions
*/
pub async fn get_suggestions(
    resolver: web::Data<SuggestionResolver>,
    input: web::Json<SuggestionRequest>,
) -> impl Responder {
    let criteria = match input.into_inner().into_criteria() {
        Some(criteria) => criteria,
        None => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": "Missing required parameters" }));
        }
    };

    let resolution = resolver.resolve(&criteria).await;
    log::info!(
        "Returning {} suggestions for {} / {} / {} ({:?})",
        resolution.suggestions.len(),
        criteria.location,
        criteria.time_of_day,
        criteria.budget_tier,
        resolution.source
    );

    HttpResponse::Ok().json(resolution.suggestions)
}
