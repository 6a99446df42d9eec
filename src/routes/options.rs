use actix_web::{web, HttpResponse, Responder};

use crate::services::suggestion_service::SuggestionResolver;

/*
    /api/options
*/
pub async fn get_options(resolver: web::Data<SuggestionResolver>) -> impl Responder {
    HttpResponse::Ok().json(resolver.catalog().options())
}
