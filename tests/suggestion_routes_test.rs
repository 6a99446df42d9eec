mod common;

use actix_web::test;
use serde_json::json;

use common::TestApp;

#[actix_rt::test]
async fn test_health_check() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["catalog"]["status"], "ok");
    assert_eq!(body["services"]["gemini"]["status"], "disabled");
}

#[actix_rt::test]
async fn test_health_masks_gemini_key() {
    let test_app = TestApp::with_gemini(common::gemini_config("http://127.0.0.1:9", "ok-model"));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["services"]["gemini"]["status"], "ok");
    let details = body["services"]["gemini"]["details"].as_str().unwrap();
    assert!(details.contains("test***0001"));
    assert!(!details.contains(common::TEST_API_KEY));
}

#[actix_rt::test]
async fn test_options_in_display_order() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/options").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["locations"], json!(["Washington D.C.", "Maryland", "Virginia"]));
    assert_eq!(body["times"], json!(["Morning", "Afternoon", "Evening"]));
    assert_eq!(body["budgets"], json!(["Free", "$", "$$", "$$$"]));
}

#[actix_rt::test]
async fn test_catalog_suggestions_for_known_key() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/suggestions")
        .set_json(&json!({
            "location": "Washington D.C.",
            "time": "Morning",
            "budget": "Free"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let suggestions = body.as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 6);
    assert_eq!(suggestions[0]["name"], "Sunrise at the Lincoln Memorial");
    for suggestion in suggestions {
        for field in ["name", "description", "estimated_cost", "location_hint"] {
            assert!(!suggestion[field].as_str().unwrap().is_empty());
        }
    }
}

#[actix_rt::test]
async fn test_unknown_location_returns_defaults() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for (budget, cost) in [("Free", "Free"), ("$$", "Varies")] {
        let req = test::TestRequest::post()
            .uri("/api/suggestions")
            .set_json(&json!({
                "location": "Nowhere",
                "time": "Morning",
                "budget": budget
            }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let suggestions = body.as_array().unwrap();
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions.iter().all(|s| s["estimated_cost"] == cost));
    }
}

#[actix_rt::test]
async fn test_missing_parameters() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/suggestions")
        .set_json(&json!({
            "location": "Virginia",
            "time": "Evening"
            // Missing budget
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing required parameters");

    let req = test::TestRequest::post()
        .uri("/api/suggestions")
        .set_json(&json!({
            "location": "",
            "time": "Evening",
            "budget": "$"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_malformed_body_gets_json_error() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/suggestions")
        .set_json(&json!({
            "location": "Virginia",
            "time": "Evening",
            "budget": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing required parameters");

    let req = test::TestRequest::post()
        .uri("/api/suggestions")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing required parameters");
}

#[actix_rt::test]
async fn test_suggestions_is_post_only() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/suggestions").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status() == 404 || resp.status() == 405);
}
