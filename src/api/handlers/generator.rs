// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};
use log::{debug, error};

use crate::api::types::{AnalysisRequest, AnalysisResponse, GenerationRequest, GenerationResponse};
use crate::generators;
use crate::models::GenerationConfig;

// Boundary cap; the core itself only requires length >= selected classes.
const MAX_LENGTH: usize = 128;

/// Generate a password
///
/// Generates a random password satisfying the requested constraints and
/// returns it together with its entropy estimate and strength label.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerationResponse),
        (status = 400, description = "Invalid configuration", body = GenerationResponse),
        (status = 500, description = "Server error", body = GenerationResponse)
    )
)]
pub async fn generate_password(
    generation_req: web::Json<GenerationRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    // Create options with defaults or provided values
    let config = GenerationConfig {
        length: generation_req.length.unwrap_or(16),
        include_lowercase: generation_req.include_lowercase.unwrap_or(true),
        include_uppercase: generation_req.include_uppercase.unwrap_or(true),
        include_digits: generation_req.include_digits.unwrap_or(true),
        include_symbols: generation_req.include_symbols.unwrap_or(true),
        exclude_ambiguous: generation_req.exclude_ambiguous.unwrap_or(false),
        exclude_consecutive_repeats: generation_req.exclude_consecutive_repeats.unwrap_or(true),
    };

    if config.length < 1 {
        return Ok(HttpResponse::BadRequest().json(GenerationResponse {
            success: false,
            password: None,
            entropy_bits: None,
            strength: None,
            error: Some("Password length must be at least 1 character".to_string()),
        }));
    }

    if config.length > MAX_LENGTH {
        return Ok(HttpResponse::BadRequest().json(GenerationResponse {
            success: false,
            password: None,
            entropy_bits: None,
            strength: None,
            error: Some(format!(
                "Password length must be at most {MAX_LENGTH} characters"
            )),
        }));
    }

    let password = match generators::generate(&config) {
        Ok(pwd) => pwd,
        Err(e) if e.is_configuration() => {
            debug!("Rejected generation config: {}", e);
            return Ok(HttpResponse::BadRequest().json(GenerationResponse {
                success: false,
                password: None,
                entropy_bits: None,
                strength: None,
                error: Some(e.to_string()),
            }));
        }
        Err(e) => {
            error!("Password generation failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(GenerationResponse {
                success: false,
                password: None,
                entropy_bits: None,
                strength: None,
                error: Some(format!("Failed to generate password: {}", e)),
            }));
        }
    };

    let assessment = generators::assess(&password);

    Ok(HttpResponse::Ok().json(GenerationResponse {
        success: true,
        password: Some(password),
        entropy_bits: Some(assessment.entropy_bits),
        strength: Some(assessment.label),
        error: None,
    }))
}

/// Analyze password strength
///
/// Scores any caller-supplied string; the password never leaves the request
/// scope and is not logged.
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = AnalysisResponse)
    )
)]
pub async fn analyze_password(analysis_req: web::Json<AnalysisRequest>) -> impl Responder {
    let assessment = generators::assess(&analysis_req.password);

    HttpResponse::Ok().json(AnalysisResponse {
        success: true,
        entropy_bits: Some(assessment.entropy_bits),
        strength: Some(assessment.label),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;
    use crate::api::routes::configure_routes;
    use crate::models::StrengthLabel;

    #[actix_web::test]
    async fn generate_defaults_to_sixteen_characters() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp: GenerationResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        assert_eq!(resp.password.unwrap().len(), 16);
        assert!(resp.entropy_bits.unwrap() > 0.0);
        assert!(resp.strength.is_some());
        assert!(resp.error.is_none());
    }

    #[actix_web::test]
    async fn generate_rejects_zero_length() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({ "length": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn generate_rejects_oversize_length() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({ "length": 500 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn generate_rejects_empty_class_selection() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({
                "include_lowercase": false,
                "include_uppercase": false,
                "include_digits": false,
                "include_symbols": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn generate_rejects_length_below_class_count() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({ "length": 2, "include_symbols": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn analysis_scores_lowercase_string() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/generator/analysis")
            .set_json(serde_json::json!({ "password": "abcd" }))
            .to_request();
        let resp: AnalysisResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        let entropy = resp.entropy_bits.unwrap();
        assert!((entropy - 18.8).abs() < 0.1);
        assert_eq!(resp.strength, Some(StrengthLabel::VeryWeak));
    }
}
