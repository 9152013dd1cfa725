// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::GenerationRequest,
            crate::api::types::GenerationResponse,
            crate::api::types::AnalysisRequest,
            crate::api::types::AnalysisResponse,
            crate::api::types::StatusResponse,
            crate::models::GenerationConfig,
            crate::models::StrengthLabel,
            crate::models::StrengthAssessment
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and analysis endpoints"),
        (name = "System", description = "Service status endpoints")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Constrained random password generation service",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(host: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting passforge API server on {}:{}", host, port);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(routes::configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
