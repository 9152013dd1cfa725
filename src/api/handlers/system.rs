// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};

use crate::api::types::StatusResponse;

/// Get service status
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    )
)]
pub async fn get_status() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        success: true,
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;
    use crate::api::routes::configure_routes;

    #[actix_web::test]
    async fn status_reports_service_and_version() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/system/status").to_request();
        let resp: StatusResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        assert_eq!(resp.service, env!("CARGO_PKG_NAME"));
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }
}
