//! CORS middleware configuration for cross-origin requests.
//!
//! Development is permissive. Everywhere else only the origins listed in
//! `server.allowed_origins` are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use tutora_shared::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the given environment.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    if environment.is_development() {
        create_development_cors(server.cors_max_age)
    } else {
        create_restricted_cors(server)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::OPTIONS]
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static("x-user-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
        .supports_credentials()
}

fn create_restricted_cors(server: &ServerConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-user-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(server.cors_max_age);

    for origin in server.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            tracing::info!(origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    if server.allowed_origins.is_empty() {
        tracing::warn!("No CORS origins configured; cross-origin requests will be rejected");
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_rt::test]
    async fn test_development_cors_allows_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&ServerConfig::default(), Environment::Development))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_rt::test]
    async fn test_production_cors_uses_configured_origins() {
        let server = ServerConfig {
            allowed_origins: vec!["https://app.tutora.com".to_string()],
            ..Default::default()
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&server, Environment::Production))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://app.tutora.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://app.tutora.com")
        );
    }
}
