//! Integration tests per la configurazione di sicurezza
//!
//! Test per:
//! - allow-list pubbliche (GET e POST) e rotte protette
//! - header di sicurezza, charset UTF-8 forzato, CORS

mod common;

#[cfg(test)]
mod security_tests {
    use super::common::*;
    use axum_test::http::{HeaderName, StatusCode};
    use cursomc::core::AppState;
    use sqlx::SqlitePool;
    use std::sync::Arc;

    // ============================================================
    // Allow-list
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categorias", "produtos")))]
    async fn test_anonymous_get_on_public_routes(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server.get("/categorias").await.assert_status_ok();
        server.get("/categorias/1").await.assert_status_ok();
        server.get("/produtos").await.assert_status_ok();
        server.get("/produtos/1").await.assert_status_ok();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_anonymous_requests_to_protected_routes(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server.get("/pedidos/1").await.assert_status_unauthorized();
        server.get("/pedidos").await.assert_status_unauthorized();
        server.get("/clientes").await.assert_status_unauthorized();
        server.get("/clientes/1").await.assert_status_unauthorized();
        server.get("/pagamentos/1").await.assert_status_unauthorized();
        // POST libero solo su /clientes, non su /categorias
        server
            .post("/categorias")
            .json(&serde_json::json!({ "nome": "Jardinagem" }))
            .await
            .assert_status_unauthorized();
        server.get("/").await.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test]
    async fn test_open_routes_without_handler_are_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server.post("/auth/forgot").await.assert_status_not_found();
        server.get("/h2-console").await.assert_status_not_found();
        server.delete("/h2-console/x").await.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_authenticated_request_to_protected_route(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server
            .get("/pedidos")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .await
            .assert_status_ok();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_non_bearer_header_is_anonymous(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server
            .get("/categorias")
            .add_header(authorization(), "Basic dXNlcjpwYXNz")
            .await
            .assert_status_ok();
        server
            .get("/pedidos")
            .add_header(authorization(), "Basic dXNlcjpwYXNz")
            .await
            .assert_status_unauthorized();
        Ok(())
    }

    // ============================================================
    // Header di risposta
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("categorias")))]
    async fn test_json_responses_declare_utf8(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server.get("/categorias").await;
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(content_type, "application/json; charset=UTF-8");

        let categorias: Vec<serde_json::Value> = response.json();
        assert_eq!(categorias[0]["nome"], "Informática");

        // anche le risposte di errore
        let error = server.get("/pedidos").await;
        let content_type = error.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.ends_with("charset=UTF-8"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_security_headers_in_test_profile(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server.get("/categorias").await;
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert!(response.headers().get("x-frame-options").is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_frames_denied_outside_test_profile(pool: SqlitePool) -> sqlx::Result<()> {
        let mut config = test_config();
        config.app_env = "dev".to_string();
        let state = Arc::new(AppState::new(pool, &config));
        let server = create_test_server(state);

        let response = server.get("/categorias").await;
        assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
        Ok(())
    }

    #[sqlx::test]
    async fn test_cors_allows_any_origin_and_exposes_authorization(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/categorias")
            .add_header(HeaderName::from_static("origin"), "http://localhost:4200")
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        let exposed = response
            .headers()
            .get("access-control-expose-headers")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(exposed.eq_ignore_ascii_case("authorization"));
        Ok(())
    }
}
