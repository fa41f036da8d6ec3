//! Integration tests per gli endpoints dei pedidos e dei pagamenti
//!
//! Test per:
//! - POST /pedidos
//! - GET /pedidos, GET /pedidos/{id}
//! - GET /pagamentos/{id}

mod common;

#[cfg(test)]
mod pedido_tests {
    use super::common::*;
    use axum_test::http::StatusCode;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // Test per POST /pedidos - insert_pedido
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_com_boleto(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/pedidos")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .json(&json!({ "pagamento": { "@type": "pagamentoComBoleto" } }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let pedido: serde_json::Value = response.json();
        let id = pedido["id"].as_i64().unwrap();
        assert_eq!(
            response.headers().get("location").unwrap().to_str().unwrap(),
            format!("/pedidos/{}", id)
        );
        assert_eq!(pedido["clienteId"], 2);

        let pagamento = &pedido["pagamento"];
        assert_eq!(pagamento["@type"], "pagamentoComBoleto");
        assert_eq!(pagamento["id"], id);
        assert_eq!(pagamento["estadoPagamento"], "PENDENTE");
        let vencimento = (Utc::now() + Duration::days(7)).format("%d/%m/%Y").to_string();
        assert_eq!(pagamento["dataVencimento"], vencimento);
        assert!(pagamento["dataPagamento"].is_null());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_com_cartao(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);
        let token = create_test_jwt(CLIENTE_EMAIL);

        let response = server
            .post("/pedidos")
            .add_header(authorization(), bearer(&token))
            .json(&json!({
                "pagamento": { "@type": "pagamentoComCartao", "numeroDeParcelas": 10 }
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created: serde_json::Value = response.json();

        // riletto dal database, il tipo viene ricostruito dal discriminatore
        let pedido: serde_json::Value = server
            .get(&format!("/pedidos/{}", created["id"]))
            .add_header(authorization(), bearer(&token))
            .await
            .json();
        assert_eq!(pedido["pagamento"]["@type"], "pagamentoComCartao");
        assert_eq!(pedido["pagamento"]["numeroDeParcelas"], 10);
        assert_eq!(pedido["pagamento"]["id"], created["id"]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_invalid_parcelas(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/pedidos")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .json(&json!({
                "pagamento": { "@type": "pagamentoComCartao", "numeroDeParcelas": 0 }
            }))
            .await;

        response.assert_status_unprocessable_entity();
        let body: serde_json::Value = response.json();
        assert_eq!(body["errors"][0]["fieldName"], "numeroDeParcelas");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_unknown_type_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/pedidos")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .json(&json!({ "pagamento": { "@type": "pagamentoComPix" } }))
            .await;

        response.assert_status_unprocessable_entity();
        let body: serde_json::Value = response.json();
        assert_eq!(body["errors"][0]["fieldName"], "pagamento");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_cartao_without_parcelas(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/pedidos")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .json(&json!({ "pagamento": { "@type": "pagamentoComCartao" } }))
            .await;

        // il rifiuto del body passa da AppError: JSON, non testo semplice
        response.assert_status_unprocessable_entity();
        let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("application/json"));
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Erro de validação");
        assert_eq!(
            body["errors"],
            json!([{ "fieldName": "numeroDeParcelas", "message": "Preenchimento obrigatório" }])
        );
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_malformed_body(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/pedidos")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .text("{\"pagamento\": ")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "JSON malformado");
        assert!(body["details"].is_string());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_ignores_client_data_pagamento(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);
        let token = create_test_jwt(CLIENTE_EMAIL);

        let response = server
            .post("/pedidos")
            .add_header(authorization(), bearer(&token))
            .json(&json!({
                "pagamento": { "@type": "pagamentoComBoleto", "dataPagamento": "01/01/2020" }
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created: serde_json::Value = response.json();
        assert!(created["pagamento"]["dataPagamento"].is_null());
        assert_eq!(created["pagamento"]["estadoPagamento"], "PENDENTE");

        // nemmeno il database conserva la data inviata dal client
        let pedido: serde_json::Value = server
            .get(&format!("/pedidos/{}", created["id"]))
            .add_header(authorization(), bearer(&token))
            .await
            .json();
        assert!(pedido["pagamento"]["dataPagamento"].is_null());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes")))]
    async fn test_insert_pedido_requires_authentication(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server
            .post("/pedidos")
            .json(&json!({ "pagamento": { "@type": "pagamentoComBoleto" } }))
            .await
            .assert_status_unauthorized();
        Ok(())
    }

    // ============================================================
    // Test per GET /pedidos e GET /pedidos/{id}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_get_pedido_with_quitado_boleto(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/pedidos/1")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": 1,
            "instante": "30/09/2017 10:32",
            "clienteId": 2,
            "pagamento": {
                "@type": "pagamentoComBoleto",
                "id": 1,
                "estadoPagamento": "QUITADO",
                "dataVencimento": "20/10/2017",
                "dataPagamento": "18/10/2017"
            }
        }));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_unknown_estado_serialized_as_null(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let pedido: serde_json::Value = server
            .get("/pedidos/3")
            .add_header(authorization(), bearer(&create_test_jwt(ADMIN_EMAIL)))
            .await
            .json();

        assert!(pedido["pagamento"]["estadoPagamento"].is_null());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_get_pedido_of_other_cliente_forbidden(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server
            .get("/pedidos/3")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .await
            .assert_status_forbidden();
        server
            .get("/pedidos/1")
            .add_header(authorization(), bearer(&create_test_jwt(ADMIN_EMAIL)))
            .await
            .assert_status_ok();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_get_missing_pedido(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server
            .get("/pedidos/99")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_list_my_pedidos(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/pedidos")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .await;

        response.assert_status_ok();
        let pedidos: Vec<serde_json::Value> = response.json();
        let ids: Vec<i64> = pedidos.iter().map(|p| p["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![2, 1]);
        Ok(())
    }

    // ============================================================
    // Test per GET /pagamentos/{id} - get_pagamento
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_get_pagamento_as_admin(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);
        let token = create_test_jwt(ADMIN_EMAIL);

        let response = server
            .get("/pagamentos/2")
            .add_header(authorization(), bearer(&token))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "@type": "pagamentoComCartao",
            "id": 2,
            "estadoPagamento": "PENDENTE",
            "numeroDeParcelas": 6
        }));

        server
            .get("/pagamentos/99")
            .add_header(authorization(), bearer(&token))
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("clientes", "pedidos")))]
    async fn test_get_pagamento_forbidden_for_cliente(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        server
            .get("/pagamentos/1")
            .add_header(authorization(), bearer(&create_test_jwt(CLIENTE_EMAIL)))
            .await
            .assert_status_forbidden();
        Ok(())
    }
}
