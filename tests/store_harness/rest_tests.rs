//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! a store through full round-trips:
//! JSON → HTTP request → handler → manager → BizStore → HTTP response → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$factory` must produce a fresh `impl BizStore + 'static`.
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use biztime::server::ServerBuilder;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let store = $factory;
                let router = ServerBuilder::new().with_store(store).build().unwrap();
                TestServer::try_new(router).unwrap()
            }

            async fn create_company(server: &TestServer, name: &str, description: &str) -> Value {
                let response = server
                    .post("/companies")
                    .json(&json!({ "name": name, "description": description }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()["company"].clone()
            }

            async fn create_invoice(server: &TestServer, comp_code: &str, amt: f64) -> Value {
                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": comp_code, "amt": amt }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()["invoice"].clone()
            }

            fn assert_error(body: &Value, status: u16) {
                assert_eq!(body["error"]["status"], status);
                assert!(body["message"].is_string());
            }

            // ==============================================================
            // Companies
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_company() {
                let server = make_server().await;

                let company = create_company(&server, "Apple Computer", "Maker of OSX.").await;
                assert_eq!(
                    company,
                    json!({
                        "code": "apple-computer",
                        "name": "Apple Computer",
                        "description": "Maker of OSX."
                    })
                );

                let response = server.get("/companies").await;
                response.assert_status_ok();
                assert_eq!(
                    response.json::<Value>(),
                    json!({ "companies": [{ "code": "apple-computer", "name": "Apple Computer" }] })
                );
            }

            #[tokio::test]
            async fn test_rest_create_company_missing_fields() {
                let server = make_server().await;

                let response = server
                    .post("/companies")
                    .json(&json!({ "name": "IBM" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_error(&response.json::<Value>(), 400);

                let response = server.post("/companies").await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_rest_create_company_duplicate_slug() {
                let server = make_server().await;
                create_company(&server, "Apple Computer", "Maker of OSX.").await;

                let response = server
                    .post("/companies")
                    .json(&json!({ "name": "apple computer", "description": "Copycat." }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body = response.json::<Value>();
                assert_eq!(body["error"]["code"], "CONFLICT");
            }

            #[tokio::test]
            async fn test_rest_get_company_round_trip() {
                let server = make_server().await;
                create_company(&server, "IBM", "Big blue.").await;

                let response = server.get("/companies/ibm").await;
                response.assert_status_ok();
                assert_eq!(
                    response.json::<Value>(),
                    json!({
                        "company": {
                            "code": "ibm",
                            "name": "IBM",
                            "description": "Big blue.",
                            "industries": [],
                            "invoices": []
                        }
                    })
                );
            }

            #[tokio::test]
            async fn test_rest_get_company_nested() {
                let server = make_server().await;
                create_company(&server, "IBM", "Big blue.").await;
                server
                    .post("/industries")
                    .json(&json!({ "code": "tech", "name": "Technology" }))
                    .await
                    .assert_status(StatusCode::CREATED);

                let response = server
                    .post("/companies/ibm/add_industry")
                    .json(&json!({ "industry_code": "tech" }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                assert_eq!(
                    response.json::<Value>(),
                    json!({ "industry": { "comp_code": "ibm", "industry_code": "tech" } })
                );

                let invoice = create_invoice(&server, "ibm", 400.0).await;

                let company = server.get("/companies/ibm").await.json::<Value>()["company"].clone();
                assert_eq!(company["industries"], json!(["Technology"]));
                assert_eq!(company["invoices"], json!([invoice["id"]]));
            }

            #[tokio::test]
            async fn test_rest_get_company_not_found() {
                let server = make_server().await;
                let response = server.get("/companies/nadabing").await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body = response.json::<Value>();
                assert_error(&body, 404);
                assert_eq!(body["message"], "company not found");
            }

            #[tokio::test]
            async fn test_rest_update_company() {
                let server = make_server().await;
                create_company(&server, "IBM", "Big blue.").await;

                let response = server
                    .put("/companies/ibm")
                    .json(&json!({ "name": "new Name", "description": "New Description" }))
                    .await;
                response.assert_status_ok();
                assert_eq!(
                    response.json::<Value>(),
                    json!({
                        "company": {
                            "code": "ibm",
                            "name": "new Name",
                            "description": "New Description"
                        }
                    })
                );

                let response = server
                    .put("/companies/nadabing")
                    .json(&json!({ "name": "x", "description": "y" }))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let response = server
                    .put("/companies/ibm")
                    .json(&json!({ "name": "only a name" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_rest_delete_company_cascades() {
                let server = make_server().await;
                create_company(&server, "IBM", "Big blue.").await;
                let invoice = create_invoice(&server, "ibm", 100.0).await;

                let response = server.delete("/companies/ibm").await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));

                server
                    .get("/companies/ibm")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .get(&format!("/invoices/{}", invoice["id"]))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .delete("/companies/ibm")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_add_industry_errors() {
                let server = make_server().await;
                create_company(&server, "IBM", "Big blue.").await;

                server
                    .post("/companies/ibm/add_industry")
                    .json(&json!({}))
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);

                server
                    .post("/companies/ibm/add_industry")
                    .json(&json!({ "industry_code": "nope" }))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Industries
            // ==============================================================

            #[tokio::test]
            async fn test_rest_industries() {
                let server = make_server().await;
                create_company(&server, "IBM", "Big blue.").await;

                let response = server
                    .post("/industries")
                    .json(&json!({ "code": "tech", "name": "Technology" }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                assert_eq!(
                    response.json::<Value>(),
                    json!({ "industry": { "code": "tech", "name": "Technology" } })
                );

                server
                    .post("/industries")
                    .json(&json!({ "code": "acct", "name": "Accounting" }))
                    .await
                    .assert_status(StatusCode::CREATED);
                server
                    .post("/companies/ibm/add_industry")
                    .json(&json!({ "industry_code": "tech" }))
                    .await
                    .assert_status(StatusCode::CREATED);

                let response = server.get("/industries").await;
                response.assert_status_ok();
                let mut industries = response.json::<Value>()["industries"]
                    .as_array()
                    .cloned()
                    .unwrap();
                industries.sort_by_key(|i| i["code"].as_str().unwrap_or_default().to_string());
                assert_eq!(
                    industries,
                    vec![
                        json!({ "name": "Accounting", "code": "acct", "companies": [] }),
                        json!({ "name": "Technology", "code": "tech", "companies": ["ibm"] }),
                    ]
                );
            }

            #[tokio::test]
            async fn test_rest_create_industry_errors() {
                let server = make_server().await;
                server
                    .post("/industries")
                    .json(&json!({ "code": "tech" }))
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);

                server
                    .post("/industries")
                    .json(&json!({ "code": "tech", "name": "Technology" }))
                    .await
                    .assert_status(StatusCode::CREATED);
                let response = server
                    .post("/industries")
                    .json(&json!({ "code": "tech", "name": "Technology" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["error"]["code"], "CONFLICT");
            }

            // ==============================================================
            // Invoices
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_invoice() {
                let server = make_server().await;
                create_company(&server, "Apple", "Maker of OSX.").await;

                let invoice = create_invoice(&server, "apple", 100.0).await;
                assert!(invoice["id"].is_i64());
                assert_eq!(invoice["comp_code"], "apple");
                assert_eq!(invoice["amt"], 100);
                assert!(invoice["amt"].is_i64());
                assert_eq!(invoice["paid"], false);
                assert!(invoice["add_date"].is_string());
                assert!(invoice["paid_date"].is_null());

                let response = server.get("/invoices").await;
                response.assert_status_ok();
                let invoices = response.json::<Value>()["invoices"].clone();
                assert_eq!(invoices.as_array().map(Vec::len), Some(1));
                assert_eq!(invoices[0]["id"], invoice["id"]);
                assert!(invoices[0].get("add_date").is_none());
            }

            #[tokio::test]
            async fn test_rest_create_invoice_numeric_string_amount() {
                let server = make_server().await;
                create_company(&server, "Apple", "Maker of OSX.").await;

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "apple", "amt": "100" }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                let invoice = response.json::<Value>()["invoice"].clone();
                assert_eq!(invoice["amt"], 100);

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "apple", "amt": "lots" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["error"]["code"], "VALIDATION_ERROR");
            }

            #[tokio::test]
            async fn test_rest_create_invoice_errors() {
                let server = make_server().await;
                create_company(&server, "Apple", "Maker of OSX.").await;

                server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "apple" }))
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);
                server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "apple", "amt": 0 }))
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);
                server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "apple", "amt": -3 }))
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "nope", "amt": 10 }))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(response.json::<Value>()["message"], "company not found");
            }

            #[tokio::test]
            async fn test_rest_get_invoice_nests_company() {
                let server = make_server().await;
                create_company(&server, "Apple", "Maker of OSX.").await;
                let invoice = create_invoice(&server, "apple", 100.0).await;

                let response = server.get(&format!("/invoices/{}", invoice["id"])).await;
                response.assert_status_ok();
                let detail = response.json::<Value>()["invoice"].clone();
                assert_eq!(detail["id"], invoice["id"]);
                assert_eq!(
                    detail["company"],
                    json!({ "code": "apple", "name": "Apple", "description": "Maker of OSX." })
                );
                assert!(detail.get("comp_code").is_none());
            }

            #[tokio::test]
            async fn test_rest_invoice_not_found() {
                let server = make_server().await;

                for path in ["/invoices/999999", "/invoices/abc"] {
                    let response = server.get(path).await;
                    response.assert_status(StatusCode::NOT_FOUND);
                    assert_eq!(response.json::<Value>()["message"], "invoice not found");

                    server
                        .put(path)
                        .json(&json!({ "amt": 5 }))
                        .await
                        .assert_status(StatusCode::NOT_FOUND);
                    server.delete(path).await.assert_status(StatusCode::NOT_FOUND);
                }
            }

            #[tokio::test]
            async fn test_rest_update_invoice() {
                let server = make_server().await;
                create_company(&server, "Apple", "Maker of OSX.").await;
                let invoice = create_invoice(&server, "apple", 100.0).await;
                let path = format!("/invoices/{}", invoice["id"]);

                server
                    .put(&path)
                    .json(&json!({}))
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);

                let response = server.put(&path).json(&json!({ "amt": 250 })).await;
                response.assert_status_ok();
                let updated = response.json::<Value>()["invoice"].clone();
                assert_eq!(updated["amt"].as_f64(), Some(250.0));
                assert_eq!(updated["paid"], false);

                let response = server
                    .put(&path)
                    .json(&json!({ "amt": 250, "paid": true }))
                    .await;
                response.assert_status_ok();
                let paid = response.json::<Value>()["invoice"].clone();
                assert_eq!(paid["paid"], true);
                assert!(paid["paid_date"].is_string());

                let response = server
                    .put(&path)
                    .json(&json!({ "amt": 250, "paid": false }))
                    .await;
                let unpaid = response.json::<Value>()["invoice"].clone();
                assert_eq!(unpaid["paid"], false);
                assert!(unpaid["paid_date"].is_null());
            }

            #[tokio::test]
            async fn test_rest_delete_invoice() {
                let server = make_server().await;
                create_company(&server, "Apple", "Maker of OSX.").await;
                let invoice = create_invoice(&server, "apple", 100.0).await;
                let path = format!("/invoices/{}", invoice["id"]);

                let response = server.delete(&path).await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));

                server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Boundary
            // ==============================================================

            #[tokio::test]
            async fn test_rest_unknown_route() {
                let server = make_server().await;
                let response = server.get("/nowhere").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(response.json::<Value>()["message"], "Not Found");
            }

            #[tokio::test]
            async fn test_rest_method_mismatch() {
                let server = make_server().await;
                create_company(&server, "Apple", "Maker of OSX.").await;

                let response = server.patch("/companies").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(response.json::<Value>()["message"], "Not Found");

                let response = server.get("/companies/apple/add_industry").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(response.json::<Value>()["error"]["code"], "NOT_FOUND");

                let response = server.post("/invoices/1").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(response.json::<Value>()["message"], "Not Found");
            }

            #[tokio::test]
            async fn test_rest_malformed_json() {
                let server = make_server().await;
                let response = server
                    .post("/companies")
                    .content_type("application/json")
                    .text("{\"name\":")
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["error"]["code"], "VALIDATION_ERROR");
            }
        }
    };
}
