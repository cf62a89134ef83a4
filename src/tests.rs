#[cfg(test)]
mod integration_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use forecast::ForecastRequest;
    use serde_json::json;

    use crate::schemas::{ApiResponse, ErrorResponse};
    use crate::test_utils::test_utils::{setup_failing_test_app, setup_test_app};

    #[tokio::test]
    async fn test_health_check() {
        let (app, _forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_home_page_renders_empty_forecast_section() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let body = response.text();
        assert!(body.contains("<form action=\"/forecast_web\""));
        assert!(body.contains("No forecast yet"));
        assert!(!body.contains("Predicted sales"));
        assert_eq!(forecaster.call_count(), 0);
    }

    #[tokio::test]
    async fn test_forecast_web_valid_submission() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast_web")
            .form(&json!({
                "store_number": "42",
                "forecast_start_date": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::OK);

        // The forecaster saw exactly the canonical request
        assert_eq!(
            forecaster.calls(),
            vec![ForecastRequest {
                store_number: 42,
                forecast_start_date: "2024-01-01".to_string(),
            }]
        );

        // The rendered page contains the returned result
        let body = response.text();
        assert!(body.contains("Forecast for store 42"));
        assert!(body.contains("2024-01-01"));
        assert!(body.contains("5200"));
    }

    #[tokio::test]
    async fn test_forecast_web_non_numeric_store_number() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast_web")
            .form(&json!({
                "store_number": "abc",
                "forecast_start_date": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(forecaster.call_count(), 0);

        let body = response.text();
        assert!(body.contains("invalid input"));
    }

    #[tokio::test]
    async fn test_forecast_web_missing_store_number() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast_web")
            .form(&json!({
                "forecast_start_date": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(forecaster.call_count(), 0);
    }

    #[tokio::test]
    async fn test_forecast_web_capability_failure_renders_error() {
        let (app, forecaster) = setup_failing_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast_web")
            .form(&json!({
                "store_number": "42",
                "forecast_start_date": "not-a-date",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(forecaster.call_count(), 1);

        let body = response.text();
        assert!(body.contains("forecast failed"));
    }

    #[tokio::test]
    async fn test_forecast_api_valid_payload() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast")
            .json(&json!({
                "store_number": "42",
                "forecast_start_date": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::OK);

        assert_eq!(
            forecaster.calls(),
            vec![ForecastRequest {
                store_number: 42,
                forecast_start_date: "2024-01-01".to_string(),
            }]
        );

        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Forecast computed successfully");
        assert_eq!(body.data["store_number"].as_i64(), Some(42));
        assert_eq!(body.data["start_date"], "2024-01-01");
        assert_eq!(body.data["points"][0]["predicted_sales"], "5200");
    }

    #[tokio::test]
    async fn test_forecast_api_non_numeric_store_number() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast")
            .json(&json!({
                "store_number": "abc",
                "forecast_start_date": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(forecaster.call_count(), 0);

        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "INPUT_ERROR");
    }

    #[tokio::test]
    async fn test_forecast_api_missing_store_number() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast")
            .json(&json!({
                "forecast_start_date": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(forecaster.call_count(), 0);

        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INPUT_ERROR");
    }

    #[tokio::test]
    async fn test_forecast_api_missing_date_passed_through_empty() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast")
            .json(&json!({
                "store_number": "42",
            }))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            forecaster.calls(),
            vec![ForecastRequest {
                store_number: 42,
                forecast_start_date: String::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_forecast_api_capability_failure() {
        let (app, forecaster) = setup_failing_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/forecast")
            .json(&json!({
                "store_number": "42",
                "forecast_start_date": "not-a-date",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(forecaster.call_count(), 1);

        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "FORECAST_ERROR");
    }

    #[tokio::test]
    async fn test_forecast_api_caches_repeated_requests() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let payload = json!({
            "store_number": "42",
            "forecast_start_date": "2024-01-01",
        });

        let first = server.post("/forecast").json(&payload).await;
        first.assert_status(StatusCode::OK);

        let second = server.post("/forecast").json(&payload).await;
        second.assert_status(StatusCode::OK);

        // Second request is served from the cache
        assert_eq!(forecaster.call_count(), 1);
        let body: ApiResponse<serde_json::Value> = second.json();
        assert_eq!(body.message, "Forecast retrieved from cache");
    }

    #[tokio::test]
    async fn test_entry_paths_build_identical_requests() {
        let (app, forecaster) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let form_response = server
            .post("/forecast_web")
            .form(&json!({
                "store_number": " 17 ",
                "forecast_start_date": "2024-06-01",
            }))
            .await;
        form_response.assert_status(StatusCode::OK);

        let api_response = server
            .post("/forecast")
            .json(&json!({
                "store_number": "17",
                "forecast_start_date": "2024-06-01",
            }))
            .await;
        api_response.assert_status(StatusCode::OK);

        let calls = forecaster.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0].store_number, 17);
    }
}
