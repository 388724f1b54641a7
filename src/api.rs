//! The HTTP front end.
//!
//! A small axum server that wraps the counting engine in a conventional
//! request/response envelope. The engine holds no shared state, so the
//! handlers carry none either -- every request is an independent computation.
//!
//! # Endpoints
//!
//! - `GET /` - welcome payload with pointers to the other routes
//! - `GET /api/itemcounter` - API info and the supported data types
//! - `POST /api/itemcounter/count` - count occurrences of items in a list
//! - `GET /api/itemcounter/datatypes` - the fixed supported data type list
//! - `GET /api/itemcounter/health` - static health status with a timestamp

use axum::{
    http::{Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::counting::{self, FrequencyTable, SUPPORTED_KINDS};

/// The request body for the count endpoint. `data_type` is matched
/// case-insensitively against the supported kind names.
#[derive(Debug, Deserialize)]
pub struct CountRequest {
    pub items: Vec<String>,
    pub data_type: String,
}

/// The outcome of one counting call, echoing the requested data type and the
/// number of input items alongside the frequency table.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub message: String,
    pub counts: FrequencyTable,
    pub data_type: String,
    pub total_items: usize,
}

/// The envelope every endpoint responds with.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    fn success(message: &str, data: T) -> ApiResponse<T> {
        ApiResponse {
            success: true,
            message: message.to_string(),
            data: Some(data),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    fn failure(message: String, data: Option<T>) -> ApiResponse<T> {
        ApiResponse {
            success: false,
            message,
            data,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Creates the application router with all endpoints and the CORS layer.
pub fn router() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/itemcounter", get(info))
        .route("/api/itemcounter/count", post(count_items))
        .route("/api/itemcounter/datatypes", get(datatypes))
        .route("/api/itemcounter/health", get(health))
        .layer(cors_layer())
}

/// Starts the server on `127.0.0.1:port` and blocks until it shuts down.
pub fn serve(port: u16) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let addr = format!("127.0.0.1:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("item counter API listening on http://{}", addr);
        axum::serve(listener, router()).await?;
        Ok(())
    })
}

// the API is meant to be callable from anywhere, so the policy is wide open
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Item Counter API",
        "info": "/api/itemcounter",
        "health": "/api/itemcounter/health",
    }))
}

async fn info() -> Json<ApiResponse<serde_json::Value>> {
    let info = json!({
        "name": "Item Counter API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API for counting occurrences of items across multiple data types",
        "supported_data_types": SUPPORTED_KINDS,
        "examples": {
            "text": { "items": ["apple", "banana", "apple"], "data_type": "text" },
            "integer": { "items": ["1", "2", "1", "3"], "data_type": "integer" },
            "boolean": { "items": ["true", "false", "yes", "no"], "data_type": "boolean" },
        },
    });
    Json(ApiResponse::success(
        "Item Counter API is running successfully.",
        info,
    ))
}

async fn count_items(
    Json(request): Json<CountRequest>,
) -> (StatusCode, Json<ApiResponse<CountResponse>>) {
    let total_items = request.items.len();
    match counting::count_by_name(&request.items, &request.data_type) {
        Ok(counts) => {
            tracing::debug!(data_type = %request.data_type, total_items, "counted items");
            let result = CountResponse {
                success: true,
                message: "Items counted successfully.".to_string(),
                counts,
                data_type: request.data_type,
                total_items,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success("Items counted successfully.", result)),
            )
        }
        Err(err) => {
            tracing::debug!(data_type = %request.data_type, error = %err, "rejected count request");
            let message = err.to_string();
            let result = CountResponse {
                success: false,
                message: message.clone(),
                counts: FrequencyTable::new(),
                data_type: request.data_type,
                total_items,
            };
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(message, Some(result))),
            )
        }
    }
}

async fn datatypes() -> Json<ApiResponse<Vec<String>>> {
    let kinds: Vec<String> = SUPPORTED_KINDS.iter().map(|kind| kind.to_string()).collect();
    Json(ApiResponse::success(
        "Supported data types retrieved successfully.",
        kinds,
    ))
}

async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        "API is healthy and running.",
        json!({ "status": "Healthy" }),
    ))
}
