// CBAM Impact Dashboard - Web Server
// Browser front-end: embedded page + JSON view-model API

use axum::{
    extract::Query,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use cbam_dashboard::{Parameters, ViewModel};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

/// Slider values from the query string. Missing values take the slider
/// defaults; out-of-range values are clamped to the slider bounds.
#[derive(Debug, Deserialize)]
struct ModelQuery {
    emissions: Option<f64>,
    output: Option<f64>,
    delta_y: Option<f64>,
}

impl ModelQuery {
    fn into_params(self) -> Parameters {
        Parameters {
            emissions: Parameters::clamp(self.emissions.unwrap_or(Parameters::DEFAULT_EMISSIONS)),
            output: Parameters::clamp(self.output.unwrap_or(Parameters::DEFAULT_OUTPUT)),
            delta_y: Parameters::clamp(self.delta_y.unwrap_or(Parameters::DEFAULT_DELTA_Y)),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/model - Compute the view-model for the given slider values
async fn get_model(Query(query): Query<ModelQuery>) -> impl IntoResponse {
    let view = ViewModel::compute(query.into_params());
    Json(ApiResponse::ok(view))
}

/// GET / - Serve the dashboard page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 CBAM Impact Dashboard - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/model", get(get_model));

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/model");
    println!("   UI:  http://localhost:3000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_when_missing() {
        let query = ModelQuery {
            emissions: None,
            output: None,
            delta_y: None,
        };

        assert_eq!(query.into_params(), Parameters::default());
    }

    #[test]
    fn test_query_clamps_out_of_range() {
        let query = ModelQuery {
            emissions: Some(9999.0),
            output: Some(-3.0),
            delta_y: Some(250.0),
        };

        let params = query.into_params();
        assert_eq!(params.emissions, 500.0);
        assert_eq!(params.output, 0.0);
        assert_eq!(params.delta_y, 250.0);
    }
}
