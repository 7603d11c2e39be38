//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use pinea_colours::assets::AssetLoader;
use pinea_colours::server::{build_router, create_app_state, AppState};
use pinea_colours::services::ColourService;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub colours: Arc<ColourService>,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        Self::with_loader(AssetLoader::new(None, None, None))
    }

    /// Create a test application with filesystem overrides
    pub fn with_files(
        config_file: Option<PathBuf>,
        names_file: Option<PathBuf>,
        templates_dir: Option<PathBuf>,
    ) -> Self {
        Self::with_loader(AssetLoader::new(config_file, names_file, templates_dir))
    }

    fn with_loader(loader: AssetLoader) -> Self {
        let state = create_app_state(Arc::new(loader)).expect("Failed to create app state");
        let colours = state.colours.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, colours }
    }

    /// Create a test app and return the state for custom router configuration
    pub fn create_state() -> AppState {
        let asset_loader = Arc::new(AssetLoader::new(None, None, None));
        create_app_state(asset_loader).expect("Failed to create app state")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Content-Type header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }
}
