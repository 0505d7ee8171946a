pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::matching::handlers::handle_compare;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze", post(handle_analyze))
        .route("/api/compare", post(handle_compare))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, Response},
    };
    use serde_json::Value;

    use crate::config::Config;
    use crate::matching::fit_scoring::KeywordFitScorer;
    use crate::state::AppState;

    pub const BOUNDARY: &str = "ats-test-boundary";

    pub fn test_state() -> AppState {
        AppState {
            config: Config::default(),
            fit_scorer: Arc::new(KeywordFitScorer),
        }
    }

    /// A part of a hand-built multipart body: `(name, Some(filename), content)`.
    pub type Part<'a> = (&'a str, Option<&'a str>, &'a str);

    pub fn multipart_request(uri: &str, parts: &[Part]) -> Request<Body> {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    pub async fn json_body(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
