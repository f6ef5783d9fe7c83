//! Static file fallback for the SSR host
//!
//! Serves files from the Leptos site root (the compiled WASM bundle and
//! stylesheet); anything else renders the app so the router decides.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    let res = match static_file(uri, &options.site_root).await {
        Ok(res) => res,
        Err((status, message)) => return (status, message).into_response(),
    };

    if res.status() == StatusCode::OK {
        res
    } else {
        let handler = leptos_axum::render_app_to_stream(options.to_owned(), App);
        handler(req).await.into_response()
    }
}

pub(crate) async fn static_file(uri: Uri, root: &str) -> Result<Response, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", err),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_file_from_site_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("robots.txt"), "User-agent: *\n").unwrap();
        let root = dir.path().to_str().unwrap();

        let res = static_file(Uri::from_static("/robots.txt"), root).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"User-agent: *\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_ok() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();

        let res = static_file(Uri::from_static("/pricing"), root).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
