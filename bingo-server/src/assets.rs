//! Static frontend assets.
//!
//! When an assets directory is configured, every path the API doesn't claim
//! is looked up there. Directories resolve to their `index.html`.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::service::AppState;

const INDEX_FILE: &str = "index.html";

/// Fallback handler serving files from the assets directory.
pub(crate) async fn serve_asset(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    let Some(root) = state.config.assets_dir.as_deref() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(mut path) = resolve(root, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if tokio::fs::metadata(&path).await.map_or(false, |m| m.is_dir()) {
        path.push(INDEX_FILE);
    }

    match tokio::fs::read(&path).await {
        Ok(body) => ([(header::CONTENT_TYPE, content_type(&path))], body).into_response(),
        Err(e) => {
            debug!("asset {} not served: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Map a request path onto the assets root, refusing anything that would
/// climb out of it.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(path)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let root = Path::new("/srv/assets");
        assert_eq!(resolve(root, "/"), Some(PathBuf::from("/srv/assets")));
        assert_eq!(
            resolve(root, "/js/app.js"),
            Some(PathBuf::from("/srv/assets/js/app.js"))
        );
        assert_eq!(resolve(root, "/../etc/passwd"), None);
        assert_eq!(resolve(root, "/a/../../b"), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("list.js")), "text/javascript; charset=utf-8");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}
