//! Static files for the landing page.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::request::Request;
use crate::response::{ContentType, Response};

/// `GET /static/{*path}`: a file below the static directory.
///
/// Anything that cannot be served (traversal attempts, missing files,
/// directories) is a `404`.
pub async fn serve(state: Arc<AppState>, req: Request) -> ApiResult {
    let relative = req.param("path").unwrap_or_default();
    let path = resolve(&state.static_dir, relative).ok_or(ApiError::NotFound)?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        debug!(path = %path.display(), error = %e, "static file unavailable");
        ApiError::NotFound
    })?;

    let content_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(ContentType::OctetStream, ContentType::from_extension);
    Ok(Response::builder().bytes(content_type, bytes))
}

/// Joins `relative` onto `root`, accepting only plain path segments.
fn resolve(root: &Path, relative: &str) -> Option<PathBuf> {
    if relative.is_empty() || relative.contains('\\') {
        return None;
    }
    let mut path = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => path.push(segment),
            _ => return None,
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{routes, test_support::state_with};
    use crate::store::MemoryStore;
    use rstest::rstest;

    #[rstest]
    #[case("css/main.css", Some("/srv/static/css/main.css"))]
    #[case("../secret", None)]
    #[case("css/../../secret", None)]
    #[case("/etc/passwd", None)]
    #[case("css\\main.css", None)]
    #[case("", None)]
    fn resolve_keeps_paths_inside_root(#[case] relative: &str, #[case] expected: Option<&str>) {
        assert_eq!(resolve(Path::new("/srv/static"), relative), expected.map(PathBuf::from));
    }

    #[tokio::test]
    async fn serves_file_with_content_type() {
        let (state, _ui) = state_with(Arc::new(MemoryStore::new()));
        let res = routes(state)
            .dispatch(Request::new("GET", "/static/css/main.css", Vec::new()))
            .await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("text/css; charset=utf-8"));
        assert_eq!(res.body(), b"body{}");
    }

    #[rstest]
    #[case("/static/css/missing.css")]
    #[case("/static/css")]
    #[tokio::test]
    async fn unavailable_files_are_404(#[case] target: &str) {
        let (state, _ui) = state_with(Arc::new(MemoryStore::new()));
        let res = routes(state).dispatch(Request::new("GET", target, Vec::new())).await;
        assert_eq!(res.status_code(), 404);
    }
}
