//! HTML pages.

use std::sync::Arc;

use super::AppState;
use super::error::ApiResult;
use crate::request::Request;
use crate::response::Response;

/// `/`: the landing page. Any method; a template failure is a `500`.
pub async fn home(state: Arc<AppState>, _req: Request) -> ApiResult {
    let page = state.templates.render_home().await?;
    Ok(Response::html(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{routes, test_support::state_with};
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn renders_layout_with_page_and_footer() {
        let (state, _ui) = state_with(Arc::new(MemoryStore::new()));
        let res = routes(state).dispatch(Request::new("GET", "/", Vec::new())).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("text/html; charset=utf-8"));
        assert_eq!(res.body(), b"<body><h2>Contacts</h2><footer></footer></body>");
    }

    #[tokio::test]
    async fn missing_template_is_500() {
        let (state, ui) = state_with(Arc::new(MemoryStore::new()));
        std::fs::remove_file(ui.path().join("html").join("footer.partial.tmpl"))
            .expect("remove footer");
        let res = routes(state).dispatch(Request::new("POST", "/", Vec::new())).await;
        assert_eq!(res.status_code(), 500);
        assert_eq!(res.header("content-type"), Some("application/json"));
    }
}
