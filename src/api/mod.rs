//! HTTP surface of the contacts service: shared state and the routing table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::handler::with_state;
use crate::method::Method;
use crate::router::Router;
use crate::store::ContactStore;
use crate::templates::Templates;

pub mod assets;
pub mod contacts;
pub mod error;
pub mod health;
pub mod pages;

pub use error::{ApiError, ApiResult};

/// Collaborators shared by every handler.
///
/// Built once at start-up and handed to handlers through
/// [`with_state`](crate::with_state).
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub templates: Templates,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Lays the UI out the standard way: templates in `<ui_dir>/html`,
    /// static files in `<ui_dir>/static`.
    pub fn new(store: Arc<dyn ContactStore>, ui_dir: &Path) -> Self {
        Self {
            store,
            templates: Templates::new(ui_dir.join("html")),
            static_dir: ui_dir.join("static"),
        }
    }
}

/// The routing table.
///
/// | path | method |
/// |---|---|
/// | `/` | any |
/// | `/contact/get?id=` | any |
/// | `/contact/all` | any |
/// | `/contact/create` | POST (guarded in the handler) |
/// | `/contact/edit?id=` | PUT (guarded in the handler) |
/// | `/contact/delete?id=` | DELETE (guarded in the handler) |
/// | `/contact/duplicates` | any |
/// | `/static/{*path}` | GET |
/// | `/healthz`, `/readyz` | GET |
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .any("/", with_state(&state, pages::home))
        .any("/contact/get", with_state(&state, contacts::get))
        .any("/contact/all", with_state(&state, contacts::list))
        .any("/contact/create", with_state(&state, contacts::create))
        .any("/contact/edit", with_state(&state, contacts::edit))
        .any("/contact/delete", with_state(&state, contacts::delete))
        .any("/contact/duplicates", contacts::duplicates)
        .on(Method::Get, "/static/{*path}", with_state(&state, assets::serve))
        .on(Method::Get, "/healthz", health::liveness)
        .on(Method::Get, "/readyz", with_state(&state, health::readiness))
}
