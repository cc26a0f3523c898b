//! Contact endpoints.
//!
//! ```text
//! GET|any  /contact/get?id=1
//! GET|any  /contact/all
//! POST     /contact/create      {"firstName":"Ann",...}
//! PUT      /contact/edit?id=1   {"firstName":"Ann",...}
//! DELETE   /contact/delete?id=1
//! ```
//!
//! A malformed or missing `id` is a `404` on get and delete but a `500` on
//! edit. The mismatch is part of the published contract and is kept as is.

use std::sync::Arc;

use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::contact::{ContactId, NewContact};
use crate::method::Method;
use crate::request::Request;
use crate::response::{ContentType, Response};

const ID: &str = "id";

/// `GET /contact/get?id=<int>`: one contact as JSON.
pub async fn get(state: Arc<AppState>, req: Request) -> ApiResult {
    let id = parse_id(&req).ok_or(ApiError::NotFound)?;
    let contact = state.store.get(id).await?;
    json_line(&contact)
}

/// `GET /contact/all`: every contact as a JSON array, `[]` when empty.
pub async fn list(state: Arc<AppState>, _req: Request) -> ApiResult {
    let contacts = state.store.find_all().await?;
    json_line(&contacts)
}

/// `POST /contact/create`: stores a contact and redirects to it.
pub async fn create(state: Arc<AppState>, req: Request) -> ApiResult {
    require_method(&req, Method::Post)?;
    let fields = NewContact::from_json(req.body())?;
    let id = state.store.insert(fields).await?;
    Ok(guarded_redirect(&contact_location(id)))
}

/// `PUT /contact/edit?id=<int>`: replaces a contact and redirects to it.
pub async fn edit(state: Arc<AppState>, req: Request) -> ApiResult {
    require_method(&req, Method::Put)?;
    let id = parse_id(&req)
        .ok_or_else(|| ApiError::InvalidId(req.query(ID).map(str::to_owned)))?;
    let fields = NewContact::from_json(req.body())?;
    let id = state.store.update(id, fields).await?;
    Ok(guarded_redirect(&contact_location(id)))
}

/// `DELETE /contact/delete?id=<int>`: removes a contact and redirects to the
/// list.
pub async fn delete(state: Arc<AppState>, req: Request) -> ApiResult {
    require_method(&req, Method::Delete)?;
    let id = parse_id(&req).ok_or(ApiError::NotFound)?;
    state.store.delete(id).await?;
    Ok(guarded_redirect("/contact/all"))
}

/// `/contact/duplicates`: placeholder, always the same text.
pub async fn duplicates(_req: Request) -> &'static str {
    "List of duplicated contacts"
}

/// Method guard for the write endpoints.
///
/// Runs before the body is looked at. A mismatch becomes `405` with an
/// `Allow` header naming `expected`.
fn require_method(req: &Request, expected: Method) -> Result<(), ApiError> {
    if req.method() == expected.as_str() {
        Ok(())
    } else {
        Err(ApiError::MethodNotAllowed {
            expected,
            actual: req.method().to_owned(),
        })
    }
}

/// Redirect issued by a guarded endpoint. The guard marks every response of
/// those endpoints as JSON, redirects included.
fn guarded_redirect(location: &str) -> Response {
    Response::redirect(location).with_default_header("content-type", ContentType::Json.as_str())
}

fn contact_location(id: ContactId) -> String {
    format!("/contact/get?id={id}")
}

fn parse_id(req: &Request) -> Option<ContactId> {
    req.query(ID)?.parse().ok()
}

/// Serialises `value` as JSON followed by a newline.
fn json_line<T: Serialize>(value: &T) -> ApiResult {
    let mut body = serde_json::to_vec(value)?;
    body.push(b'\n');
    Ok(Response::json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{routes, test_support::state_with};
    use crate::contact::Contact;
    use crate::store::{ContactStore, MemoryStore, StoreError};
    use async_trait::async_trait;
    use rstest::rstest;

    const ANN: &str = r#"{"firstName":"Ann","lastName":"Lee","middleName":"","phone":"555","email":"a@b.c","address":"X"}"#;

    fn send(method: &str, target: &str, body: &str) -> Request {
        Request::new(method, target, body.as_bytes().to_vec())
    }

    fn body_str(res: &Response) -> &str {
        std::str::from_utf8(res.body()).expect("utf8 body")
    }

    /// Store whose every call fails with a backend error.
    struct BrokenStore;

    #[async_trait]
    impl ContactStore for BrokenStore {
        async fn get(&self, _: ContactId) -> Result<Contact, StoreError> {
            Err(StoreError::Other("connection refused".into()))
        }
        async fn find_all(&self) -> Result<Vec<Contact>, StoreError> {
            Err(StoreError::Other("connection refused".into()))
        }
        async fn insert(&self, _: NewContact) -> Result<ContactId, StoreError> {
            Err(StoreError::Other("connection refused".into()))
        }
        async fn update(&self, _: ContactId, _: NewContact) -> Result<ContactId, StoreError> {
            Err(StoreError::Other("connection refused".into()))
        }
        async fn delete(&self, _: ContactId) -> Result<ContactId, StoreError> {
            Err(StoreError::Other("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));

        let res = app.dispatch(send("POST", "/contact/create", ANN)).await;
        assert_eq!(res.status_code(), 303);
        assert_eq!(res.header("location"), Some("/contact/get?id=1"));
        assert_eq!(res.header("content-type"), Some("application/json"));

        let res = app.dispatch(send("GET", "/contact/get?id=1", "")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("application/json"));
        assert!(body_str(&res).ends_with('\n'));
        let stored: Contact = serde_json::from_slice(res.body()).expect("contact json");
        assert_eq!(stored.id, 1);
        assert_eq!(stored.first_name, "Ann");
        assert_eq!(stored.last_name, "Lee");
        assert_eq!(stored.middle_name, "");
        assert_eq!(stored.phone, "555");
        assert_eq!(stored.email, "a@b.c");
        assert_eq!(stored.address, "X");
    }

    #[tokio::test]
    async fn list_of_empty_store_is_empty_array() {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        let res = app.dispatch(send("GET", "/contact/all", "")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("application/json"));
        assert_eq!(body_str(&res), "[]\n");
    }

    #[tokio::test]
    async fn list_returns_contacts_in_id_order() {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        for name in ["A", "B"] {
            let body = format!(r#"{{"firstName":"{name}"}}"#);
            app.dispatch(send("POST", "/contact/create", &body)).await;
        }
        let res = app.dispatch(send("GET", "/contact/all", "")).await;
        let all: Vec<Contact> = serde_json::from_slice(res.body()).expect("list json");
        let ids: Vec<_> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[rstest]
    #[case::missing("/contact/get")]
    #[case::empty("/contact/get?id=")]
    #[case::not_numeric("/contact/get?id=abc")]
    #[case::absent("/contact/get?id=42")]
    #[tokio::test]
    async fn get_answers_404(#[case] target: &str) {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        let res = app.dispatch(send("GET", target, "")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[rstest]
    #[case("GET", "POST")]
    #[case("PUT", "POST")]
    #[case("BREW", "POST")]
    #[tokio::test]
    async fn create_rejects_other_methods(#[case] method: &str, #[case] allow: &str) {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        let res = app.dispatch(send(method, "/contact/create", ANN)).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some(allow));
        assert_eq!(res.header("content-type"), Some("application/json"));
    }

    #[rstest]
    #[case::unknown_field(r#"{"firstName":"A","nickname":"x"}"#)]
    #[case::malformed(r#"{"firstName":"#)]
    #[case::wrong_type(r#"{"firstName":1}"#)]
    #[case::empty("")]
    #[tokio::test]
    async fn create_rejects_bad_bodies(#[case] body: &str) {
        let store = Arc::new(MemoryStore::new());
        let (app, _ui) = routes_with(store.clone());
        let res = app.dispatch(send("POST", "/contact/create", body)).await;
        assert_eq!(res.status_code(), 400);
        assert!(store.find_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[case::null_value(r#"{"firstName":"Ann","phone":null}"#, "Ann")]
    #[case::null_body("null", "")]
    #[case::repeated_key(r#"{"firstName":"X","firstName":"Ann"}"#, "Ann")]
    #[case::mixed_case_name(r#"{"FIRSTNAME":"Ann"}"#, "Ann")]
    #[tokio::test]
    async fn create_accepts_lenient_bodies(#[case] body: &str, #[case] first_name: &str) {
        let store = Arc::new(MemoryStore::new());
        let (app, _ui) = routes_with(store.clone());
        let res = app.dispatch(send("POST", "/contact/create", body)).await;
        assert_eq!(res.status_code(), 303);
        assert_eq!(res.header("location"), Some("/contact/get?id=1"));
        let stored = store.get(1).await.expect("get");
        assert_eq!(stored.first_name, first_name);
        assert_eq!(stored.phone, "");
    }

    #[rstest]
    #[case::create_bad_body("GET", "/contact/create", r#"{"nickname":1}"#, "POST")]
    #[case::create_no_body("DELETE", "/contact/create", "", "POST")]
    #[case::edit_bad_id_and_body("POST", "/contact/edit?id=x", "not json", "PUT")]
    #[case::edit_missing_id("GET", "/contact/edit", "", "PUT")]
    #[case::delete_bad_id("PUT", "/contact/delete?id=x", "not json", "DELETE")]
    #[tokio::test]
    async fn method_guard_runs_before_id_and_body(
        #[case] method: &str,
        #[case] target: &str,
        #[case] body: &str,
        #[case] allow: &str,
    ) {
        let store = Arc::new(MemoryStore::new());
        let (app, _ui) = routes_with(store.clone());
        let res = app.dispatch(send(method, target, body)).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some(allow));
        assert_eq!(res.header("content-type"), Some("application/json"));
        assert!(store.find_all().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn edit_replaces_contact_and_redirects() {
        let store = Arc::new(MemoryStore::new());
        let (app, _ui) = routes_with(store.clone());
        app.dispatch(send("POST", "/contact/create", ANN)).await;

        let res = app
            .dispatch(send("PUT", "/contact/edit?id=1", r#"{"firstName":"Bo"}"#))
            .await;
        assert_eq!(res.status_code(), 303);
        assert_eq!(res.header("location"), Some("/contact/get?id=1"));

        let stored = store.get(1).await.expect("get");
        assert_eq!(stored.first_name, "Bo");
        assert_eq!(stored.phone, "");
    }

    #[tokio::test]
    async fn edit_with_post_is_405_and_leaves_store_alone() {
        let store = Arc::new(MemoryStore::new());
        let (app, _ui) = routes_with(store.clone());
        app.dispatch(send("POST", "/contact/create", ANN)).await;

        let res = app
            .dispatch(send("POST", "/contact/edit?id=1", r#"{"firstName":"Bo"}"#))
            .await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("PUT"));
        assert_eq!(store.get(1).await.expect("get").first_name, "Ann");
    }

    #[rstest]
    #[case::missing("/contact/edit", 500)]
    #[case::not_numeric("/contact/edit?id=abc", 500)]
    #[case::absent("/contact/edit?id=42", 404)]
    #[tokio::test]
    async fn edit_id_failures(#[case] target: &str, #[case] expected: u16) {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        let res = app.dispatch(send("PUT", target, ANN)).await;
        assert_eq!(res.status_code(), expected);
    }

    #[tokio::test]
    async fn edit_checks_id_before_body() {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        let res = app.dispatch(send("PUT", "/contact/edit?id=x", "not json")).await;
        assert_eq!(res.status_code(), 500);
    }

    #[tokio::test]
    async fn edit_with_bad_body_is_400() {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        app.dispatch(send("POST", "/contact/create", ANN)).await;
        let res = app
            .dispatch(send("PUT", "/contact/edit?id=1", r#"{"nickname":"x"}"#))
            .await;
        assert_eq!(res.status_code(), 400);
    }

    #[tokio::test]
    async fn delete_redirects_then_repeats_as_404() {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        app.dispatch(send("POST", "/contact/create", ANN)).await;

        let res = app.dispatch(send("DELETE", "/contact/delete?id=1", "")).await;
        assert_eq!(res.status_code(), 303);
        assert_eq!(res.header("location"), Some("/contact/all"));

        for _ in 0..2 {
            let res = app.dispatch(send("DELETE", "/contact/delete?id=1", "")).await;
            assert_eq!(res.status_code(), 404);
        }
        let res = app.dispatch(send("GET", "/contact/get?id=1", "")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[rstest]
    #[case::missing("/contact/delete")]
    #[case::not_numeric("/contact/delete?id=1.5")]
    #[tokio::test]
    async fn delete_with_bad_id_is_404(#[case] target: &str) {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        let res = app.dispatch(send("DELETE", target, "")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn delete_with_get_is_405() {
        let (app, _ui) = routes_with(Arc::new(MemoryStore::new()));
        let res = app.dispatch(send("GET", "/contact/delete?id=1", "")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("DELETE"));
    }

    #[rstest]
    #[case("GET", "/contact/get?id=1")]
    #[case("GET", "/contact/all")]
    #[case("POST", "/contact/create")]
    #[case("PUT", "/contact/edit?id=1")]
    #[case("DELETE", "/contact/delete?id=1")]
    #[tokio::test]
    async fn store_failures_are_500_without_detail(#[case] method: &str, #[case] target: &str) {
        let (app, _ui) = routes_with(Arc::new(BrokenStore));
        let res = app.dispatch(send(method, target, ANN)).await;
        assert_eq!(res.status_code(), 500);
        assert!(!body_str(&res).contains("connection refused"));
    }

    #[tokio::test]
    async fn duplicates_is_fixed_text() {
        let (app, _ui) = routes_with(Arc::new(BrokenStore));
        let res = app.dispatch(send("POST", "/contact/duplicates", "")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(body_str(&res), "List of duplicated contacts");
    }

    fn routes_with(store: Arc<dyn ContactStore>) -> (crate::Router, tempfile::TempDir) {
        let (state, ui) = state_with(store);
        (routes(state), ui)
    }
}
