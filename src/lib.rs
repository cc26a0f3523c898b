//! # contacts
//!
//! A small HTTP service for contact records: JSON CRUD endpoints plus one
//! HTML landing page.
//!
//! The crate has two layers:
//!
//! - a minimal HTTP toolkit: [`Router`] over radix trees, [`Request`] /
//!   [`Response`] values, a [`Server`] on hyper with graceful shutdown;
//! - the contact service on top: the [`ContactStore`] port, the handlers in
//!   [`api`], and the [`Templates`] renderer.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use contacts::api::{self, AppState};
//! use contacts::{MemoryStore, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), contacts::Error> {
//!     let state = Arc::new(AppState::new(Arc::new(MemoryStore::new()), Path::new("./ui")));
//!     Server::bind("127.0.0.1:4000").await?.serve(api::routes(state)).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod contact;
pub mod store;
pub mod telemetry;
pub mod templates;

pub use contact::{Contact, ContactId, NewContact};
pub use error::Error;
pub use handler::{Handler, with_state};
pub use method::{Method, UnknownMethod};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{DEFAULT_BODY_LIMIT, Server};
pub use status::Status;
pub use store::{ContactStore, MemoryStore, StoreError};
pub use templates::{TemplateError, Templates};
