//! Handler trait, type erasure, and state injection.
//!
//! The router stores handlers of different concrete types in one map, so
//! each one is erased behind `Arc<dyn ErasedHandler>`:
//!
//! ```text
//! async fn list(state: Arc<AppState>, req: Request) -> Response   ← handler
//!        ↓ with_state(&state, list)
//! move |req| list(Arc::clone(&state), req)                        ← Fn(Request)
//!        ↓ Handler blanket impl
//! Arc::new(FnHandler(closure))                                    ← BoxedHandler
//!        ↓ at request time
//! Box::pin(async { closure(req).await.into_response() })          ← BoxFuture
//! ```
//!
//! Per request that is one `Arc` clone for the handler, one for the state,
//! and one virtual call.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// Satisfied automatically by any `Fn(Request) -> impl Future<Output = impl
/// IntoResponse>` that is `Send + Sync + 'static`: plain `async fn` items,
/// and the closures returned by [`with_state`].
///
/// The trait is sealed; only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// Binds a shared state value to a two-argument handler, producing a
/// [`Handler`].
///
/// The state is built once at start-up and handed to every request
/// explicitly; there is no global.
///
/// ```rust
/// use std::sync::Arc;
/// use contacts::{with_state, Request, Response, Router};
///
/// struct Greeting(&'static str);
///
/// async fn hello(state: Arc<Greeting>, _req: Request) -> Response {
///     Response::text(state.0)
/// }
///
/// let state = Arc::new(Greeting("hi"));
/// let app = Router::new().any("/", with_state(&state, hello));
/// ```
pub fn with_state<S, F, Fut, R>(state: &Arc<S>, f: F) -> impl Handler + use<S, F, Fut, R>
where
    S: Send + Sync + 'static,
    F: Fn(Arc<S>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    let state = Arc::clone(state);
    move |req| f(Arc::clone(&state), req)
}
