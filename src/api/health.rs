//! Liveness and readiness probes.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can the contact store serve requests? |

use std::sync::Arc;

use tracing::warn;

use super::AppState;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// Always `200 OK` with body `"ok"`. No dependencies.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` while the store answers pings, `503`
/// otherwise.
pub async fn readiness(state: Arc<AppState>, _req: Request) -> Response {
    match state.store.ping().await {
        Ok(()) => Response::text("ready"),
        Err(e) => {
            warn!(error = %e, "readiness check failed");
            Response::status(Status::ServiceUnavailable)
        }
    }
}
