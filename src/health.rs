//! Liveness and readiness probes.
//!
//! | Probe | Path | Body |
//! |---|---|---|
//! | **Liveness** | `/healthz` | `ok` |
//! | **Readiness** | `/readyz` | `{"status":"ready","customers":N}` |

use std::sync::Arc;

use serde::Serialize;

use crate::store::CustomerStore;
use crate::{Request, Response};

pub const LIVENESS: &str = "/healthz";
pub const READINESS: &str = "/readyz";

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    customers: usize,
}

/// Always `200 ok`: if the process can answer HTTP at all, it is alive.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200` with the current record count. The store lives in memory, so the
/// service is ready as soon as it is listening.
pub async fn readiness(store: Arc<CustomerStore>, _req: Request) -> Response {
    Response::json(&Readiness { status: "ready", customers: store.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::status::Status;
    use crate::store::UpdatePolicy;

    #[tokio::test]
    async fn probes_answer_200() {
        let store = Arc::new(CustomerStore::seeded(UpdatePolicy::default()));
        let router = api::routes(Arc::clone(&store));

        let res = router.handle(Request::test(http::Method::GET, LIVENESS, "")).await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body(), b"ok");

        let res = router.handle(Request::test(http::Method::GET, READINESS, "")).await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body(), br#"{"status":"ready","customers":5}"#);
    }
}
