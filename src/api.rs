//! The customer registry routes.
//!
//! | Method | Path | Success | Not found |
//! |---|---|---|---|
//! | GET | `/customers` | 200, array | — |
//! | GET | `/customers/{id}` | 200, record | 404, `null` |
//! | POST | `/customers` | 201, record | — |
//! | PUT | `/customers/{id}` | 200, record | 404, `{"message": …}` |
//! | DELETE | `/customers/{id}` | 200, `{"message": …}` | 404, `{"error": …}` |
//!
//! The differing not-found bodies are kept as existing clients see them.

use std::future::Future;
use std::sync::Arc;

use http::header::{self, HeaderValue};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::customer::{CustomerId, CustomerPatch, NewCustomer};
use crate::handler::Handler;
use crate::health;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::status::Status;
use crate::store::CustomerStore;

pub const CUSTOMERS: &str = "/customers";
pub const CUSTOMER: &str = "/customers/{id}";

const NOT_FOUND: &str = "Cliente não encontrado";
const REMOVED: &str = "Cliente removido com sucesso";

#[derive(Serialize)]
struct Message<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Request payloads the routes could not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadJson(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("rejected request body: {self}");
        Response::builder()
            .status(Status::BadRequest)
            .json(&ErrorBody { error: &self.to_string() })
    }
}

/// Builds the router with every customer route and the health probes, all
/// sharing `store`.
pub fn routes(store: Arc<CustomerStore>) -> Router {
    Router::new()
        .get(CUSTOMERS, with_store(&store, list_customers))
        .post(CUSTOMERS, with_store(&store, create_customer))
        .get(CUSTOMER, with_store(&store, get_customer))
        .put(CUSTOMER, with_store(&store, update_customer))
        .delete(CUSTOMER, with_store(&store, delete_customer))
        .get(health::LIVENESS, health::liveness)
        .get(health::READINESS, with_store(&store, health::readiness))
}

/// Adapts a handler that takes the store into a plain route handler.
fn with_store<F, Fut, R>(store: &Arc<CustomerStore>, f: F) -> impl Handler + use<F, Fut, R>
where
    F: Fn(Arc<CustomerStore>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    let store = Arc::clone(store);
    move |req: Request| f(Arc::clone(&store), req)
}

fn path_id(req: &Request) -> Option<CustomerId> {
    req.param("id").and_then(CustomerId::parse)
}

// GET /customers
async fn list_customers(store: Arc<CustomerStore>, _req: Request) -> Response {
    Response::json(&store.list())
}

// GET /customers/{id}
async fn get_customer(store: Arc<CustomerStore>, req: Request) -> Response {
    match path_id(&req).and_then(|id| store.get(id)) {
        Some(customer) => Response::json(&customer),
        None => Response::builder().status(Status::NotFound).json(&()),
    }
}

// POST /customers
async fn create_customer(store: Arc<CustomerStore>, req: Request) -> Result<Response, ApiError> {
    let new: NewCustomer = req.json()?;
    let customer = store.create(new);

    let mut builder = Response::builder().status(Status::Created);
    if let Ok(location) = HeaderValue::try_from(format!("{CUSTOMERS}/{}", customer.id)) {
        builder = builder.header(header::LOCATION, location);
    }
    Ok(builder.json(&customer))
}

// PUT /customers/{id}
async fn update_customer(store: Arc<CustomerStore>, req: Request) -> Result<Response, ApiError> {
    let patch: CustomerPatch = req.json()?;
    let updated = path_id(&req).and_then(|id| store.update(id, patch));
    Ok(match updated {
        Some(customer) => Json(customer).into_response(),
        None => Response::builder()
            .status(Status::NotFound)
            .json(&Message { message: NOT_FOUND }),
    })
}

// DELETE /customers/{id}
async fn delete_customer(store: Arc<CustomerStore>, req: Request) -> Response {
    if path_id(&req).is_some_and(|id| store.delete(id)) {
        Response::json(&Message { message: REMOVED })
    } else {
        Response::builder()
            .status(Status::NotFound)
            .json(&ErrorBody { error: NOT_FOUND })
    }
}
