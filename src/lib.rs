//! # customer-registry
//!
//! An in-memory registry of customer records served over HTTP/JSON.
//!
//! Five routes list, fetch, create, update and delete customers. The store
//! is a plain ordered vector held for the lifetime of the process and reset
//! to five seed records on every start. Nothing is persisted.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use customer_registry::{CustomerStore, Server, UpdatePolicy, api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), customer_registry::Error> {
//!     let store = Arc::new(CustomerStore::seeded(UpdatePolicy::default()));
//!     Server::bind("0.0.0.0:3000").await?.serve(api::routes(store)).await
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
pub mod customer;
pub mod health;
pub mod logging;
pub mod store;

pub use customer::{Customer, CustomerId, CustomerPatch, NewCustomer};
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::{CustomerStore, UpdatePolicy};
