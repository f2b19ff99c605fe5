//! Command-line configuration.

use clap::Parser;

use crate::store::UpdatePolicy;

#[derive(Clone, Debug, Parser)]
#[command(name = "customer-registry")]
#[command(about = "In-memory customer registry over HTTP/JSON")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "CUSTOMERS_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: String,

    /// How PUT treats empty-string fields.
    #[arg(long, value_enum, default_value_t = UpdatePolicy::SkipEmpty)]
    pub update_policy: UpdatePolicy,

    /// Enable debug logging for this crate (overridden by RUST_LOG).
    #[arg(long)]
    pub verbose: bool,
}
