use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod fit;
mod models;
mod opts;
mod prelude;
mod statistics;
mod tracing;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let result = match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts).await,
        Subcommand::Fit(opts) => fit::run(opts),
    };
    if let Err(error) = &result {
        error!("{:#}", error);
    }
    result
}
