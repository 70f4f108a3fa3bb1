use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::web::middleware::{ApiHeadersMiddleware, ErrorMiddleware, SentryMiddleware};
use crate::web::state::State;

mod middleware;
mod models;
pub mod state;
mod views;

/// Run the web app.
pub async fn run(opts: WebOpts) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "web"));

    let app = create_app(State::default());
    let listener = TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port));
    info!(host = opts.host.as_str(), port = opts.port, "listening…");
    Server::new(listener)
        .run_with_graceful_shutdown(app, shutdown_signal(), Some(opts.shutdown_timeout))
        .await?;
    info!("the server has stopped");
    Ok(())
}

pub fn create_app(state: State) -> impl Endpoint {
    Route::new()
        .at("/ping", get(views::ping::get))
        .at("/analyse", post(views::analyse::post))
        .data(state)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(ApiHeadersMiddleware)
        .with(SentryMiddleware)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down…"),
        Err(error) => error!("failed to listen for the shutdown signal: {:#}", error),
    }
}
