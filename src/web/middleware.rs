pub use self::api_headers::ApiHeadersMiddleware;
pub use self::error::ErrorMiddleware;
pub use self::sentry::SentryMiddleware;

mod api_headers;
mod error;
mod sentry;
