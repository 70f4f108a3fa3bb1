use poem::http::header::CONTENT_LENGTH;
use poem::{Endpoint, Middleware, Request, Result};
use sentry::Breadcrumb;

/// Names the Sentry transaction after the route and leaves a breadcrumb per request,
/// so that a failed fit is reported along with the request which caused it.
pub struct SentryMiddleware;

impl<E: Endpoint> Middleware<E> for SentryMiddleware {
    type Output = SentryMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SentryMiddlewareImpl { ep }
    }
}

pub struct SentryMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SentryMiddlewareImpl<E> {
    type Output = E::Output;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let route = format!("{} {}", request.method(), request.uri().path());
        let content_length = request
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("0")
            .to_string();

        sentry::configure_scope(|scope| {
            scope.set_transaction(Some(route.as_str()));
            scope.set_tag("request.remote_addr", request.remote_addr());
            scope.set_tag("request.content_length", &content_length);
        });
        sentry::add_breadcrumb(Breadcrumb {
            ty: "http".to_string(),
            category: Some("request".to_string()),
            message: Some(route),
            ..Default::default()
        });

        self.ep.call(request).await
    }
}
