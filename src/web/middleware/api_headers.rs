use poem::http::header::{CACHE_CONTROL, SERVER, X_CONTENT_TYPE_OPTIONS};
use poem::http::HeaderValue;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

/// Headers shared by all the API responses: they are computed per request and never cached.
pub struct ApiHeadersMiddleware;

impl<E: Endpoint> Middleware<E> for ApiHeadersMiddleware {
    type Output = ApiHeadersMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ApiHeadersMiddlewareImpl { ep }
    }
}

pub struct ApiHeadersMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for ApiHeadersMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let mut response = self.ep.call(request).await?.into_response();
        let headers = response.headers_mut();
        headers.remove(SERVER);
        headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn headers_ok() -> Result {
        let client = create_test_client();
        let response = client.get("/ping").send().await;
        response.assert_header("Cache-Control", "no-store");
        response.assert_header("X-Content-Type-Options", "nosniff");
        response.assert_header_is_not_exist("Server");
        Ok(())
    }
}
