use poem::error::{MethodNotAllowedError, NotFoundError, ParseJsonError, ParseQueryError};
use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::prelude::*;
use crate::web::models::ErrorResponse;

/// Turns the errors escaping the routes into JSON responses.
pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Err(error) if error.is::<NotFoundError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(respond(StatusCode::NOT_FOUND, "not found"))
            }
            Err(error) if error.is::<MethodNotAllowedError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(respond(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"))
            }
            Err(error) if error.is::<ParseJsonError>() || error.is::<ParseQueryError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(respond(StatusCode::BAD_REQUEST, error))
            }
            Err(error) => {
                error!(?method, ?uri, "{:#}", error);
                Ok(respond(StatusCode::INTERNAL_SERVER_ERROR, "internal server error"))
            }
            result => result,
        }
    }
}

fn respond(status: StatusCode, error: impl ToString) -> Response {
    Json(ErrorResponse::new(error))
        .with_status(status)
        .into_response()
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{get, handler, EndpointExt, Route};

    use super::*;
    use crate::web::test::create_test_client;

    #[handler]
    async fn fail() -> Result<&'static str> {
        Err(anyhow!("simulated error").into())
    }

    #[tokio::test]
    async fn not_found_ok() -> crate::prelude::Result {
        let client = create_test_client();
        let response = client.get("/missing").send().await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(serde_json::json!({"error": "not found"})).await;
        Ok(())
    }

    #[tokio::test]
    async fn internal_server_error_ok() {
        let app = Route::new().at("/fail", get(fail)).with(ErrorMiddleware);
        let response = TestClient::new(app).get("/fail").send().await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response
            .assert_json(serde_json::json!({"error": "internal server error"}))
            .await;
    }
}
