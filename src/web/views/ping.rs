use poem::web::Json;
use poem::{handler, IntoResponse};

use crate::prelude::*;
use crate::web::models::PingResponse;

#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get() -> impl IntoResponse {
    Json(PingResponse::default())
}
