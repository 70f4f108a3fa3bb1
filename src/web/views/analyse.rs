use poem::http::StatusCode;
use poem::web::{Data, Json};
use poem::{handler, IntoResponse, Response};

use crate::models::Samples;
use crate::prelude::*;
use crate::web::models::ErrorResponse;
use crate::web::state::State;

/// Fits the line to the posted samples.
///
/// Decoding and computation failures alike end up as `400 {"error": …}`.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post(samples: poem::Result<Json<Samples>>, Data(state): Data<&State>) -> Response {
    let Json(samples) = match samples {
        Ok(samples) => samples,
        Err(error) => {
            info!("failed to decode the samples: {:#}", error);
            return bad_request(error);
        }
    };
    debug!(n_x = samples.x.len(), n_y = samples.y.len());

    match state.regressor.fit(&samples.x, &samples.y) {
        Ok(regression) => {
            debug!(regression.a, regression.b);
            Json(regression).into_response()
        }
        Err(error) => {
            info!("rejected the samples: {:#}", error);
            bad_request(error)
        }
    }
}

fn bad_request(error: impl ToString) -> Response {
    Json(ErrorResponse::new(error))
        .with_status(StatusCode::BAD_REQUEST)
        .into_response()
}
