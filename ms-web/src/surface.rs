use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::ErrorResponse,
    Json,
};
use serde::Serialize;

use crate::SurfaceQuery;

/// JSON shape of a generated surface: a title plus row-major nested arrays.
#[derive(Serialize)]
pub(crate) struct SurfaceResponse {
    title: String,
    x: Vec<Vec<f64>>,
    y: Vec<Vec<f64>>,
    z: Vec<Vec<f64>>,
}

/// Generate the requested surface and serialize its coordinate grids.
pub async fn surface(
    Path(surface): Path<String>,
    Query(query): Query<SurfaceQuery>,
) -> axum::response::Result<Json<SurfaceResponse>> {
    let generated = generate(&surface, &query).await?;
    Ok(Json(SurfaceResponse {
        title: generated.title,
        x: generated.x.to_rows(),
        y: generated.y.to_rows(),
        z: generated.z.to_rows(),
    }))
}

/// Run the (blocking, possibly multi-threaded) generation off the async
/// runtime, mapping engine errors onto response statuses.
pub(crate) async fn generate(
    surface_type: &str,
    query: &SurfaceQuery,
) -> Result<ms_generate::Surface, ErrorResponse> {
    let request = query.to_request(surface_type).map_err(error_response)?;
    tokio::task::spawn_blocking(move || ms_generate::generate(&request))
        .await
        .map_err(|err| {
            tracing::error!("generation task failed: {}", err);
            ErrorResponse::from(StatusCode::INTERNAL_SERVER_ERROR)
        })?
        .map_err(error_response)
}

fn error_response(err: ms_generate::Error) -> ErrorResponse {
    tracing::error!("request error: {}", err);
    match err {
        ms_generate::Error::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg).into(),
        ms_generate::Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into(),
    }
}
