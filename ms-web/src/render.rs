use axum::{
    extract::{Path, Query},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    response::IntoResponse,
};

use ms_core::image::{Colormap, Renderer};

use crate::SurfaceQuery;

/// Render the requested surface's Z grid as a PNG heightmap.
pub async fn render(
    Path(surface): Path<String>,
    Query(query): Query<SurfaceQuery>,
) -> axum::response::Result<impl IntoResponse> {
    let colormap = Colormap::from_name(&query.colormap)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let generated = crate::surface::generate(&surface, &query).await?;
    let image = Renderer { colormap }
        .render(&generated.z)
        .map_err(|err| {
            tracing::error!("rendering error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let mut buffer = std::io::Cursor::new(Vec::<u8>::new());
    image
        .write_to(&mut buffer, image::ImageOutputFormat::Png)
        .map_err(|err| {
            tracing::error!("image serialization error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, "image/png")],
        [(CACHE_CONTROL, "max-age=3600")],
        buffer.into_inner(),
    ))
}
