use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Result};

/// Serve the compiled-in static assets.
///
/// Assets are immutable for the life of the binary, so they carry the same
/// cache header as rendered images.
pub async fn get(Path(file): Path<String>) -> Result<impl IntoResponse> {
    let (content_type, body) = match file.as_str() {
        "style.css" => ("text/css", include_str!("static/style.css")),
        "app.js" => ("text/javascript", include_str!("static/app.js")),
        _ => return Err(StatusCode::NOT_FOUND.into()),
    };
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "max-age=3600"),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_assets_resolve() {
        for file in ["style.css", "app.js"] {
            assert!(get(Path(file.to_string())).await.is_ok(), "asset {}", file);
        }
    }

    #[tokio::test]
    async fn test_unknown_asset_404() {
        assert!(get(Path("missing.css".to_string())).await.is_err());
    }
}
