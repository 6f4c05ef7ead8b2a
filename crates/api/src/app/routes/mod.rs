use axum::Router;

pub mod capture;
pub mod items;
pub mod process_image;
pub mod system;

/// Aggregate router for all handler areas.
pub fn router() -> Router {
    Router::new()
        .merge(items::router())
        .merge(capture::router())
        .merge(process_image::router())
}
