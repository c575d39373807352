//! HTTP routing configuration.
//!
//! Each game has its own frame and image routes under `/api/{game}`. The
//! unprefixed routes serve the configured default game.

use actix_web::web;
use crate::server::handlers::{
    get_default_frame, get_default_image, get_frame, get_image, index, post_default_frame,
    post_frame,
};

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
    )
    .service(
        web::resource("/api/frame")
            .route(web::get().to(get_default_frame))
            .route(web::post().to(post_default_frame))
    )
    .service(
        web::resource("/api/image")
            .route(web::get().to(get_default_image))
    )
    .service(
        web::resource("/api/{game}/frame")
            .route(web::get().to(get_frame))
            .route(web::post().to(post_frame))
    )
    .service(
        web::resource("/api/{game}/image")
            .route(web::get().to(get_image))
    );
}
