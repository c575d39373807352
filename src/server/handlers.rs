//! HTTP handlers for the frame, image and landing routes.
//!
//! Every handler is stateless: the game state comes in with the request and
//! goes out with the response. Handlers only pick the game variant and hand
//! over to the generic helpers below.

use actix_web::{HttpResponse, http::StatusCode, http::header, web};
use log::{debug, error, info};
use serde::Deserialize;

use crate::config::server::ServerConfig;
use crate::game::rps::RockPaperScissors;
use crate::game::tictactoe::TicTacToe;
use crate::game::{FrameGame, GameKind};
use crate::server::codec::restore_state;
use crate::server::error::FrameError;
use crate::server::frame::{FrameRequest, frame_html, landing_html};
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub state: Option<String>,
}

fn parse_game(slug: &str) -> Result<GameKind, FrameError> {
    GameKind::from_slug(slug).ok_or_else(|| FrameError::UnknownGame(slug.to_string()))
}

fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn initial_frame<G: FrameGame>(config: &ServerConfig) -> Result<HttpResponse, FrameError> {
    info!("[Frame] Initial {} frame", G::SLUG);
    let html = frame_html::<G>(&G::initial_state(), config)?;
    Ok(html_response(StatusCode::OK, html))
}

/// Decodes the echoed state, applies one button press, answers the next frame.
fn play<G: FrameGame>(config: &ServerConfig, body: &[u8]) -> Result<HttpResponse, FrameError> {
    let request: FrameRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(err) => {
            error!("[Frame] {}, answering the initial {} frame", FrameError::MalformedBody(err.to_string()), G::SLUG);
            let html = frame_html::<G>(&G::initial_state(), config)?;
            return Ok(html_response(StatusCode::INTERNAL_SERVER_ERROR, html));
        }
    };
    let message = request.into_message();
    let state = restore_state::<G>(message.state.as_deref());

    let next = match message.button_index.and_then(|button| u32::try_from(button).ok()) {
        Some(button) => {
            let next = G::on_button(&state, button, &mut rand::rng());
            debug!("[Frame] {} button={} state={:?} -> {:?}", G::SLUG, button, state, next);
            next
        }
        None => {
            debug!("[Frame] {} no usable button ({:?}), state unchanged", G::SLUG, message.button_index);
            state
        }
    };
    Ok(html_response(StatusCode::OK, frame_html::<G>(&next, config)?))
}

fn image<G: FrameGame>(raw_state: Option<&str>) -> HttpResponse {
    let state = restore_state::<G>(raw_state);
    HttpResponse::Ok()
        .content_type("image/svg+xml")
        .insert_header((header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"))
        .body(G::render_svg(&state))
}

fn landing<G: FrameGame>(config: &ServerConfig) -> Result<HttpResponse, FrameError> {
    Ok(html_response(StatusCode::OK, landing_html::<G>(config)?))
}

fn frame_for(kind: GameKind, config: &ServerConfig) -> Result<HttpResponse, FrameError> {
    match kind {
        GameKind::TicTacToe => initial_frame::<TicTacToe>(config),
        GameKind::RockPaperScissors => initial_frame::<RockPaperScissors>(config),
    }
}

fn play_for(kind: GameKind, config: &ServerConfig, body: &[u8]) -> Result<HttpResponse, FrameError> {
    match kind {
        GameKind::TicTacToe => play::<TicTacToe>(config, body),
        GameKind::RockPaperScissors => play::<RockPaperScissors>(config, body),
    }
}

fn image_for(kind: GameKind, raw_state: Option<&str>) -> HttpResponse {
    match kind {
        GameKind::TicTacToe => image::<TicTacToe>(raw_state),
        GameKind::RockPaperScissors => image::<RockPaperScissors>(raw_state),
    }
}

/// `GET /`
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, FrameError> {
    match state.config.default_game {
        GameKind::TicTacToe => landing::<TicTacToe>(&state.config),
        GameKind::RockPaperScissors => landing::<RockPaperScissors>(&state.config),
    }
}

/// `GET /api/{game}/frame`
pub async fn get_frame(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, FrameError> {
    frame_for(parse_game(&path)?, &state.config)
}

/// `POST /api/{game}/frame`
pub async fn post_frame(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, FrameError> {
    play_for(parse_game(&path)?, &state.config, &body)
}

/// `GET /api/{game}/image?state=...`
pub async fn get_image(
    path: web::Path<String>,
    query: web::Query<ImageQuery>,
) -> Result<HttpResponse, FrameError> {
    Ok(image_for(parse_game(&path)?, query.state.as_deref()))
}

/// `GET /api/frame`
pub async fn get_default_frame(state: web::Data<AppState>) -> Result<HttpResponse, FrameError> {
    frame_for(state.config.default_game, &state.config)
}

/// `POST /api/frame`
pub async fn post_default_frame(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, FrameError> {
    play_for(state.config.default_game, &state.config, &body)
}

/// `GET /api/image?state=...`
pub async fn get_default_image(
    state: web::Data<AppState>,
    query: web::Query<ImageQuery>,
) -> HttpResponse {
    image_for(state.config.default_game, query.state.as_deref())
}
