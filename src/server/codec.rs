//! Game state codec.
//!
//! The state travels to the client as JSON inside the `fc:frame:state` meta
//! tag and the image URL, percent-encoded. Depending on the client it comes
//! back either decoded or still percent-encoded; both are accepted.

use log::{debug, warn};

use crate::game::FrameGame;
use crate::server::error::FrameError;

pub fn encode_state<G: FrameGame>(state: &G::State) -> Result<String, FrameError> {
    serde_json::to_string(state).map_err(|err| FrameError::EncodeState(err.to_string()))
}

/// JSON encoding, percent-encoded for use in a URL or attribute.
pub fn encode_state_param<G: FrameGame>(state: &G::State) -> Result<String, FrameError> {
    encode_state::<G>(state).map(|json| urlencoding::encode(&json).into_owned())
}

pub fn decode_state<G: FrameGame>(raw: &str) -> Result<G::State, FrameError> {
    let raw = raw.trim();
    let state: G::State = match serde_json::from_str(raw) {
        Ok(state) => state,
        Err(err) => {
            let decoded = urlencoding::decode(raw)
                .map_err(|_| FrameError::MalformedState(err.to_string()))?;
            serde_json::from_str(&decoded).map_err(|_| FrameError::MalformedState(err.to_string()))?
        }
    };

    if !G::is_consistent(&state) {
        return Err(FrameError::InconsistentState(G::SLUG));
    }
    Ok(state)
}

/// Decodes the echoed state, falling back to a fresh game when it is missing
/// or unusable.
pub fn restore_state<G: FrameGame>(raw: Option<&str>) -> G::State {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        debug!("[Codec] No {} state, starting a new game", G::SLUG);
        return G::initial_state();
    };
    decode_state::<G>(raw).unwrap_or_else(|err| {
        warn!("[Codec] {} (state={:?}), starting a new game", err, raw);
        G::initial_state()
    })
}
