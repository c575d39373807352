//! Frame request parsing and frame HTML templating.

use serde::Deserialize;

use crate::config::server::ServerConfig;
use crate::game::FrameGame;
use crate::server::codec::encode_state_param;
use crate::server::error::FrameError;

/// Interaction fields of a frame POST.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMessage {
    #[serde(alias = "button")]
    pub button_index: Option<i64>,
    pub state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrustedData {
    pub message: Option<FrameMessage>,
}

/// Body of a frame POST. Signatures are not verified: the trusted message is
/// used when present, the untrusted one otherwise.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    pub trusted_data: Option<TrustedData>,
    pub untrusted_data: Option<FrameMessage>,
}

impl FrameRequest {
    pub fn into_message(self) -> FrameMessage {
        self.trusted_data
            .and_then(|trusted| trusted.message)
            .or(self.untrusted_data)
            .unwrap_or_default()
    }
}

/// Meta tags describing `state` as a frame, in document order.
pub fn frame_metadata<G: FrameGame>(
    state: &G::State,
    config: &ServerConfig,
) -> Result<Vec<(String, String)>, FrameError> {
    let state_param = encode_state_param::<G>(state)?;
    let image_url = format!("{}/api/{}/image?state={}", config.base_url, G::SLUG, state_param);
    let post_url = format!("{}/api/{}/frame", config.base_url, G::SLUG);

    let mut metadata = vec![
        ("og:title".to_string(), G::TITLE.to_string()),
        ("og:image".to_string(), image_url.clone()),
        ("fc:frame".to_string(), "vNext".to_string()),
        ("fc:frame:image".to_string(), image_url),
        ("fc:frame:image:aspect_ratio".to_string(), "1:1".to_string()),
        ("fc:frame:post_url".to_string(), post_url),
        ("fc:frame:state".to_string(), state_param),
    ];
    for (i, label) in G::buttons(state).into_iter().enumerate() {
        metadata.push((format!("fc:frame:button:{}", i + 1), label));
    }
    Ok(metadata)
}

fn meta_tags(metadata: &[(String, String)]) -> String {
    metadata
        .iter()
        .map(|(key, value)| {
            let attr = if key.starts_with("og:") { "property" } else { "name" };
            format!(r#"    <meta {}="{}" content="{}" />"#, attr, key, escape_html(value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The frame document answered to every GET and POST of a frame route.
pub fn frame_html<G: FrameGame>(state: &G::State, config: &ServerConfig) -> Result<String, FrameError> {
    let metadata = frame_metadata::<G>(state, config)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
{meta}
  </head>
  <body>{title} Frame</body>
</html>"#,
        title = G::TITLE,
        meta = meta_tags(&metadata),
    ))
}

/// Human-facing page: the initial frame tags plus a preview and the rules.
pub fn landing_html<G: FrameGame>(config: &ServerConfig) -> Result<String, FrameError> {
    let initial = G::initial_state();
    let metadata = frame_metadata::<G>(&initial, config)?;
    let image_url = metadata
        .iter()
        .find(|(key, _)| key == "fc:frame:image")
        .map(|(_, url)| url.clone())
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
{meta}
  </head>
  <body>
    <h1>{title}</h1>
    <img src="{image}" alt="{title}" width="300" height="300" />
    <p>Share {url} in a cast to play. The game can only be played through a frame embedded in a cast.</p>
  </body>
</html>"#,
        title = G::TITLE,
        meta = meta_tags(&metadata),
        image = escape_html(&image_url),
        url = escape_html(&config.base_url),
    ))
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
