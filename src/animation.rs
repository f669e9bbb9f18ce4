use std::time::Duration;

use serde::Deserialize;

use crate::error::AnimationError;

pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets2.lottiefiles.com/packages/lf20_touohxv0.json";

// ---------------------------------------------------------------------------
// Lottie document header
// ---------------------------------------------------------------------------

/// The top-level fields of a Lottie (Bodymovin) JSON document.
/// Layers are kept opaque; only their count is shown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LottieAnimation {
    #[serde(rename = "v", default)]
    pub version: String,
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip")]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    #[serde(default)]
    pub layers: Vec<serde_json::Value>,
}

impl LottieAnimation {
    pub fn frame_count(&self) -> f64 {
        (self.out_point - self.in_point).max(0.0)
    }

    /// Length of one loop in seconds; zero for degenerate documents.
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate > 0.0 {
            self.frame_count() / self.frame_rate
        } else {
            0.0
        }
    }

    /// Position within the loop, in `[0, 1)`, after `elapsed` seconds.
    pub fn progress_at(&self, elapsed: f64) -> f32 {
        let duration = self.duration_secs();
        if duration <= 0.0 {
            return 0.0;
        }
        (elapsed.rem_euclid(duration) / duration) as f32
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("animation")
    }
}

/// Decode a Lottie document.
pub fn parse_animation(bytes: &[u8]) -> Result<LottieAnimation, AnimationError> {
    Ok(serde_json::from_slice(bytes)?)
}

// ---------------------------------------------------------------------------
// Best-effort fetch
// ---------------------------------------------------------------------------

/// Outcome of the start-up fetch. Failure is cosmetic only.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnimationState {
    Ready(LottieAnimation),
    Unavailable(String),
    /// Fetch skipped by configuration.
    #[default]
    Disabled,
}

/// Single blocking GET; no retry.
pub fn fetch_animation(url: &str, timeout: Duration) -> Result<LottieAnimation, AnimationError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send()?;
    if response.status() != reqwest::StatusCode::OK {
        return Err(AnimationError::Status(response.status()));
    }
    let bytes = response.bytes()?;
    parse_animation(&bytes)
}

/// Fetch the header animation, folding any failure into
/// [`AnimationState::Unavailable`].
pub fn load_animation(url: &str, timeout: Duration) -> AnimationState {
    match fetch_animation(url, timeout) {
        Ok(anim) => {
            log::info!(
                "Loaded animation '{}' ({}x{}, {:.1}s)",
                anim.display_name(),
                anim.width,
                anim.height,
                anim.duration_secs()
            );
            AnimationState::Ready(anim)
        }
        Err(e) => {
            log::warn!("Could not load animation from {url}: {e}");
            AnimationState::Unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &[u8] = br#"{"v":"5.7.4","fr":30,"ip":0,"op":90,"w":400,"h":300,"nm":"alert","layers":[{"ty":4},{"ty":4}]}"#;

    #[test]
    fn parses_header_fields() {
        let anim = parse_animation(DOC).unwrap();
        assert_eq!(anim.version, "5.7.4");
        assert_eq!(anim.display_name(), "alert");
        assert_eq!((anim.width, anim.height), (400, 300));
        assert_eq!(anim.layers.len(), 2);
        assert_eq!(anim.duration_secs(), 3.0);
    }

    #[test]
    fn progress_wraps_around() {
        let anim = parse_animation(DOC).unwrap();
        assert_eq!(anim.progress_at(0.0), 0.0);
        assert!((anim.progress_at(1.5) - 0.5).abs() < 1e-6);
        assert!((anim.progress_at(4.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_frame_rate_does_not_divide_by_zero() {
        let anim =
            parse_animation(br#"{"fr":0,"ip":0,"op":10,"w":1,"h":1}"#).unwrap();
        assert_eq!(anim.duration_secs(), 0.0);
        assert_eq!(anim.progress_at(2.0), 0.0);
        assert_eq!(anim.display_name(), "animation");
    }

    #[test]
    fn non_lottie_json_is_a_decode_error() {
        let err = parse_animation(br#"{"hello":"world"}"#).unwrap_err();
        assert!(matches!(err, AnimationError::Decode(_)));
    }

    #[test]
    fn invalid_url_degrades_to_unavailable() {
        let state = load_animation("not a url", Duration::from_secs(1));
        assert!(matches!(state, AnimationState::Unavailable(_)));
    }
}
