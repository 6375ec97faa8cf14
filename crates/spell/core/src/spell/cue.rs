//! Opaque presentation asset references.
//!
//! The core never interprets these; it forwards them to the presentation
//! oracle together with a position or quad.

/// Visual effect request: asset id, lifetime and fade duration in seconds.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualCue {
    pub asset: String,
    pub lifetime_secs: f32,
    pub fade_secs: f32,
}

impl VisualCue {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            lifetime_secs: 1.0,
            fade_secs: 0.25,
        }
    }

    pub fn with_timing(mut self, lifetime_secs: f32, fade_secs: f32) -> Self {
        self.lifetime_secs = lifetime_secs;
        self.fade_secs = fade_secs;
        self
    }
}

/// Audio clip request.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AudioCue {
    pub clip: String,
    pub volume: f32,
    pub looping: bool,
}

impl AudioCue {
    pub fn new(clip: impl Into<String>) -> Self {
        Self {
            clip: clip.into(),
            volume: 1.0,
            looping: false,
        }
    }

    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }
}
