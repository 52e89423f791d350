// CLASSIFICATION: COMMUNITY
// Filename: effect.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-10

//! Side-effect requests queued by the interpreter for the front end.

/// Sound cues. Playback is best effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Blip,
    Glitch,
    /// Looping background hum requested at startup.
    AmbientHum,
}

/// Where a download's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// The in-memory CV from the content set.
    Cv,
    /// A content-relative path such as `/assets/certs/aws_cloud.png`.
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub asset: Asset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Sound(Cue),
    Download(Download),
}
