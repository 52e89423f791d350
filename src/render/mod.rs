// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-12

//! Time-driven presentation state: the output typewriter and the about sequence.

pub mod cinematic;
pub mod typewriter;

pub use cinematic::{AboutSequence, CinematicTimings, Stage};
pub use typewriter::Typewriter;
