//! Platform abstraction layer
//!
//! Handles the host side of the game:
//! - Frame scheduling and cancellation
//! - Input event plumbing (scoped keyboard listeners on web)
//! - Surface acquisition errors

pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame::{CancelToken, FpsCounter, FrameLoop, FrameOutcome, Hud};

use thiserror::Error;

/// Why a drawing surface could not be acquired
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("no browser window or document available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("surface has no drawable area ({width}x{height})")]
    Empty { width: f32, height: f32 },
}
