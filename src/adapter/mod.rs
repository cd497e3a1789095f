//! The adapter between caller-owned images and a GIST descriptor routine.
//!
//! Overview
//! - `set_image` deep-copies an interleaved 1- or 3-channel buffer.
//! - Parameter setters validate their input and only invalidate the cached
//!   descriptor when the stored value actually changes.
//! - `extract` converts the image to planar f32 once per image, runs the
//!   routine with the effective parameters and caches the result together
//!   with those parameters.
//!
//! State machine: `Empty → ImageSet → Extracted`. Any parameter change drops
//! `Extracted` back to `ImageSet`; `set_image` always lands in `ImageSet`;
//! `clear` returns to `Empty`.

mod gist;
mod state;

pub use gist::GistAdapter;
pub use state::{Extraction, ExtractionState};
