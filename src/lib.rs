#![doc = include_str!("../README.md")]

pub mod adapter;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;
pub mod routine;

// --- High-level re-exports -------------------------------------------------

pub use crate::adapter::{Extraction, ExtractionState, GistAdapter};
pub use crate::diagnostics::GistReport;
pub use crate::error::GistError;
pub use crate::params::{GistParams, GistSettings};
pub use crate::routine::{GistRoutine, RoutineError};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use gist_adapter::prelude::*;
///
/// struct Zeros;
///
/// impl GistRoutine for Zeros {
///     fn gray(&mut self, _: &ImageF32, s: &GistSettings) -> Result<Vec<f32>, RoutineError> {
///         Ok(vec![0.0; s.feature_dimension(1)])
///     }
///     fn color(&mut self, _: &ColorPlanes, s: &GistSettings) -> Result<Vec<f32>, RoutineError> {
///         Ok(vec![0.0; s.feature_dimension(3)])
///     }
/// }
///
/// # fn main() -> Result<(), GistError> {
/// let (w, h) = (64usize, 48usize);
/// let bgr = vec![0u8; w * h * 3];
/// let mut adapter = GistAdapter::new(Zeros);
/// adapter.set_image(&InterleavedImage::color(w, h, &bgr)?);
/// adapter.set_block_count(2)?;
/// let dim = adapter.extract()?.len();
/// println!("dim={dim}\n{}", adapter.info());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ColorPlanes, ImageF32, InterleavedImage};
    pub use crate::{GistAdapter, GistError, GistParams, GistRoutine, GistSettings, RoutineError};
}
