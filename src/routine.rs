//! Boundary to the descriptor routine that performs the actual GIST
//! filtering. The adapter only prepares inputs for it and caches its output.
use crate::image::{ColorPlanes, ImageF32};
use crate::params::GistSettings;

/// Error type returned by routine implementations; forwarded unchanged.
pub type RoutineError = Box<dyn std::error::Error + Send + Sync>;

/// Multi-scale, multi-orientation descriptor computation.
///
/// Implementations must return exactly
/// `settings.feature_dimension(channels)` values, where `channels` is 1 for
/// [`gray`](Self::gray) and 3 for [`color`](Self::color).
pub trait GistRoutine {
    fn gray(&mut self, plane: &ImageF32, settings: &GistSettings) -> Result<Vec<f32>, RoutineError>;

    fn color(
        &mut self,
        planes: &ColorPlanes,
        settings: &GistSettings,
    ) -> Result<Vec<f32>, RoutineError>;
}

impl<R: GistRoutine + ?Sized> GistRoutine for &mut R {
    fn gray(&mut self, plane: &ImageF32, settings: &GistSettings) -> Result<Vec<f32>, RoutineError> {
        (**self).gray(plane, settings)
    }

    fn color(
        &mut self,
        planes: &ColorPlanes,
        settings: &GistSettings,
    ) -> Result<Vec<f32>, RoutineError> {
        (**self).color(planes, settings)
    }
}

impl<R: GistRoutine + ?Sized> GistRoutine for Box<R> {
    fn gray(&mut self, plane: &ImageF32, settings: &GistSettings) -> Result<Vec<f32>, RoutineError> {
        (**self).gray(plane, settings)
    }

    fn color(
        &mut self,
        planes: &ColorPlanes,
        settings: &GistSettings,
    ) -> Result<Vec<f32>, RoutineError> {
        (**self).color(planes, settings)
    }
}
