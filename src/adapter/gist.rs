use super::state::{Extraction, ExtractionState};
use crate::diagnostics::GistReport;
use crate::error::GistError;
use crate::image::{InterleavedImage, IntoSampleData, PlanarImage, SourceImage};
use crate::params::{GistParams, GistSettings};
use crate::routine::GistRoutine;
use log::{debug, warn};
use std::time::Instant;

/// Owns the image, parameters and last descriptor for one routine.
///
/// Not internally synchronized: every mutating call takes `&mut self`.
pub struct GistAdapter<R: GistRoutine> {
    routine: R,
    params: GistParams,
    image: Option<SourceImage>,
    planar: Option<PlanarImage>,
    state: ExtractionState,
}

impl<R: GistRoutine> GistAdapter<R> {
    pub fn new(routine: R) -> Self {
        Self {
            routine,
            params: GistParams::default(),
            image: None,
            planar: None,
            state: ExtractionState::NotExtracted,
        }
    }

    pub fn with_image<T: IntoSampleData>(routine: R, image: &InterleavedImage<'_, T>) -> Self {
        let mut adapter = Self::new(routine);
        adapter.set_image(image);
        adapter
    }

    pub fn with_params(routine: R, params: GistParams) -> Result<Self, GistError> {
        params.validate()?;
        let mut adapter = Self::new(routine);
        adapter.params = params;
        Ok(adapter)
    }

    // --- Image ---------------------------------------------------------------

    /// Deep-copies `image`, replacing any previous one. Planar buffers and the
    /// cached descriptor are discarded; conversion happens on the next
    /// [`extract`](Self::extract).
    pub fn set_image<T: IntoSampleData>(&mut self, image: &InterleavedImage<'_, T>) {
        self.set_source_image(SourceImage::from_view(image));
    }

    /// Takes ownership of an already copied image (e.g. from
    /// [`load_image`](crate::image::io::load_image)).
    pub fn set_source_image(&mut self, image: SourceImage) {
        debug!(
            "GistAdapter::set_image {}x{} channels={}",
            image.width(),
            image.height(),
            image.channels()
        );
        self.image = Some(image);
        self.planar = None;
        self.invalidate("image replaced");
    }

    /// Drops the image and everything derived from it. Parameters are kept.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.planar = None;
        self.invalidate("image cleared");
    }

    /// Returns the adapter to its freshly constructed state.
    pub fn clear(&mut self) {
        self.clear_image();
        self.params.reset();
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Planar buffers built by the last extraction of the current image.
    pub fn planar(&self) -> Option<&PlanarImage> {
        self.planar.as_ref()
    }

    // --- Parameters ----------------------------------------------------------

    pub fn set_block_count(&mut self, n: usize) -> Result<(), GistError> {
        if self.params.set_block_count(n)? {
            self.invalidate("block count changed");
        }
        Ok(())
    }

    pub fn set_orientations(&mut self, orientations: &[usize]) -> Result<(), GistError> {
        if self.params.set_orientations(orientations)? {
            self.invalidate("orientations changed");
        }
        Ok(())
    }

    /// Replaces all parameters at once; a no-op when `params` equals the
    /// stored ones.
    pub fn set_params(&mut self, params: GistParams) -> Result<(), GistError> {
        params.validate()?;
        if params != self.params {
            self.params = params;
            self.invalidate("parameters replaced");
        }
        Ok(())
    }

    pub fn reset_block_count(&mut self) {
        if self.params.reset_block_count() {
            self.invalidate("block count reset");
        }
    }

    pub fn reset_orientations(&mut self) {
        if self.params.reset_orientations() {
            self.invalidate("orientations reset");
        }
    }

    /// Unsets all parameters and drops the cached descriptor unconditionally.
    pub fn reset_model(&mut self) {
        self.params.reset();
        self.invalidate("model reset");
    }

    pub fn params(&self) -> &GistParams {
        &self.params
    }

    pub fn block_count(&self) -> usize {
        self.params.block_count()
    }

    pub fn scale_count(&self) -> usize {
        self.params.scale_count()
    }

    pub fn orientations_per_scale(&self) -> &[usize] {
        self.params.orientations()
    }

    // --- Extraction ----------------------------------------------------------

    /// Computes the descriptor if needed and returns it.
    ///
    /// Repeated calls without an intervening mutation return the cached
    /// vector without invoking the routine. On failure the adapter stays in
    /// the not-extracted state.
    pub fn extract(&mut self) -> Result<&[f32], GistError> {
        let Self {
            routine,
            params,
            image,
            planar,
            state,
        } = self;
        let image = image.as_ref().ok_or(GistError::PreconditionNotMet {
            operation: "extract",
            reason: "no image set, call set_image() first",
        })?;
        if state.is_extracted() {
            debug!("GistAdapter::extract cache hit");
        }
        let extraction = state.get_or_try_insert_with(|| {
            let planar = planar.get_or_insert_with(|| PlanarImage::from_source(image));
            run_routine(routine, planar, params.settings())
        })?;
        Ok(extraction.features())
    }

    /// Like [`extract`](Self::extract), but copies the descriptor into `out`,
    /// resizing it to the feature dimension.
    ///
    /// `out` is filled on a cache hit too, rather than the call returning
    /// early and leaving it untouched. The routine is not re-run in that case.
    pub fn extract_into(&mut self, out: &mut Vec<f32>) -> Result<(), GistError> {
        let features = self.extract()?;
        out.clear();
        out.extend_from_slice(features);
        Ok(())
    }

    pub fn is_extracted(&self) -> bool {
        self.state.is_extracted()
    }

    /// Last successful extraction with the settings it used.
    pub fn extraction(&self) -> Option<&Extraction> {
        self.state.extraction()
    }

    /// Dimension of the cached descriptor, taken from the extraction itself
    /// rather than the current parameters.
    pub fn feature_dimension(&self) -> Result<usize, GistError> {
        match self.state.extraction() {
            Some(e) => Ok(e.dimension()),
            None => {
                warn!("GistAdapter::feature_dimension requested before extract()");
                Err(GistError::NotExtractedYet)
            }
        }
    }

    pub fn feature_vector(&self) -> Result<&[f32], GistError> {
        self.state
            .extraction()
            .map(Extraction::features)
            .ok_or(GistError::PreconditionNotMet {
                operation: "feature_vector",
                reason: "no feature extracted, check the image and model settings then call extract()",
            })
    }

    /// Summary of the effective parameters, image size and feature dimension.
    pub fn info(&self) -> GistReport {
        let (image_width, image_height) = self
            .image
            .as_ref()
            .map_or((0, 0), |img| (img.width(), img.height()));
        GistReport {
            block_count: self.block_count(),
            scale_count: self.scale_count(),
            orientations: self.orientations_per_scale().to_vec(),
            image_width,
            image_height,
            feature_dimension: self.feature_dimension().ok(),
        }
    }

    // --- Routine access ------------------------------------------------------

    pub fn routine(&self) -> &R {
        &self.routine
    }

    /// Mutable access to the routine. Changing its internal configuration
    /// does not invalidate a cached descriptor; call
    /// [`reset_model`](Self::reset_model) if it should.
    pub fn routine_mut(&mut self) -> &mut R {
        &mut self.routine
    }

    pub fn into_routine(self) -> R {
        self.routine
    }

    fn invalidate(&mut self, reason: &str) {
        if self.state.invalidate() {
            debug!("GistAdapter: cached descriptor dropped ({reason})");
        }
    }
}

fn run_routine<R: GistRoutine>(
    routine: &mut R,
    planar: &PlanarImage,
    settings: GistSettings,
) -> Result<Extraction, GistError> {
    let channels = planar.channels();
    let expected = settings.feature_dimension(channels);
    debug!(
        "GistAdapter::extract start {}x{} channels={} nblock={} orients={:?}",
        planar.width(),
        planar.height(),
        channels,
        settings.block_count,
        settings.orientations
    );
    let start = Instant::now();
    let features = match planar {
        PlanarImage::Gray(plane) => routine.gray(plane, &settings),
        PlanarImage::Color(planes) => routine.color(planes, &settings),
    }
    .map_err(GistError::Routine)?;
    if features.len() != expected {
        return Err(GistError::UnexpectedDimension {
            expected,
            actual: features.len(),
        });
    }
    debug!(
        "GistAdapter::extract done dim={} elapsed_ms={:.3}",
        features.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(Extraction::new(features, settings, channels))
}
