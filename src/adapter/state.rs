use crate::params::GistSettings;

/// A successful extraction together with the inputs it was computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    features: Vec<f32>,
    settings: GistSettings,
    channels: usize,
}

impl Extraction {
    pub(crate) fn new(features: Vec<f32>, settings: GistSettings, channels: usize) -> Self {
        Self {
            features,
            settings,
            channels,
        }
    }

    pub fn features(&self) -> &[f32] {
        &self.features
    }

    /// Effective parameters in force when the features were computed.
    pub fn settings(&self) -> &GistSettings {
        &self.settings
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

/// Cached result slot. Any mutation of the image or the parameters drops
/// back to `NotExtracted`, so a stale vector can never be observed.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExtractionState {
    #[default]
    NotExtracted,
    Extracted(Extraction),
}

impl ExtractionState {
    pub fn is_extracted(&self) -> bool {
        matches!(self, ExtractionState::Extracted(_))
    }

    pub fn extraction(&self) -> Option<&Extraction> {
        match self {
            ExtractionState::Extracted(e) => Some(e),
            ExtractionState::NotExtracted => None,
        }
    }

    /// Returns the cached extraction, computing it with `f` first if the slot
    /// is empty. A failing `f` leaves the slot empty.
    pub(crate) fn get_or_try_insert_with<E>(
        &mut self,
        f: impl FnOnce() -> Result<Extraction, E>,
    ) -> Result<&Extraction, E> {
        if let ExtractionState::NotExtracted = self {
            *self = ExtractionState::Extracted(f()?);
        }
        match &*self {
            ExtractionState::Extracted(e) => Ok(e),
            ExtractionState::NotExtracted => unreachable!("extraction slot populated above"),
        }
    }

    /// Drops any cached result; returns whether one was present.
    pub fn invalidate(&mut self) -> bool {
        std::mem::take(self).is_extracted()
    }
}
