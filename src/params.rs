//! Extraction parameters: block grid size and per-scale orientation counts.
//!
//! Both values are optional. An unset value reports the documented default
//! (4 blocks, orientations `[8, 8, 4]`), and the scale count is always the
//! length of the orientation list, so the two can never disagree.
//!
//! Setters report whether the stored value actually changed; the adapter uses
//! that to decide whether a cached extraction is still valid.

use crate::error::GistError;
use serde::{Deserialize, Serialize};

/// Block grid size used when none is configured.
pub const DEFAULT_BLOCK_COUNT: usize = 4;
/// Orientations per scale used when none are configured.
pub const DEFAULT_ORIENTATIONS: [usize; 3] = [8, 8, 4];
/// Scale count implied by [`DEFAULT_ORIENTATIONS`].
pub const DEFAULT_SCALE_COUNT: usize = DEFAULT_ORIENTATIONS.len();

/// Stored (possibly unset) extraction parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GistParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    block_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orientations: Option<Vec<usize>>,
}

impl GistParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_block_count`](Self::set_block_count).
    pub fn with_block_count(mut self, n: usize) -> Result<Self, GistError> {
        self.set_block_count(n)?;
        Ok(self)
    }

    /// Builder form of [`set_orientations`](Self::set_orientations).
    pub fn with_orientations(mut self, orientations: &[usize]) -> Result<Self, GistError> {
        self.set_orientations(orientations)?;
        Ok(self)
    }

    /// Stores `n`; returns `Ok(false)` when it equals the stored value.
    pub fn set_block_count(&mut self, n: usize) -> Result<bool, GistError> {
        check_block_count(n)?;
        if self.block_count == Some(n) {
            return Ok(false);
        }
        self.block_count = Some(n);
        Ok(true)
    }

    /// Stores a copy of `orientations` (one entry per scale); returns
    /// `Ok(false)` when an identical list is already stored.
    pub fn set_orientations(&mut self, orientations: &[usize]) -> Result<bool, GistError> {
        check_orientations(orientations)?;
        if self.orientations.as_deref() == Some(orientations) {
            return Ok(false);
        }
        self.orientations = Some(orientations.to_vec());
        Ok(true)
    }

    pub fn reset_block_count(&mut self) -> bool {
        self.block_count.take().is_some()
    }

    pub fn reset_orientations(&mut self) -> bool {
        self.orientations.take().is_some()
    }

    /// Unsets both values; returns whether anything was set.
    pub fn reset(&mut self) -> bool {
        let block = self.reset_block_count();
        let orients = self.reset_orientations();
        block || orients
    }

    pub fn is_block_count_set(&self) -> bool {
        self.block_count.is_some()
    }

    pub fn is_orientations_set(&self) -> bool {
        self.orientations.is_some()
    }

    /// Effective block grid size.
    pub fn block_count(&self) -> usize {
        self.block_count.unwrap_or(DEFAULT_BLOCK_COUNT)
    }

    /// Effective number of scales.
    pub fn scale_count(&self) -> usize {
        self.orientations().len()
    }

    /// Effective orientations per scale.
    pub fn orientations(&self) -> &[usize] {
        self.orientations.as_deref().unwrap_or(&DEFAULT_ORIENTATIONS)
    }

    /// Snapshot of the effective values.
    pub fn settings(&self) -> GistSettings {
        GistSettings {
            block_count: self.block_count(),
            orientations: self.orientations().to_vec(),
        }
    }

    /// Re-checks values that bypassed the setters (deserialized input).
    pub fn validate(&self) -> Result<(), GistError> {
        if let Some(n) = self.block_count {
            check_block_count(n)?;
        }
        if let Some(orients) = &self.orientations {
            check_orientations(orients)?;
        }
        Ok(())
    }
}

fn check_block_count(n: usize) -> Result<(), GistError> {
    if n == 0 {
        return Err(GistError::invalid_config("number of blocks must be > 0"));
    }
    Ok(())
}

fn check_orientations(orientations: &[usize]) -> Result<(), GistError> {
    if orientations.is_empty() {
        return Err(GistError::invalid_config(
            "orientation list must contain at least one scale",
        ));
    }
    if let Some(scale) = orientations.iter().position(|&n| n == 0) {
        return Err(GistError::invalid_config(format!(
            "orientation count for scale {scale} must be > 0"
        )));
    }
    Ok(())
}

/// Effective parameters handed to the descriptor routine, and remembered
/// alongside each extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GistSettings {
    pub block_count: usize,
    pub orientations: Vec<usize>,
}

impl Default for GistSettings {
    fn default() -> Self {
        GistParams::default().settings()
    }
}

impl GistSettings {
    pub fn scale_count(&self) -> usize {
        self.orientations.len()
    }

    /// Total number of oriented filters across all scales.
    pub fn orientation_sum(&self) -> usize {
        self.orientations.iter().sum()
    }

    /// Length of the descriptor for an image with `channels` planes:
    /// `block_count² × Σ orientations × channels`.
    pub fn feature_dimension(&self, channels: usize) -> usize {
        self.block_count * self.block_count * self.orientation_sum() * channels
    }
}
