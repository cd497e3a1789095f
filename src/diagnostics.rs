//! Human-readable and JSON summary of an adapter's configuration.
use serde::Serialize;

/// Snapshot produced by [`GistAdapter::info`](crate::GistAdapter::info).
///
/// `feature_dimension` is `None` until an extraction has succeeded; the text
/// rendering prints `0` in that case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GistReport {
    pub block_count: usize,
    pub scale_count: usize,
    pub orientations: Vec<usize>,
    pub image_width: usize,
    pub image_height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_dimension: Option<usize>,
}

impl GistReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for GistReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=====GIST Settings=====")?;
        writeln!(f, "NBlock:       {}", self.block_count)?;
        writeln!(f, "NScale:       {}", self.scale_count)?;
        write!(f, "NOrient:      ")?;
        for n in &self.orientations {
            write!(f, "{n} ")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "-----Image Info-----")?;
        writeln!(f, "Size: {} * {}", self.image_width, self.image_height)?;
        writeln!(f, "Feature Size: {}", self.feature_dimension.unwrap_or(0))
    }
}
