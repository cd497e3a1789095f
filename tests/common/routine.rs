use gist_adapter::image::{ColorPlanes, ImageF32};
use gist_adapter::{GistRoutine, GistSettings, RoutineError};

/// Which entry point a call went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Gray,
    Color,
}

/// Records every call and returns `settings.feature_dimension(channels)`
/// copies of the call number (1-based), so recomputation is observable.
#[derive(Default)]
pub struct RecordingRoutine {
    pub calls: Vec<(Mode, GistSettings)>,
    pub last_gray: Option<ImageF32>,
    pub last_color: Option<ColorPlanes>,
    pub fail_next: bool,
    pub extra_values: usize,
}

impl RecordingRoutine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    fn respond(
        &mut self,
        mode: Mode,
        channels: usize,
        settings: &GistSettings,
    ) -> Result<Vec<f32>, RoutineError> {
        if std::mem::take(&mut self.fail_next) {
            return Err("synthetic routine failure".into());
        }
        self.calls.push((mode, settings.clone()));
        let n = settings.feature_dimension(channels) + self.extra_values;
        Ok(vec![self.calls.len() as f32; n])
    }
}

impl GistRoutine for RecordingRoutine {
    fn gray(&mut self, plane: &ImageF32, settings: &GistSettings) -> Result<Vec<f32>, RoutineError> {
        self.last_gray = Some(plane.clone());
        self.respond(Mode::Gray, 1, settings)
    }

    fn color(
        &mut self,
        planes: &ColorPlanes,
        settings: &GistSettings,
    ) -> Result<Vec<f32>, RoutineError> {
        self.last_color = Some(planes.clone());
        self.respond(Mode::Color, 3, settings)
    }
}
