pub mod f32;
pub mod interleaved;
pub mod io;
pub mod planar;
pub mod source;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::interleaved::{ChannelOrder, InterleavedImage, Sample};
pub use self::planar::{ColorPlanes, PlanarImage};
pub use self::source::{IntoSampleData, SampleData, SourceImage};
pub use self::traits::{ImageView, ImageViewMut, Rows};
