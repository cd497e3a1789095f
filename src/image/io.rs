//! Interop with the `image` crate.
//!
//! - `load_image`: read a PNG/JPEG/BMP from disk into a [`SourceImage`].
//! - `SourceImage::from_dynamic`: convert an in-memory `DynamicImage`.
//!
//! Grayscale inputs stay single-channel; everything else becomes 3-channel in
//! RGB order (alpha is dropped). Sixteen-bit and float inputs keep their
//! sample type.
use super::interleaved::ChannelOrder;
use super::source::{SampleData, SourceImage};
use crate::error::GistError;
use image::DynamicImage;
use std::path::Path;

/// Load an image from disk for use with the adapter.
pub fn load_image(path: &Path) -> Result<SourceImage, GistError> {
    let img = image::open(path).map_err(|e| GistError::Io {
        path: path.to_path_buf(),
        reason: format!("failed to open image: {e}"),
    })?;
    SourceImage::from_dynamic(&img).map_err(|e| match e {
        GistError::InvalidImage { reason } => GistError::Io {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })
}

impl SourceImage {
    pub fn from_dynamic(img: &DynamicImage) -> Result<Self, GistError> {
        let (w, h) = (img.width() as usize, img.height() as usize);
        if w == 0 || h == 0 {
            return Err(GistError::invalid_image(format!(
                "image dimensions must be positive, got {w}x{h}"
            )));
        }
        let (channels, data) = match img {
            DynamicImage::ImageLuma8(gray) => (1, SampleData::U8(gray.as_raw().clone())),
            DynamicImage::ImageLumaA8(_) => (1, SampleData::U8(img.to_luma8().into_raw())),
            DynamicImage::ImageLuma16(gray) => (1, SampleData::U16(gray.as_raw().clone())),
            DynamicImage::ImageLumaA16(_) => (1, SampleData::U16(img.to_luma16().into_raw())),
            DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => {
                (3, SampleData::U16(img.to_rgb16().into_raw()))
            }
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                (3, SampleData::F32(img.to_rgb32f().into_raw()))
            }
            _ => (3, SampleData::U8(img.to_rgb8().into_raw())),
        };
        Ok(SourceImage::from_packed(w, h, channels, ChannelOrder::Rgb, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PlanarImage;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn gray_dynamic_image_stays_single_channel() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([42])));
        let src = SourceImage::from_dynamic(&img).unwrap();
        assert_eq!((src.width(), src.height(), src.channels()), (3, 2, 1));
        assert_eq!(src.sample_at(2, 1, 0), 42.0);
    }

    #[test]
    fn rgb_dynamic_image_maps_to_matching_planes() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([200, 100, 50])));
        let src = SourceImage::from_dynamic(&img).unwrap();
        assert_eq!(src.order(), ChannelOrder::Rgb);
        let PlanarImage::Color(planes) = PlanarImage::from_source(&src) else {
            panic!("expected three planes");
        };
        assert_eq!(planes.r.get(1, 1), 200.0);
        assert_eq!(planes.g.get(1, 1), 100.0);
        assert_eq!(planes.b.get(1, 1), 50.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_image(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, GistError::Io { .. }));
        assert!(err.to_string().contains("exist.png"));
    }
}
