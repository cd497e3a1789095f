//! Planar f32 layout consumed by the descriptor routine.
//!
//! Grayscale sources map to a single plane. Color sources are de-interleaved
//! into R, G, B planes; the source stores its samples in [`ChannelOrder`]
//! (BGR unless stated otherwise), so the plane order is always reconstructed
//! from the offsets rather than copied positionally.
use super::f32::ImageF32;
use super::interleaved::ChannelOrder;
use super::source::SourceImage;
use super::traits::ImageViewMut;

/// Three planes in red, green, blue order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPlanes {
    pub r: ImageF32,
    pub g: ImageF32,
    pub b: ImageF32,
}

impl ColorPlanes {
    pub fn width(&self) -> usize {
        self.r.w
    }

    pub fn height(&self) -> usize {
        self.r.h
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlanarImage {
    Gray(ImageF32),
    Color(ColorPlanes),
}

impl PlanarImage {
    pub fn from_source(src: &SourceImage) -> Self {
        if src.is_gray() {
            PlanarImage::Gray(gray_plane(src))
        } else {
            PlanarImage::Color(color_planes(src))
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            PlanarImage::Gray(_) => 1,
            PlanarImage::Color(_) => 3,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            PlanarImage::Gray(p) => p.w,
            PlanarImage::Color(c) => c.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            PlanarImage::Gray(p) => p.h,
            PlanarImage::Color(c) => c.height(),
        }
    }
}

fn gray_plane(src: &SourceImage) -> ImageF32 {
    let mut plane = ImageF32::new(src.width(), src.height());
    if let Some(out) = plane.as_mut_slice() {
        src.data().copy_f32(0, out);
    }
    plane
}

fn color_planes(src: &SourceImage) -> ColorPlanes {
    let (w, h) = (src.width(), src.height());
    let mut r = ImageF32::new(w, h);
    let mut g = ImageF32::new(w, h);
    let mut b = ImageF32::new(w, h);
    deinterleave(src, src.order(), &mut r, &mut g, &mut b);
    ColorPlanes { r, g, b }
}

#[cfg(not(feature = "parallel"))]
fn deinterleave(
    src: &SourceImage,
    order: ChannelOrder,
    r: &mut ImageF32,
    g: &mut ImageF32,
    b: &mut ImageF32,
) {
    let w = src.width();
    let mut line = vec![0.0f32; w * 3];
    for y in 0..src.height() {
        src.data().copy_f32(y * w * 3, &mut line);
        split_row(&line, order, r.row_mut(y), g.row_mut(y), b.row_mut(y));
    }
}

#[cfg(feature = "parallel")]
fn deinterleave(
    src: &SourceImage,
    order: ChannelOrder,
    r: &mut ImageF32,
    g: &mut ImageF32,
    b: &mut ImageF32,
) {
    use rayon::prelude::*;

    // Planes are freshly allocated with stride == width, so rows are the
    // width-sized chunks of `data`.
    let w = src.width();
    r.data
        .par_chunks_mut(w)
        .zip(g.data.par_chunks_mut(w))
        .zip(b.data.par_chunks_mut(w))
        .enumerate()
        .for_each_init(
            || vec![0.0f32; w * 3],
            |line, (y, ((r_row, g_row), b_row))| {
                src.data().copy_f32(y * w * 3, line);
                split_row(line, order, r_row, g_row, b_row);
            },
        );
}

#[inline]
fn split_row(line: &[f32], order: ChannelOrder, r: &mut [f32], g: &mut [f32], b: &mut [f32]) {
    let [ri, gi, bi] = order.rgb_offsets();
    for (x, px) in line.chunks_exact(3).enumerate() {
        r[x] = px[ri];
        g[x] = px[gi];
        b[x] = px[bi];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::InterleavedImage;

    #[test]
    fn gray_samples_are_copied_verbatim() {
        let buf = [0u8, 7, 128, 255, 3, 9];
        let view = InterleavedImage::gray(3, 2, &buf).unwrap();
        let planar = PlanarImage::from_source(&SourceImage::from_view(&view));
        match planar {
            PlanarImage::Gray(p) => {
                assert_eq!((p.w, p.h), (3, 2));
                assert_eq!(p.data, vec![0.0, 7.0, 128.0, 255.0, 3.0, 9.0]);
            }
            PlanarImage::Color(_) => panic!("expected a single plane"),
        }
    }

    #[test]
    fn bgr_source_lands_in_rgb_planes() {
        // every pixel: B=10, G=20, R=30
        let buf: Vec<u8> = [10u8, 20, 30].repeat(4 * 3);
        let view = InterleavedImage::color(4, 3, &buf).unwrap();
        let planar = PlanarImage::from_source(&SourceImage::from_view(&view));
        let PlanarImage::Color(planes) = planar else {
            panic!("expected three planes");
        };
        assert!(planes.r.data.iter().all(|&v| v == 30.0));
        assert!(planes.g.data.iter().all(|&v| v == 20.0));
        assert!(planes.b.data.iter().all(|&v| v == 10.0));
    }

    #[test]
    fn rgb_source_keeps_plane_order() {
        let buf: Vec<f32> = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let view = InterleavedImage::color(2, 1, &buf)
            .unwrap()
            .with_order(ChannelOrder::Rgb);
        let PlanarImage::Color(planes) = PlanarImage::from_source(&SourceImage::from_view(&view))
        else {
            panic!("expected three planes");
        };
        assert_eq!(planes.r.data, vec![0.1, 0.4]);
        assert_eq!(planes.g.data, vec![0.2, 0.5]);
        assert_eq!(planes.b.data, vec![0.3, 0.6]);
    }
}
