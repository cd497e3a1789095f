//! Borrowed interleaved input view (the caller keeps ownership of the bytes).
use crate::error::GistError;
use serde::{Deserialize, Serialize};

/// Sample types accepted on input. Values are cast to `f32` as-is, so an
/// 8-bit image yields planes in `[0, 255]`.
pub trait Sample: Copy + Send + Sync + 'static {
    fn to_f32(self) -> f32;
}

impl Sample for u8 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl Sample for u16 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

/// Order of the interleaved samples of a 3-channel pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    /// Blue first; the native layout of color buffers fed to the adapter.
    #[default]
    Bgr,
    Rgb,
}

impl ChannelOrder {
    /// Interleaved offsets of the red, green and blue samples.
    #[inline]
    pub fn rgb_offsets(self) -> [usize; 3] {
        match self {
            ChannelOrder::Bgr => [2, 1, 0],
            ChannelOrder::Rgb => [0, 1, 2],
        }
    }
}

/// Borrowed view over an interleaved 1- or 3-channel buffer.
///
/// `stride` counts samples (not pixels) between row starts, so a tightly
/// packed color image has `stride == w * 3`.
#[derive(Clone, Debug)]
pub struct InterleavedImage<'a, T: Sample> {
    w: usize,
    h: usize,
    channels: usize,
    stride: usize,
    order: ChannelOrder,
    data: &'a [T],
}

impl<'a, T: Sample> InterleavedImage<'a, T> {
    /// Tightly packed view with `channels` samples per pixel.
    pub fn new(w: usize, h: usize, channels: usize, data: &'a [T]) -> Result<Self, GistError> {
        let stride = w
            .checked_mul(channels)
            .ok_or_else(|| GistError::invalid_image("dimensions overflow"))?;
        Self::with_stride(w, h, channels, stride, data)
    }

    pub fn gray(w: usize, h: usize, data: &'a [T]) -> Result<Self, GistError> {
        Self::new(w, h, 1, data)
    }

    /// Three-channel view in BGR order.
    pub fn color(w: usize, h: usize, data: &'a [T]) -> Result<Self, GistError> {
        Self::new(w, h, 3, data)
    }

    pub fn with_stride(
        w: usize,
        h: usize,
        channels: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, GistError> {
        if w == 0 || h == 0 {
            return Err(GistError::invalid_image(format!(
                "image dimensions must be positive, got {w}x{h}"
            )));
        }
        if channels != 1 && channels != 3 {
            return Err(GistError::invalid_image(format!(
                "expected 1 or 3 channels, got {channels}"
            )));
        }
        let row_len = w
            .checked_mul(channels)
            .ok_or_else(|| GistError::invalid_image("dimensions overflow"))?;
        if stride < row_len {
            return Err(GistError::invalid_image(format!(
                "stride ({stride}) must be >= width * channels ({row_len})"
            )));
        }
        let required = stride
            .checked_mul(h - 1)
            .and_then(|n| n.checked_add(row_len))
            .ok_or_else(|| GistError::invalid_image("dimensions overflow"))?;
        if data.len() < required {
            return Err(GistError::invalid_image(format!(
                "buffer holds {} samples, {w}x{h}x{channels} with stride {stride} needs {required}",
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            channels,
            stride,
            order: ChannelOrder::default(),
            data,
        })
    }

    /// Overrides the channel order; meaningless for grayscale views.
    pub fn with_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }
}

impl<'a, T: Sample> crate::image::traits::ImageView for InterleavedImage<'a, T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }
    #[inline]
    fn is_contiguous(&self) -> bool {
        self.stride == self.w * self.channels
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        self.is_contiguous()
            .then_some(&self.data[..self.w * self.h * self.channels])
    }
}
