//! Owned deep copy of the caller's image, kept in its native sample type.
use super::interleaved::{ChannelOrder, InterleavedImage, Sample};
use super::traits::ImageView;

/// Tightly packed sample storage.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl SampleData {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            SampleData::U8(v) => v.len(),
            SampleData::U16(v) => v.len(),
            SampleData::F32(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get_f32(&self, i: usize) -> f32 {
        match self {
            SampleData::U8(v) => v[i].to_f32(),
            SampleData::U16(v) => v[i].to_f32(),
            SampleData::F32(v) => v[i],
        }
    }

    /// Copies `src[start..start + out.len()]` into `out` as f32.
    pub(crate) fn copy_f32(&self, start: usize, out: &mut [f32]) {
        fn cast<T: Sample>(src: &[T], out: &mut [f32]) {
            for (o, &s) in out.iter_mut().zip(src) {
                *o = s.to_f32();
            }
        }
        let end = start + out.len();
        match self {
            SampleData::U8(v) => cast(&v[start..end], out),
            SampleData::U16(v) => cast(&v[start..end], out),
            SampleData::F32(v) => out.copy_from_slice(&v[start..end]),
        }
    }
}

/// Wraps a packed sample vector into the matching `SampleData` variant.
pub trait IntoSampleData: Sample {
    fn into_sample_data(samples: Vec<Self>) -> SampleData;
}

impl IntoSampleData for u8 {
    fn into_sample_data(samples: Vec<Self>) -> SampleData {
        SampleData::U8(samples)
    }
}

impl IntoSampleData for u16 {
    fn into_sample_data(samples: Vec<Self>) -> SampleData {
        SampleData::U16(samples)
    }
}

impl IntoSampleData for f32 {
    fn into_sample_data(samples: Vec<Self>) -> SampleData {
        SampleData::F32(samples)
    }
}

/// Image owned by the adapter. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    channels: usize,
    order: ChannelOrder,
    data: SampleData,
}

impl SourceImage {
    /// Deep-copies `view`, dropping any stride padding.
    pub fn from_view<T: IntoSampleData>(view: &InterleavedImage<'_, T>) -> Self {
        let samples = match view.as_slice() {
            Some(packed) => packed.to_vec(),
            None => {
                let len = view.width() * view.height() * view.channels();
                let mut samples = Vec::with_capacity(len);
                for row in view.rows() {
                    samples.extend_from_slice(row);
                }
                samples
            }
        };
        Self {
            width: view.width(),
            height: view.height(),
            channels: view.channels(),
            order: view.order(),
            data: T::into_sample_data(samples),
        }
    }

    /// Builds an image from already packed samples. Callers uphold
    /// `data.len() == width * height * channels` and `channels ∈ {1, 3}`.
    pub(crate) fn from_packed(
        width: usize,
        height: usize,
        channels: usize,
        order: ChannelOrder,
        data: SampleData,
    ) -> Self {
        debug_assert_eq!(data.len(), width * height * channels);
        Self {
            width,
            height,
            channels,
            order,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.channels == 1
    }
    #[inline]
    pub fn data(&self) -> &SampleData {
        &self.data
    }

    /// Sample `c` of pixel (x, y), in storage order.
    #[inline]
    pub fn sample_at(&self, x: usize, y: usize, c: usize) -> f32 {
        self.data.get_f32((y * self.width + x) * self.channels + c)
    }
}
