mod common;

use common::routine::RecordingRoutine;
use common::synthetic_image::{gray_ramp_u8, solid_bgr_u8};
use gist_adapter::image::{ChannelOrder, ImageView, InterleavedImage, PlanarImage};
use gist_adapter::GistAdapter;

#[test]
fn color_planes_reach_routine_in_rgb_order() {
    let (w, h) = (12usize, 9usize);
    let bgr = solid_bgr_u8(w, h, 11, 22, 33);
    let mut adapter = GistAdapter::new(RecordingRoutine::new());
    adapter.set_image(&InterleavedImage::color(w, h, &bgr).unwrap());
    adapter.extract().unwrap();

    let planes = adapter
        .routine()
        .last_color
        .as_ref()
        .expect("color entry point was used");
    assert_eq!((planes.width(), planes.height()), (w, h));
    assert!(planes.r.data.iter().all(|&v| v == 33.0), "red plane");
    assert!(planes.g.data.iter().all(|&v| v == 22.0), "green plane");
    assert!(planes.b.data.iter().all(|&v| v == 11.0), "blue plane");
    assert!(adapter.routine().last_gray.is_none());
}

#[test]
fn rgb_ordered_input_is_not_swapped() {
    let rgb: Vec<u16> = [1000u16, 2000, 3000].repeat(4);
    let view = InterleavedImage::color(2, 2, &rgb)
        .unwrap()
        .with_order(ChannelOrder::Rgb);
    let mut adapter = GistAdapter::with_image(RecordingRoutine::new(), &view);
    adapter.extract().unwrap();
    let Some(PlanarImage::Color(planes)) = adapter.planar() else {
        panic!("expected color planes");
    };
    assert_eq!(planes.r.mean(), 1000.0);
    assert_eq!(planes.g.mean(), 2000.0);
    assert_eq!(planes.b.mean(), 3000.0);
}

#[test]
fn per_pixel_values_follow_their_position() {
    // B encodes x, G encodes y, R encodes x + y.
    let (w, h) = (5usize, 4usize);
    let mut bgr = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            bgr.extend_from_slice(&[x as f32, y as f32, (x + y) as f32]);
        }
    }
    let mut adapter = GistAdapter::new(RecordingRoutine::new());
    adapter.set_image(&InterleavedImage::color(w, h, &bgr).unwrap());
    adapter.extract().unwrap();
    let Some(PlanarImage::Color(planes)) = adapter.planar() else {
        panic!("expected color planes");
    };
    for y in 0..h {
        for x in 0..w {
            assert_eq!(planes.b.get(x, y), x as f32);
            assert_eq!(planes.g.get(x, y), y as f32);
            assert_eq!(planes.r.get(x, y), (x + y) as f32);
        }
    }
}

#[test]
fn strided_gray_input_is_packed_into_the_plane() {
    let (w, h, stride) = (6usize, 3usize, 8usize);
    let packed = gray_ramp_u8(w, h);
    let mut padded = vec![255u8; stride * h];
    for y in 0..h {
        padded[y * stride..y * stride + w].copy_from_slice(&packed[y * w..(y + 1) * w]);
    }
    let view = InterleavedImage::with_stride(w, h, 1, stride, &padded).unwrap();
    let mut adapter = GistAdapter::with_image(RecordingRoutine::new(), &view);
    adapter.extract().unwrap();

    let plane = adapter
        .routine()
        .last_gray
        .as_ref()
        .expect("gray entry point was used");
    assert!(plane.is_contiguous());
    let expected: Vec<f32> = packed.iter().map(|&v| v as f32).collect();
    assert_eq!(plane.data, expected);
}

#[test]
fn caller_buffer_can_change_after_set_image() {
    let mut buf = vec![5u8; 4 * 4];
    let mut adapter = GistAdapter::new(RecordingRoutine::new());
    adapter.set_image(&InterleavedImage::gray(4, 4, &buf).unwrap());
    buf.fill(200);
    adapter.extract().unwrap();
    let Some(PlanarImage::Gray(plane)) = adapter.planar() else {
        panic!("expected a gray plane");
    };
    assert!(plane.data.iter().all(|&v| v == 5.0));
}
