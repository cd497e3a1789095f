/// Constant-valued BGR buffer (`b, g, r` repeated per pixel).
pub fn solid_bgr_u8(width: usize, height: usize, b: u8, g: u8, r: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    [b, g, r].repeat(width * height)
}

/// Horizontal gray ramp, values wrapping at 256.
pub fn gray_ramp_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = ((x * 7 + y) % 256) as u8;
        }
    }
    img
}

/// High-contrast checkerboard, single channel.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img[y * width + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    img
}
