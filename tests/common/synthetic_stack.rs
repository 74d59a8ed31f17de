use panel_layout::ImageStack;

/// Stack of `count` images of `height × width` where image `k` holds
/// `0, 1, 2, ...` (row-major) shifted by `k`.
pub fn shifted_ramps(count: usize, height: usize, width: usize) -> ImageStack<i32> {
    assert!(height > 0 && width > 0, "image dimensions must be positive");
    let plane = (height * width) as i32;
    let data = (0..count as i32)
        .flat_map(|k| (0..plane).map(move |v| v + k))
        .collect();
    ImageStack::from_shape_vec(&[count, height, width], data).expect("consistent shape")
}

/// Stack whose pixel values encode `(image, y, x)` uniquely, so misplaced
/// pixels are easy to spot.
pub fn tagged(count: usize, height: usize, width: usize) -> ImageStack<u32> {
    let mut data = Vec::with_capacity(count * height * width);
    for k in 0..count {
        for y in 0..height {
            for x in 0..width {
                data.push((k * 10_000 + y * 100 + x) as u32 + 1);
            }
        }
    }
    ImageStack::from_shape_vec(&[count, height, width], data).expect("consistent shape")
}
