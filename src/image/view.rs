use super::ImageView;

/// Borrowed single-channel image with an explicit row stride.
#[derive(Clone, Copy, Debug)]
pub struct ImageRef<'a, T> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // elements between rows
    pub data: &'a [T],
}

impl<'a, T: Copy> ImageRef<'a, T> {
    /// Tightly packed view over `data` (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [T]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// View of the `w × h` block whose top-left corner is `(x0, y0)`.
    pub fn sub_view(&self, x0: usize, y0: usize, w: usize, h: usize) -> ImageRef<'a, T> {
        assert!(x0 + w <= self.w && y0 + h <= self.h, "sub view out of bounds");
        let start = y0 * self.stride + x0;
        let end = if h == 0 {
            start
        } else {
            start + (h - 1) * self.stride + w
        };
        ImageRef {
            w,
            h,
            stride: self.stride,
            data: &self.data[start..end],
        }
    }
}

impl<'a, T: Copy> ImageView for ImageRef<'a, T> {
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
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
