//! Owned single-channel image in row-major layout (stride == width).
//!
//! Used both for individual images and for composed panels. Pixel type is
//! generic; values are copied as-is and never converted.
use super::{ImageRef, ImageView, ImageViewMut};
use crate::error::{LayoutError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Copy + Default> ImageBuffer<T> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy> ImageBuffer<T> {
    /// Construct a buffer of size `w × h` with every pixel set to `value`.
    ///
    /// Panics when `w * h` overflows; `from_vec` reports that as an error.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap row-major `data`; its length must be exactly `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self> {
        let expected = w
            .checked_mul(h)
            .ok_or_else(|| LayoutError::overflow(&[h, w]))?;
        if data.len() != expected {
            return Err(LayoutError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build a buffer from equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for row in rows {
            let row = row.as_ref();
            if row.len() != w {
                return Err(LayoutError::Shape {
                    expected: (1, w),
                    found: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Borrow as a read-only view.
    pub fn as_view(&self) -> ImageRef<'_, T> {
        ImageRef {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Copy `src` so that its top-left pixel lands on `(x0, y0)`.
    ///
    /// Panics if the block does not fit inside `self`.
    pub fn copy_from<V: ImageView<Pixel = T>>(&mut self, src: &V, x0: usize, y0: usize) {
        assert!(
            x0 + src.width() <= self.w && y0 + src.height() <= self.h,
            "block {}x{} at ({x0}, {y0}) exceeds {}x{} buffer",
            src.width(),
            src.height(),
            self.w,
            self.h
        );
        for (dy, src_row) in src.rows().enumerate() {
            let start = self.idx(x0, y0 + dy);
            self.data[start..start + src_row.len()].copy_from_slice(src_row);
        }
    }

    /// Set every pixel of the `w × h` block at `(x0, y0)` to `value`.
    pub fn fill_block(&mut self, x0: usize, y0: usize, w: usize, h: usize, value: T) {
        for y in y0..y0 + h {
            let start = self.idx(x0, y);
            self.data[start..start + w].fill(value);
        }
    }

    /// Row-major rows as owned vectors, handy for comparisons.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Copy> ImageView for ImageBuffer<T> {
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

impl<T: Copy> ImageViewMut for ImageBuffer<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn storage_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
