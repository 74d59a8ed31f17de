//! Batch of equally-shaped images stored as one (count, height, width) array.
use super::{ImageBuffer, ImageRef, ImageView};
use crate::chunk::{chunk_ranges, ChunkRanges};
use crate::error::{LayoutError, Result};
use std::iter::FusedIterator;

/// Owned 3-axis array: `len()` images of `height × width` pixels each, packed
/// back to back in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageStack<T> {
    count: usize,
    height: usize,
    width: usize,
    data: Vec<T>,
}

impl<T: Copy> ImageStack<T> {
    /// Build a stack from a dynamic `shape` and flat `data`.
    ///
    /// Fails with a shape error unless `shape` has exactly three axes and
    /// `data` holds exactly `shape[0] * shape[1] * shape[2]` elements.
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        let &[count, height, width] = shape else {
            return Err(LayoutError::Rank { found: shape.len() });
        };
        let expected = count
            .checked_mul(height)
            .and_then(|n| n.checked_mul(width))
            .ok_or_else(|| LayoutError::overflow(shape))?;
        if data.len() != expected {
            return Err(LayoutError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            count,
            height,
            width,
            data,
        })
    }

    /// Stack individual images; all of them must share the first one's shape.
    ///
    /// An empty input produces an empty stack of shape `(0, 0, 0)`.
    pub fn from_images<V, I>(images: I) -> Result<Self>
    where
        V: ImageView<Pixel = T>,
        I: IntoIterator<Item = V>,
    {
        let mut images = images.into_iter();
        let Some(first) = images.next() else {
            return Ok(Self {
                count: 0,
                height: 0,
                width: 0,
                data: Vec::new(),
            });
        };
        let (height, width) = first.shape();
        let mut data = Vec::with_capacity((height * width).saturating_mul(1 + images.size_hint().0));
        let mut count = 0;
        for img in std::iter::once(first).chain(images) {
            if img.shape() != (height, width) {
                return Err(LayoutError::Shape {
                    expected: (height, width),
                    found: img.shape(),
                });
            }
            for row in img.rows() {
                data.extend_from_slice(row);
            }
            count += 1;
        }
        Ok(Self {
            count,
            height,
            width,
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `(height, width)` shared by every image.
    pub fn image_shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// `[count, height, width]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.count, self.height, self.width]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow image `i`. Panics when `i >= len()`.
    pub fn image(&self, i: usize) -> ImageRef<'_, T> {
        self.as_stack_view().image(i)
    }

    /// Copy image `i` into its own buffer.
    pub fn to_image(&self, i: usize) -> ImageBuffer<T> {
        let view = self.image(i);
        ImageBuffer {
            w: view.w,
            h: view.h,
            stride: view.w,
            data: view.data.to_vec(),
        }
    }

    pub fn iter(&self) -> StackIter<'_, T> {
        self.as_stack_view().iter()
    }

    pub fn as_stack_view(&self) -> StackView<'_, T> {
        StackView {
            count: self.count,
            height: self.height,
            width: self.width,
            data: &self.data,
        }
    }

    /// Chunk the leading axis into groups of `chunk_size` images.
    ///
    /// Split points match `chunkify` over a slice of the same length,
    /// including the single empty chunk for an empty stack.
    pub fn chunks(&self, chunk_size: usize) -> Result<StackChunks<'_, T>> {
        Ok(StackChunks {
            stack: self.as_stack_view(),
            ranges: chunk_ranges(self.count, chunk_size)?,
        })
    }
}

/// Borrowed run of consecutive images from a stack.
#[derive(Clone, Copy, Debug)]
pub struct StackView<'a, T> {
    count: usize,
    height: usize,
    width: usize,
    data: &'a [T],
}

impl<'a, T: Copy> StackView<'a, T> {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn image_shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn image(&self, i: usize) -> ImageRef<'a, T> {
        assert!(i < self.count, "image index {i} out of range ({})", self.count);
        let plane = self.height * self.width;
        ImageRef::packed(
            self.width,
            self.height,
            &self.data[i * plane..(i + 1) * plane],
        )
    }

    pub fn iter(&self) -> StackIter<'a, T> {
        StackIter {
            view: *self,
            next: 0,
        }
    }

    fn slice(&self, start: usize, end: usize) -> StackView<'a, T> {
        let plane = self.height * self.width;
        StackView {
            count: end - start,
            height: self.height,
            width: self.width,
            data: &self.data[start * plane..end * plane],
        }
    }
}

/// Iterator over the images of a stack or stack view.
#[derive(Clone, Debug)]
pub struct StackIter<'a, T> {
    view: StackView<'a, T>,
    next: usize,
}

impl<'a, T: Copy> Iterator for StackIter<'a, T> {
    type Item = ImageRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.view.count {
            return None;
        }
        let img = self.view.image(self.next);
        self.next += 1;
        Some(img)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.view.count - self.next;
        (n, Some(n))
    }
}

impl<T: Copy> ExactSizeIterator for StackIter<'_, T> {}

/// Lazy chunks along the leading axis of an image stack.
#[derive(Clone, Debug)]
pub struct StackChunks<'a, T> {
    stack: StackView<'a, T>,
    ranges: ChunkRanges,
}

impl<'a, T: Copy> Iterator for StackChunks<'a, T> {
    type Item = StackView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ranges.next().map(|r| self.stack.slice(r.start, r.end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl<T: Copy> ExactSizeIterator for StackChunks<'_, T> {}
impl<T: Copy> FusedIterator for StackChunks<'_, T> {}
