/// Read access to a single-channel row-major image.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Elements between the starts of consecutive rows (`>= width`).
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// `(height, width)`, the order image stacks and panels report shapes in.
    fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }

    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        None
    }
}

/// Write access on top of [`ImageView`].
pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Whole backing storage, rows `stride` elements apart.
    fn storage_mut(&mut self) -> &mut [Self::Pixel];

    fn rows_mut(&mut self) -> RowsMut<'_, Self::Pixel>
    where
        Self: Sized,
    {
        let (w, h, stride) = (self.width(), self.height(), self.stride());
        RowsMut {
            rest: self.storage_mut(),
            w,
            stride,
            remaining: h,
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

/// Mutable row iterator that splits the storage instead of reborrowing it.
pub struct RowsMut<'a, T> {
    rest: &'a mut [T],
    w: usize,
    stride: usize,
    remaining: usize,
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let rest = std::mem::take(&mut self.rest);
        let step = if self.remaining == 0 {
            rest.len()
        } else {
            self.stride
        };
        let (row, tail) = rest.split_at_mut(step);
        self.rest = tail;
        Some(&mut row[..self.w])
    }
}
