//! Panel shape arithmetic.
//!
//! Cell `i` sits in grid row `i / columns`, grid column `i % columns`. Its
//! padded block starts at `(column * cell_width, row * cell_height)` and the
//! image itself starts `pad_width` pixels further right and down.
use super::PanelOptions;
use crate::chunk::chunk_count;
use crate::error::{LayoutError, Result};
use crate::image::{ImageBuffer, ImageRef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelGeometry {
    /// Number of real images.
    pub count: usize,
    pub image_height: usize,
    pub image_width: usize,
    pub pad_width: usize,
    /// Grid rows; one per chunk of `columns` images.
    pub rows: usize,
    /// Grid columns (`images_per_row`).
    pub columns: usize,
    /// `image_height + 2 * pad_width`
    pub cell_height: usize,
    /// `image_width + 2 * pad_width`
    pub cell_width: usize,
}

impl PanelGeometry {
    /// Compute the layout of `count` images of `(height, width)` pixels.
    ///
    /// Fails when the options are invalid or the panel size overflows `usize`.
    pub fn new<T: Copy>(
        count: usize,
        image_shape: (usize, usize),
        options: &PanelOptions<T>,
    ) -> Result<Self> {
        options.validate()?;
        let (image_height, image_width) = image_shape;
        let border = options
            .pad_width
            .checked_mul(2)
            .ok_or_else(|| LayoutError::invalid("pad_width", "padding overflows usize"))?;
        let geometry = Self {
            count,
            image_height,
            image_width,
            pad_width: options.pad_width,
            rows: chunk_count(count, options.images_per_row),
            columns: options.images_per_row,
            cell_height: padded("image_height", image_height, border)?,
            cell_width: padded("image_width", image_width, border)?,
        };
        geometry.checked_len()?;
        Ok(geometry)
    }

    /// `(height, width)` of the composed panel.
    pub fn panel_shape(&self) -> (usize, usize) {
        (self.rows * self.cell_height, self.columns * self.cell_width)
    }

    /// Number of elements of the composed panel, known before composing.
    pub fn panel_len(&self) -> usize {
        let (h, w) = self.panel_shape();
        h * w
    }

    /// Grid slots in the panel, real and filler.
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    pub fn filler_cells(&self) -> usize {
        self.cells() - self.count
    }

    /// Top-left `(x, y)` of the padded block of cell `i`.
    pub fn cell_origin(&self, i: usize) -> (usize, usize) {
        let (row, col) = (i / self.columns, i % self.columns);
        (col * self.cell_width, row * self.cell_height)
    }

    /// Top-left `(x, y)` of image `i` inside the panel.
    pub fn image_origin(&self, i: usize) -> (usize, usize) {
        let (x, y) = self.cell_origin(i);
        (x + self.pad_width, y + self.pad_width)
    }

    /// Borrow the padded block of cell `i` from a panel built with this geometry.
    pub fn cell_view<'a, T: Copy>(
        &self,
        panel: &'a ImageBuffer<T>,
        i: usize,
    ) -> ImageRef<'a, T> {
        assert!(i < self.cells(), "cell {i} out of range ({})", self.cells());
        let (x, y) = self.cell_origin(i);
        panel
            .as_view()
            .sub_view(x, y, self.cell_width, self.cell_height)
    }

    /// Panel element count, naming the input that makes it overflow.
    fn checked_len(&self) -> Result<usize> {
        let h = self.rows.checked_mul(self.cell_height).ok_or_else(|| {
            let name = if self.image_height >= self.cell_height - self.image_height {
                "image_height"
            } else {
                "pad_width"
            };
            LayoutError::invalid(
                name,
                format!(
                    "panel height ({} rows of {} pixels) overflows usize",
                    self.rows, self.cell_height
                ),
            )
        })?;
        let w = self.columns.checked_mul(self.cell_width).ok_or_else(|| {
            let name = if self.columns >= self.cell_width {
                "images_per_row"
            } else if self.image_width >= self.cell_width - self.image_width {
                "image_width"
            } else {
                "pad_width"
            };
            LayoutError::invalid(
                name,
                format!(
                    "panel width ({} columns of {} pixels) overflows usize",
                    self.columns, self.cell_width
                ),
            )
        })?;
        h.checked_mul(w).ok_or_else(|| {
            LayoutError::invalid(
                "images",
                format!("panel of {h}x{w} pixels overflows usize"),
            )
        })
    }
}

fn padded(name: &'static str, extent: usize, border: usize) -> Result<usize> {
    extent.checked_add(border).ok_or_else(|| {
        LayoutError::invalid(name, format!("{extent} plus a {border} pixel border overflows usize"))
    })
}
