use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Layout parameters for a panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOptions<T> {
    /// Border thickness added on all four sides of every image.
    pub pad_width: usize,
    /// Value of the border cells and of the filler blocks.
    pub background_fill: T,
    /// Number of image columns per panel row (>= 1).
    pub images_per_row: usize,
}

impl<T: Copy> PanelOptions<T> {
    /// Unpadded layout with `images_per_row` columns.
    pub fn new(images_per_row: usize, background_fill: T) -> Self {
        Self {
            pad_width: 0,
            background_fill,
            images_per_row,
        }
    }

    pub fn with_pad_width(mut self, pad_width: usize) -> Self {
        self.pad_width = pad_width;
        self
    }

    pub fn with_background_fill(mut self, background_fill: T) -> Self {
        self.background_fill = background_fill;
        self
    }

    pub fn with_images_per_row(mut self, images_per_row: usize) -> Self {
        self.images_per_row = images_per_row;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.images_per_row == 0 {
            return Err(LayoutError::invalid(
                "images_per_row",
                "images_per_row should be a positive integer",
            ));
        }
        Ok(())
    }
}
