#![doc = include_str!("../README.md")]

pub mod chunk;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod panel;

// --- High-level re-exports -------------------------------------------------

pub use crate::chunk::{chunkify, Chunks};
pub use crate::error::{LayoutError, Result};
pub use crate::image::{ImageBuffer, ImageStack};
pub use crate::panel::{make_panel_image, PanelComposer, PanelGeometry, PanelOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use panel_layout::prelude::*;
///
/// let images = ImageStack::from_shape_vec(&[3, 2, 2], (0u8..12).collect()).unwrap();
/// let panel = make_panel_image(&images, 1, 255, 2).unwrap();
/// assert_eq!(panel.shape(), (8, 8));
/// ```
pub mod prelude {
    pub use crate::image::{ImageBuffer, ImageStack, ImageView, ImageViewMut};
    pub use crate::{chunkify, make_panel_image, PanelComposer, PanelOptions};
}
