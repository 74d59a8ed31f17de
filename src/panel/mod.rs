//! Panel composition: tile a stack of images into one padded 2D buffer.
//!
//! Images are grouped `images_per_row` at a time with the chunker; each group
//! becomes one band of the panel, top to bottom. Every image is surrounded by
//! a constant border of the background value, and a short final band is
//! completed with blocks of the background value after its real images.
mod composer;
mod geometry;
mod options;
mod pad;

pub use composer::{make_panel_image, PanelComposer};
pub use geometry::PanelGeometry;
pub use options::PanelOptions;
pub use pad::pad_constant;
