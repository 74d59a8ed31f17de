use super::{PanelGeometry, PanelOptions};
use crate::diagnostics::PanelReport;
use crate::error::Result;
use crate::image::{ImageBuffer, ImageStack};
use log::{debug, trace};
use std::time::Instant;

/// Tiles image stacks into padded panels.
#[derive(Clone, Debug)]
pub struct PanelComposer<T> {
    options: PanelOptions<T>,
}

impl<T: Copy> PanelComposer<T> {
    /// Fails with `InvalidArgument` when `images_per_row == 0`.
    pub fn new(options: PanelOptions<T>) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &PanelOptions<T> {
        &self.options
    }

    /// Layout `images` would get, without composing anything.
    pub fn geometry(&self, images: &ImageStack<T>) -> Result<PanelGeometry> {
        PanelGeometry::new(images.len(), images.image_shape(), &self.options)
    }

    pub fn compose(&self, images: &ImageStack<T>) -> Result<ImageBuffer<T>> {
        self.compose_with_report(images).map(|(panel, _)| panel)
    }

    /// Compose `images` row by row and report what was laid out.
    ///
    /// The panel starts out filled with the background value, so padding
    /// borders and trailing filler blocks only need the image pixels copied
    /// over them.
    pub fn compose_with_report(
        &self,
        images: &ImageStack<T>,
    ) -> Result<(ImageBuffer<T>, PanelReport)> {
        let start = Instant::now();
        let geometry = self.geometry(images)?;
        let (panel_h, panel_w) = geometry.panel_shape();
        debug!(
            "PanelComposer::compose count={} image={}x{} grid={}x{} panel={}x{}",
            geometry.count,
            geometry.image_width,
            geometry.image_height,
            geometry.columns,
            geometry.rows,
            panel_w,
            panel_h
        );

        let mut panel = ImageBuffer::filled(panel_w, panel_h, self.options.background_fill);
        let mut index = 0;
        for (row, group) in images.chunks(self.options.images_per_row)?.enumerate() {
            for image in group.iter() {
                let (x, y) = geometry.image_origin(index);
                panel.copy_from(&image, x, y);
                index += 1;
            }
            trace!(
                "row {row}: {} images, {} filler blocks",
                group.len(),
                geometry.columns - group.len()
            );
        }
        debug_assert_eq!(index, geometry.count);

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        let report = PanelReport::new(&geometry, elapsed_ms);
        debug!(
            "PanelComposer::compose done filler_cells={} elapsed_ms={:.3}",
            report.filler_cells, elapsed_ms
        );
        Ok((panel, report))
    }
}

/// Tile `images` into one panel with `images_per_row` columns.
///
/// Each image gets a `pad_width` border of `background_fill`; a short last row
/// is completed with blocks of `background_fill`.
pub fn make_panel_image<T: Copy>(
    images: &ImageStack<T>,
    pad_width: usize,
    background_fill: T,
    images_per_row: usize,
) -> Result<ImageBuffer<T>> {
    let options = PanelOptions::new(images_per_row, background_fill).with_pad_width(pad_width);
    PanelComposer::new(options)?.compose(images)
}
