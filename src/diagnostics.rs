//! Serializable summary of one panel composition.
use crate::panel::PanelGeometry;
use serde::{Deserialize, Serialize};

/// Shape of the composed batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub count: usize,
    pub height: usize,
    pub width: usize,
}

/// Grid and pixel dimensions of the panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryReport {
    pub rows: usize,
    pub columns: usize,
    pub cell_height: usize,
    pub cell_width: usize,
    pub panel_height: usize,
    pub panel_width: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelReport {
    pub input: InputDescriptor,
    pub geometry: GeometryReport,
    pub filler_cells: usize,
    pub elapsed_ms: f64,
}

impl PanelReport {
    pub fn new(geometry: &PanelGeometry, elapsed_ms: f64) -> Self {
        let (panel_height, panel_width) = geometry.panel_shape();
        Self {
            input: InputDescriptor {
                count: geometry.count,
                height: geometry.image_height,
                width: geometry.image_width,
            },
            geometry: GeometryReport {
                rows: geometry.rows,
                columns: geometry.columns,
                cell_height: geometry.cell_height,
                cell_width: geometry.cell_width,
                panel_height,
                panel_width,
            },
            filler_cells: geometry.filler_cells(),
            elapsed_ms,
        }
    }
}
