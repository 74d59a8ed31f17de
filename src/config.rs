//! JSON configuration for panel and chunk layouts.
//!
//! Counts arrive as signed integers so that negative values coming from a
//! config file are reported as invalid arguments instead of parse errors.
use crate::error::{LayoutError, Result};
use crate::panel::PanelOptions;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub pad_width: i64,
    pub images_per_row: i64,
    pub background_fill: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            pad_width: 1,
            images_per_row: 8,
            background_fill: 0.0,
        }
    }
}

impl PanelConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LayoutError::Config(e.to_string()))
    }

    /// Validate and convert into options for pixel type `T`.
    pub fn to_options<T: FromFill>(&self) -> Result<PanelOptions<T>> {
        if self.pad_width < 0 {
            return Err(LayoutError::invalid(
                "pad_width",
                format!("must be non-negative, got {}", self.pad_width),
            ));
        }
        if self.images_per_row <= 0 {
            return Err(LayoutError::invalid(
                "images_per_row",
                format!("must be positive, got {}", self.images_per_row),
            ));
        }
        let pad_width = to_usize("pad_width", self.pad_width)?;
        let images_per_row = to_usize("images_per_row", self.images_per_row)?;
        let fill = T::from_fill(self.background_fill)?;
        Ok(PanelOptions::new(images_per_row, fill).with_pad_width(pad_width))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChunkConfig {
    pub chunk_size: i64,
}

impl ChunkConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LayoutError::Config(e.to_string()))
    }

    pub fn to_chunk_size(&self) -> Result<usize> {
        if self.chunk_size <= 0 {
            return Err(LayoutError::invalid(
                "chunk_size",
                format!("chunk_size should be a positive integer, got {}", self.chunk_size),
            ));
        }
        to_usize("chunk_size", self.chunk_size)
    }
}

fn to_usize(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| LayoutError::invalid(name, "does not fit in usize"))
}

/// Conversion of the configured background value into a pixel type.
pub trait FromFill: Copy {
    fn from_fill(value: f64) -> Result<Self>;
}

macro_rules! impl_from_fill_int {
    ($($t:ty),*) => {$(
        impl FromFill for $t {
            fn from_fill(value: f64) -> Result<Self> {
                // `MAX as f64` rounds up to a power of two for the wide types,
                // so the upper bound is the exclusive `MAX + 1`.
                let upper = <$t>::MAX as f64 + 1.0;
                if value.fract() != 0.0 || value < <$t>::MIN as f64 || value >= upper {
                    return Err(LayoutError::invalid(
                        "background_fill",
                        format!("{value} is not representable as {}", stringify!($t)),
                    ));
                }
                Ok(value as $t)
            }
        }
    )*};
}

impl_from_fill_int!(u8, u16, u32, i8, i16, i32, i64);

impl FromFill for f32 {
    fn from_fill(value: f64) -> Result<Self> {
        if value.is_finite() && value.abs() > f32::MAX as f64 {
            return Err(LayoutError::invalid(
                "background_fill",
                format!("{value} is out of range for f32"),
            ));
        }
        Ok(value as f32)
    }
}

impl FromFill for f64 {
    fn from_fill(value: f64) -> Result<Self> {
        Ok(value)
    }
}
