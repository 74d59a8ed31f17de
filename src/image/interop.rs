//! Conversions between [`ImageBuffer`] and in-memory `image` crate buffers.
//!
//! Panels are usually handed to code that already speaks `image`'s types
//! (plotting, encoders owned by the caller). Only the pixel buffer moves
//! across; no encoding or color conversion happens here.
use super::ImageBuffer;
use crate::error::{LayoutError, Result};
use ::image::{Luma, Primitive};

/// Single-channel `image` buffer with pixel type `P`.
pub type LumaImage<P> = ::image::ImageBuffer<Luma<P>, Vec<P>>;

impl<P: Primitive> ImageBuffer<P> {
    /// Move the pixels into an `image` crate buffer.
    ///
    /// Fails with `InvalidArgument` when a dimension does not fit in `u32`.
    pub fn into_luma(self) -> Result<LumaImage<P>> {
        let w = u32::try_from(self.w)
            .map_err(|_| LayoutError::invalid("width", "does not fit in u32"))?;
        let h = u32::try_from(self.h)
            .map_err(|_| LayoutError::invalid("height", "does not fit in u32"))?;
        let found = self.data.len();
        let expected = self.w.checked_mul(self.h).unwrap_or(usize::MAX);
        if found != expected {
            return Err(LayoutError::DataLength { expected, found });
        }
        LumaImage::from_raw(w, h, self.data).ok_or(LayoutError::DataLength { expected, found })
    }

    /// Copy the pixels of an `image` crate buffer.
    pub fn from_luma(image: &LumaImage<P>) -> Self {
        let (w, h) = image.dimensions();
        Self {
            w: w as usize,
            h: h as usize,
            stride: w as usize,
            data: image.as_raw().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn pixels_survive_the_trip() {
        let buf = ImageBuffer::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
        let luma = buf.clone().into_luma().unwrap();
        assert_eq!(luma.dimensions(), (3, 2));
        assert_eq!(luma.get_pixel(2, 1).0, [6]);
        let back = ImageBuffer::from_luma(&luma);
        assert_eq!(back, buf);
        assert_eq!(back.shape(), (2, 3));
    }

    #[test]
    fn float_pixels_are_supported() {
        let buf = ImageBuffer::filled(2, 2, 0.25f32);
        let luma = buf.into_luma().unwrap();
        assert_eq!(luma.get_pixel(1, 1).0, [0.25]);
        let back = ImageBuffer::from_luma(&luma);
        assert_eq!(back.data, vec![0.25; 4]);
    }

    #[test]
    fn wide_pixels_resolve_without_annotations() {
        let buf = ImageBuffer::from_vec(2, 1, vec![1u16, 65_535]).unwrap();
        let luma = buf.clone().into_luma().unwrap();
        assert_eq!(ImageBuffer::from_luma(&luma), buf);
        let signed = ImageBuffer::filled(1, 1, -3i32).into_luma().unwrap();
        assert_eq!(ImageBuffer::from_luma(&signed).data, vec![-3]);
    }
}
