use crate::error::{LayoutError, Result};
use crate::image::{ImageBuffer, ImageView};

/// Surround `image` with a constant border `pad_width` pixels thick.
///
/// The result is `(h + 2p) × (w + 2p)`; its center block equals `image` and
/// every border pixel equals `fill`. Fails with a shape error when the padded
/// size does not fit in `usize`.
pub fn pad_constant<V: ImageView>(
    image: &V,
    pad_width: usize,
    fill: V::Pixel,
) -> Result<ImageBuffer<V::Pixel>> {
    let (h, w) = image.shape();
    let overflow = || LayoutError::overflow(&[h, w]);
    let border = pad_width.checked_mul(2).ok_or_else(overflow)?;
    let padded_w = w.checked_add(border).ok_or_else(overflow)?;
    let padded_h = h.checked_add(border).ok_or_else(overflow)?;
    padded_w.checked_mul(padded_h).ok_or_else(overflow)?;

    let mut out = ImageBuffer::filled(padded_w, padded_h, fill);
    out.copy_from(image, pad_width, pad_width);
    Ok(out)
}
