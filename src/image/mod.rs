//! Single-channel image containers.
//!
//! - `ImageBuffer<T>`: owned, row-major, `stride == width`.
//! - `ImageRef<'a, T>`: borrowed view with an explicit stride.
//! - `ImageStack<T>`: owned batch of equally-shaped images, the (N, H, W)
//!   input of the panel composer.
pub mod buffer;
pub mod interop;
pub mod stack;
pub mod traits;
pub mod view;

pub use self::buffer::ImageBuffer;
pub use self::interop::LumaImage;
pub use self::stack::{ImageStack, StackChunks, StackIter, StackView};
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
pub use self::view::ImageRef;
