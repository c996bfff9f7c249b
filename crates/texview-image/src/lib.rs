#![deny(missing_docs)]
//! Image types for displaying captured textures and framebuffers.
//!
//! An [`Image`] pairs its dimensions with a shared [`ImageBuffer`]. A buffer can be uploaded
//! to a [`TextureTarget`], converted to a [`NativeImage`] for the GUI toolkit, queried for
//! the [`PixelValue`] at a location, and summarized by a [`PixelInfo`] for tone mapping.
//!
//! Missing data is never represented by `Option`: [`Image::empty`], [`EmptyBuffer`],
//! [`PixelValue::Null`] and [`PixelInfo::NULL`] stand in for it.

/// buffers backed by in-memory sample arrays.
pub mod array;

/// the image buffer trait and the empty buffer.
pub mod buffer;

/// Error types for the image module.
pub mod error;

/// image representation.
pub mod image;

/// statistics over all the pixels of a buffer.
pub mod info;

/// bitmaps for the GUI toolkit.
pub mod native;

/// per-pixel values.
pub mod pixel;

/// image dimensions.
pub mod size;

/// texture upload abstraction.
pub mod texture;

pub use crate::array::{
    ArrayImageBuffer, BufferFormat, Depth32F, DepthBuffer, Luminance8, Luminance8Buffer,
    LuminanceF32, LuminanceF32Buffer, Rgba8, Rgba8Buffer, RgbaF32, RgbaF32Buffer, Sample,
};
pub use crate::buffer::{EmptyBuffer, ImageBuffer};
pub use crate::error::ImageError;
pub use crate::image::Image;
pub use crate::info::PixelInfo;
pub use crate::native::{NativeImage, Palette, Rgb};
pub use crate::pixel::PixelValue;
pub use crate::size::ImageSize;
pub use crate::texture::{ElementType, InternalFormat, PixelFormat, Swizzle, TextureTarget};
