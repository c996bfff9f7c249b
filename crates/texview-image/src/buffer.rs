use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::{
    error::ImageError,
    info::PixelInfo,
    native::NativeImage,
    pixel::PixelValue,
    texture::{ElementType, InternalFormat, PixelFormat, TextureTarget},
};

/// Contains the pixel data of an [`Image`](crate::Image).
///
/// Buffers are read-only once constructed and shared between images through an [`Arc`].
pub trait ImageBuffer: fmt::Debug + Send + Sync {
    /// Uploads this image data to the given texture.
    ///
    /// Errors reported by the texture are returned unchanged.
    fn upload_to_texture(&self, texture: &mut dyn TextureTarget) -> Result<(), ImageError>;

    /// Converts this image data to a bitmap the GUI toolkit can display.
    fn to_native_image(&self) -> NativeImage;

    /// The [`PixelValue`] at the given pixel location.
    ///
    /// Coordinates outside of the buffer yield [`PixelValue::Null`].
    fn pixel_at(&self, x: i32, y: i32) -> PixelValue;

    /// The [`PixelInfo`] for this buffer.
    fn info(&self) -> PixelInfo;
}

/// The buffer of an image without data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyBuffer;

impl ImageBuffer for EmptyBuffer {
    fn upload_to_texture(&self, texture: &mut dyn TextureTarget) -> Result<(), ImageError> {
        log::debug!("clearing texture with the empty buffer");
        texture.load_data(
            0,
            0,
            InternalFormat::Rgb,
            PixelFormat::Rgb,
            ElementType::UnsignedByte,
            None,
        )
    }

    fn to_native_image(&self) -> NativeImage {
        NativeImage::empty().clone()
    }

    fn pixel_at(&self, _x: i32, _y: i32) -> PixelValue {
        PixelValue::NULL
    }

    fn info(&self) -> PixelInfo {
        PixelInfo::NULL
    }
}

static EMPTY_BUFFER: LazyLock<Arc<dyn ImageBuffer>> = LazyLock::new(|| Arc::new(EmptyBuffer));

/// The shared empty buffer.
pub fn empty_buffer() -> Arc<dyn ImageBuffer> {
    Arc::clone(&EMPTY_BUFFER)
}

/// Whether `buffer` is the shared empty buffer.
pub fn is_empty_buffer(buffer: &Arc<dyn ImageBuffer>) -> bool {
    Arc::ptr_eq(buffer, &EMPTY_BUFFER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_shared() {
        let a = empty_buffer();
        let b = empty_buffer();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(is_empty_buffer(&a));

        let other: Arc<dyn ImageBuffer> = Arc::new(EmptyBuffer);
        assert!(!is_empty_buffer(&other));
    }

    #[test]
    fn empty_buffer_values() {
        let buffer = EmptyBuffer;
        assert_eq!(buffer.pixel_at(0, 0), PixelValue::NULL);
        assert_eq!(buffer.pixel_at(-5, 1 << 20), PixelValue::NULL);
        assert_eq!(buffer.info(), PixelInfo::NULL);
        assert_eq!(&buffer.to_native_image(), NativeImage::empty());
    }
}
