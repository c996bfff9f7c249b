use crate::error::ImageError;

/// Sized internal format of the texture storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum InternalFormat {
    /// Unsized RGB
    Rgb = 0x1907,
    /// 8-bit normalized RGBA
    Rgba8 = 0x8058,
    /// 32-bit float RGBA
    Rgba32F = 0x8814,
    /// 8-bit normalized red
    R8 = 0x8229,
    /// 32-bit float red
    R32F = 0x822E,
}

/// Channel layout of the uploaded data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// Red only
    Red = 0x1903,
    /// Red, green, blue
    Rgb = 0x1907,
    /// Red, green, blue, alpha
    Rgba = 0x1908,
}

/// Element type of the uploaded data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ElementType {
    /// `u8` per channel
    UnsignedByte = 0x1401,
    /// `f32` per channel
    Float = 0x1406,
}

/// Source of one output channel when the texture is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Swizzle {
    /// Red channel
    Red = 0x1903,
    /// Green channel
    Green = 0x1904,
    /// Blue channel
    Blue = 0x1905,
    /// Alpha channel
    Alpha = 0x1906,
    /// Constant zero
    Zero = 0,
    /// Constant one
    One = 1,
}

macro_rules! impl_gl_enum {
    ($($name:ident),*) => {
        $(
            impl $name {
                /// The OpenGL enum value.
                pub fn gl_enum(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_gl_enum!(InternalFormat, PixelFormat, ElementType, Swizzle);

/// Swizzle that displays a single red channel as opaque gray.
pub const GRAY_SWIZZLE: [Swizzle; 4] = [Swizzle::Red, Swizzle::Red, Swizzle::Red, Swizzle::One];

/// A GPU texture that pixel data can be uploaded into.
///
/// Implementations run on whatever thread owns the GPU context.
pub trait TextureTarget {
    /// Replace the contents of the texture.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the uploaded data in pixels.
    /// * `height` - The height of the uploaded data in pixels.
    /// * `internal_format` - The storage format of the texture.
    /// * `format` - The channel layout of `data`.
    /// * `element_type` - The element type of `data`.
    /// * `data` - The tightly packed pixel rows, or `None` to only allocate storage.
    fn load_data(
        &mut self,
        width: usize,
        height: usize,
        internal_format: InternalFormat,
        format: PixelFormat,
        element_type: ElementType,
        data: Option<&[u8]>,
    ) -> Result<(), ImageError>;

    /// Set the channel swizzle used when sampling the texture.
    fn set_swizzle(&mut self, _swizzle: [Swizzle; 4]) -> Result<(), ImageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_enum_values() {
        assert_eq!(InternalFormat::Rgb.gl_enum(), 0x1907);
        assert_eq!(InternalFormat::Rgba32F.gl_enum(), 0x8814);
        assert_eq!(PixelFormat::Rgb.gl_enum(), InternalFormat::Rgb.gl_enum());
        assert_eq!(ElementType::UnsignedByte.gl_enum(), 0x1401);
        assert_eq!(Swizzle::One.gl_enum(), 1);
    }
}
