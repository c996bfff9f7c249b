//! Buffers backed by a flat array of channel samples.
//!
//! Samples are stored row-major, top row first, with the channels of a pixel
//! interleaved. The storage layout of each buffer is described by a [`BufferFormat`].

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use num_traits::ToPrimitive;

use crate::{
    buffer::ImageBuffer,
    error::ImageError,
    info::PixelInfo,
    native::{self, NativeImage},
    pixel::PixelValue,
    size::ImageSize,
    texture::{ElementType, InternalFormat, PixelFormat, Swizzle, TextureTarget, GRAY_SWIZZLE},
};

/// Trait for the channel sample types a buffer can hold.
pub trait Sample: Copy + Default + fmt::Debug + ToPrimitive + Send + Sync + 'static {
    /// The texture element type of this sample.
    const ELEMENT_TYPE: ElementType;

    /// The samples as tightly packed native-endian bytes.
    fn as_bytes(samples: &[Self]) -> Cow<'_, [u8]>;

    /// The sample as a color byte, tone-mapped with `info` where needed.
    fn to_display(self, info: &PixelInfo) -> u8;

    /// The sample as an alpha byte.
    fn to_alpha(self) -> u8;
}

impl Sample for u8 {
    const ELEMENT_TYPE: ElementType = ElementType::UnsignedByte;

    fn as_bytes(samples: &[Self]) -> Cow<'_, [u8]> {
        Cow::Borrowed(samples)
    }

    fn to_display(self, _info: &PixelInfo) -> u8 {
        self
    }

    fn to_alpha(self) -> u8 {
        self
    }
}

fn unit_to_byte(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Sample for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::Float;

    fn as_bytes(samples: &[Self]) -> Cow<'_, [u8]> {
        Cow::Owned(samples.iter().flat_map(|s| s.to_ne_bytes()).collect())
    }

    fn to_display(self, info: &PixelInfo) -> u8 {
        unit_to_byte(info.normalize(self))
    }

    fn to_alpha(self) -> u8 {
        unit_to_byte(self)
    }
}

/// Describes how the samples of an [`ArrayImageBuffer`] are laid out and interpreted.
pub trait BufferFormat: Send + Sync + 'static {
    /// The channel sample type.
    type Sample: Sample;

    /// Human readable name of the format.
    const NAME: &'static str;

    /// Number of interleaved channels per pixel.
    const CHANNELS: usize;

    /// Whether samples are already normalized to `[0, 1]` and need no tone mapping.
    const NORMALIZED: bool;

    /// Texture storage format used on upload.
    const INTERNAL_FORMAT: InternalFormat;

    /// Channel layout used on upload.
    const PIXEL_FORMAT: PixelFormat;

    /// Swizzle applied to the texture after upload.
    const SWIZZLE: Option<[Swizzle; 4]> = None;

    /// The semantic value of one pixel's channels.
    fn pixel(samples: &[Self::Sample]) -> PixelValue;
}

macro_rules! define_buffer_format {
    (
        $name:ident, $sample:ty, $channels:expr, $normalized:expr,
        $internal:expr, $format:expr, $swizzle:expr, $pixel:expr, $doc:expr
    ) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl BufferFormat for $name {
            type Sample = $sample;
            const NAME: &'static str = stringify!($name);
            const CHANNELS: usize = $channels;
            const NORMALIZED: bool = $normalized;
            const INTERNAL_FORMAT: InternalFormat = $internal;
            const PIXEL_FORMAT: PixelFormat = $format;
            const SWIZZLE: Option<[Swizzle; 4]> = $swizzle;

            fn pixel(samples: &[$sample]) -> PixelValue {
                <[$sample; $channels]>::try_from(samples).map_or(PixelValue::NULL, $pixel)
            }
        }
    };
}

define_buffer_format!(
    Rgba8,
    u8,
    4,
    true,
    InternalFormat::Rgba8,
    PixelFormat::Rgba,
    None,
    PixelValue::Rgba8,
    "RGBA with 8-bit unsigned normalized channels"
);
define_buffer_format!(
    RgbaF32,
    f32,
    4,
    false,
    InternalFormat::Rgba32F,
    PixelFormat::Rgba,
    None,
    PixelValue::RgbaF32,
    "RGBA with 32-bit floating point channels"
);
define_buffer_format!(
    Luminance8,
    u8,
    1,
    true,
    InternalFormat::R8,
    PixelFormat::Red,
    Some(GRAY_SWIZZLE),
    |[l]: [u8; 1]| PixelValue::Luminance8(l),
    "Grayscale with an 8-bit unsigned normalized channel"
);
define_buffer_format!(
    LuminanceF32,
    f32,
    1,
    false,
    InternalFormat::R32F,
    PixelFormat::Red,
    Some(GRAY_SWIZZLE),
    |[l]: [f32; 1]| PixelValue::LuminanceF32(l),
    "Grayscale with a 32-bit floating point channel"
);
define_buffer_format!(
    Depth32F,
    f32,
    1,
    false,
    InternalFormat::R32F,
    PixelFormat::Red,
    Some(GRAY_SWIZZLE),
    |[d]: [f32; 1]| PixelValue::Depth(d),
    "Depth with a 32-bit floating point channel"
);

/// An [`ImageBuffer`] holding its samples in memory.
///
/// The [`PixelInfo`] is computed once on construction.
pub struct ArrayImageBuffer<F: BufferFormat> {
    size: ImageSize,
    data: Vec<F::Sample>,
    info: PixelInfo,
    _format: PhantomData<F>,
}

/// RGBA buffer with 8-bit channels.
pub type Rgba8Buffer = ArrayImageBuffer<Rgba8>;
/// RGBA buffer with float channels.
pub type RgbaF32Buffer = ArrayImageBuffer<RgbaF32>;
/// Grayscale buffer with 8-bit samples.
pub type Luminance8Buffer = ArrayImageBuffer<Luminance8>;
/// Grayscale buffer with float samples.
pub type LuminanceF32Buffer = ArrayImageBuffer<LuminanceF32>;
/// Depth buffer with float samples.
pub type DepthBuffer = ArrayImageBuffer<Depth32F>;

impl<F: BufferFormat> ArrayImageBuffer<F> {
    /// Create a new buffer from interleaved samples.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The samples, `size.width * size.height * F::CHANNELS` of them.
    ///
    /// # Errors
    ///
    /// If the image has no pixels, is too large to address, or the length of the data does
    /// not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use texview_image::{ImageBuffer, ImageSize, PixelValue, Rgba8Buffer};
    ///
    /// let buffer = Rgba8Buffer::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![0, 0, 0, 255, 255, 255, 255, 255],
    /// ).unwrap();
    ///
    /// assert_eq!(buffer.pixel_at(1, 0), PixelValue::Rgba8([255, 255, 255, 255]));
    /// assert_eq!(buffer.pixel_at(2, 0), PixelValue::Null);
    /// ```
    pub fn new(size: ImageSize, data: Vec<F::Sample>) -> Result<Self, ImageError> {
        let invalid_size = ImageError::InvalidImageSize(size.width, size.height);
        if size.width == 0 || size.height == 0 {
            return Err(invalid_size);
        }

        // the native bitmap must be addressable as well as the samples
        let expected = size
            .checked_num_samples(F::CHANNELS)
            .filter(|_| native::checked_image_len(size.width, size.height, 24).is_some())
            .ok_or(invalid_size)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        let info = if F::NORMALIZED {
            PixelInfo::NULL
        } else {
            PixelInfo::from_samples(data.iter().filter_map(|s| s.to_f32()))
        };
        log::trace!("{} buffer {size}: {info:?}", F::NAME);

        Ok(Self {
            size,
            data,
            info,
            _format: PhantomData,
        })
    }

    /// Get the size of the buffer in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the interleaved samples of the buffer.
    pub fn as_slice(&self) -> &[F::Sample] {
        &self.data
    }
}

impl<F: BufferFormat> fmt::Debug for ArrayImageBuffer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayImageBuffer")
            .field("format", &F::NAME)
            .field("size", &self.size)
            .field("info", &self.info)
            .finish()
    }
}

impl<F: BufferFormat> ImageBuffer for ArrayImageBuffer<F> {
    fn upload_to_texture(&self, texture: &mut dyn TextureTarget) -> Result<(), ImageError> {
        log::debug!(
            "uploading {} buffer {} as {:?}/{:?}/{:?}",
            F::NAME,
            self.size,
            F::INTERNAL_FORMAT,
            F::PIXEL_FORMAT,
            <F::Sample as Sample>::ELEMENT_TYPE
        );

        let bytes = <F::Sample as Sample>::as_bytes(&self.data);
        texture.load_data(
            self.size.width,
            self.size.height,
            F::INTERNAL_FORMAT,
            F::PIXEL_FORMAT,
            <F::Sample as Sample>::ELEMENT_TYPE,
            Some(&*bytes),
        )?;

        if let Some(swizzle) = F::SWIZZLE {
            texture.set_swizzle(swizzle)?;
        }

        Ok(())
    }

    fn to_native_image(&self) -> NativeImage {
        let num_pixels = self.size.num_pixels();
        let mut rgb = Vec::with_capacity(num_pixels * 3);
        let mut alpha = (F::CHANNELS == 4).then(|| Vec::with_capacity(num_pixels));

        for px in self.data.chunks_exact(F::CHANNELS) {
            match px {
                [l] => {
                    let v = l.to_display(&self.info);
                    rgb.extend_from_slice(&[v, v, v]);
                }
                [r, g, b, a] => {
                    rgb.extend_from_slice(&[
                        r.to_display(&self.info),
                        g.to_display(&self.info),
                        b.to_display(&self.info),
                    ]);
                    if let Some(alpha) = alpha.as_mut() {
                        alpha.push(a.to_alpha());
                    }
                }
                _ => rgb.extend_from_slice(&[0, 0, 0]),
            }
        }

        log::debug!("converted {} buffer {} to a native image", F::NAME, self.size);
        NativeImage::from_rgb24(self.size.width, self.size.height, &rgb, alpha)
    }

    fn pixel_at(&self, x: i32, y: i32) -> PixelValue {
        let Some(index) = self.size.index_of(x, y) else {
            return PixelValue::NULL;
        };
        index
            .checked_mul(F::CHANNELS)
            .and_then(|start| self.data.get(start..start.checked_add(F::CHANNELS)?))
            .map_or(PixelValue::NULL, F::pixel)
    }

    fn info(&self) -> PixelInfo {
        self.info
    }
}
