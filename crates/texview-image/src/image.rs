use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::{
    array::{
        ArrayImageBuffer, BufferFormat, Depth32F, Luminance8, LuminanceF32, Rgba8, RgbaF32,
    },
    buffer::{self, ImageBuffer},
    error::ImageError,
    size::ImageSize,
};

/// Image pixel data of a texture, framebuffer, etc.
///
/// An image pairs its dimensions with a shared [`ImageBuffer`]. Cloning an image is cheap
/// and shares the buffer.
///
/// # Examples
///
/// ```
/// use texview_image::{Image, ImageSize, PixelValue};
///
/// let image = Image::from_luminance8(ImageSize { width: 2, height: 1 }, vec![0, 255]).unwrap();
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.data().pixel_at(1, 0), PixelValue::Luminance8(255));
///
/// let empty = Image::empty();
/// assert_eq!((empty.width(), empty.height()), (1, 1));
/// assert_eq!(empty.data().pixel_at(7, -3), PixelValue::Null);
/// ```
#[derive(Clone)]
pub struct Image {
    size: ImageSize,
    data: Arc<dyn ImageBuffer>,
}

static EMPTY_IMAGE: LazyLock<Image> = LazyLock::new(|| Image {
    size: ImageSize {
        width: 1,
        height: 1,
    },
    data: buffer::empty_buffer(),
});

impl Image {
    /// Create a new image from a buffer.
    ///
    /// `size` is taken as given and is not checked against the buffer; it is the size the
    /// viewer lays the image out with. Use the typed constructors such as
    /// [`Image::from_rgba8`] to get an image whose size matches its samples.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data, possibly shared with other images.
    pub fn new(size: ImageSize, data: Arc<dyn ImageBuffer>) -> Self {
        Self { size, data }
    }

    /// The image shown when there is no data: 1x1 with the empty buffer.
    pub fn empty() -> Self {
        EMPTY_IMAGE.clone()
    }

    /// Whether this image holds the empty buffer.
    pub fn is_empty(&self) -> bool {
        buffer::is_empty_buffer(&self.data)
    }

    /// Create an image over an in-memory buffer of the given format.
    ///
    /// # Errors
    ///
    /// If the image has no pixels, is too large to address, or the data length does not
    /// match the image size, an error is returned.
    pub fn from_array<F: BufferFormat>(
        size: ImageSize,
        data: Vec<F::Sample>,
    ) -> Result<Self, ImageError> {
        let buffer = ArrayImageBuffer::<F>::new(size, data)?;
        Ok(Self::new(size, Arc::new(buffer)))
    }

    /// Create an image from interleaved 8-bit RGBA samples.
    pub fn from_rgba8(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        Self::from_array::<Rgba8>(size, data)
    }

    /// Create an image from interleaved float RGBA samples.
    pub fn from_rgba_f32(size: ImageSize, data: Vec<f32>) -> Result<Self, ImageError> {
        Self::from_array::<RgbaF32>(size, data)
    }

    /// Create an image from 8-bit grayscale samples.
    pub fn from_luminance8(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        Self::from_array::<Luminance8>(size, data)
    }

    /// Create an image from float grayscale samples.
    pub fn from_luminance_f32(size: ImageSize, data: Vec<f32>) -> Result<Self, ImageError> {
        Self::from_array::<LuminanceF32>(size, data)
    }

    /// Create an image from float depth samples.
    pub fn from_depth(size: ImageSize, data: Vec<f32>) -> Result<Self, ImageError> {
        Self::from_array::<Depth32F>(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the pixel data of the image.
    pub fn data(&self) -> &Arc<dyn ImageBuffer> {
        &self.data
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("size", &self.size)
            .field("data", &self.data)
            .finish()
    }
}
