use std::sync::LazyLock;

/// Scanlines of a native image are padded to a multiple of this many bytes.
pub const SCANLINE_PAD: usize = 4;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Rgb {
    /// Create a new color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// How pixel bits of a [`NativeImage`] map to colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Pixel bits index into a color table.
    Indexed(Vec<Rgb>),
    /// Pixel bits hold the color directly, extracted with the given masks.
    Direct {
        /// Mask of the red bits
        red_mask: u32,
        /// Mask of the green bits
        green_mask: u32,
        /// Mask of the blue bits
        blue_mask: u32,
    },
}

impl Palette {
    /// 24-bit big-endian RGB.
    pub const fn rgb24() -> Self {
        Palette::Direct {
            red_mask: 0xff0000,
            green_mask: 0x00ff00,
            blue_mask: 0x0000ff,
        }
    }
}

/// Bitmap in the layout expected by the host GUI toolkit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeImage {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Bits per pixel
    pub depth: u8,
    /// Color interpretation of the pixel bits
    pub palette: Palette,
    /// Bytes per scanline, including padding
    pub bytes_per_line: usize,
    /// Pixel bits, top row first
    pub data: Vec<u8>,
    /// Optional alpha plane, one byte per pixel
    pub alpha: Option<Vec<u8>>,
}

static EMPTY_NATIVE_IMAGE: LazyLock<NativeImage> = LazyLock::new(|| {
    let bytes_per_line = bytes_per_line(1, 1);
    NativeImage {
        width: 1,
        height: 1,
        depth: 1,
        palette: Palette::Indexed(vec![Rgb::new(0, 0, 0)]),
        bytes_per_line,
        data: vec![0; bytes_per_line],
        alpha: None,
    }
});

/// Number of bytes in a padded scanline of `width` pixels at `depth` bits per pixel.
pub fn bytes_per_line(width: usize, depth: u8) -> usize {
    let unpadded = (width * usize::from(depth)).div_ceil(8);
    unpadded.div_ceil(SCANLINE_PAD) * SCANLINE_PAD
}

/// Byte length of a padded `width` x `height` image at `depth` bits per pixel, or `None`
/// on overflow.
pub fn checked_image_len(width: usize, height: usize, depth: u8) -> Option<usize> {
    let bits = width.checked_mul(usize::from(depth))?;
    let stride = bits.div_ceil(8).checked_next_multiple_of(SCANLINE_PAD)?;
    stride.checked_mul(height)
}

impl NativeImage {
    /// The shared 1x1 black image shown when there is no data.
    pub fn empty() -> &'static NativeImage {
        &EMPTY_NATIVE_IMAGE
    }

    /// Create a 24-bit direct-palette image from rows of RGB triples.
    ///
    /// `rgb` must hold `width * height * 3` bytes, `alpha` one byte per pixel.
    pub(crate) fn from_rgb24(
        width: usize,
        height: usize,
        rgb: &[u8],
        alpha: Option<Vec<u8>>,
    ) -> Self {
        let stride = bytes_per_line(width, 24);
        let mut data = vec![0u8; stride * height];
        if width > 0 {
            for (dst, src) in data.chunks_exact_mut(stride).zip(rgb.chunks_exact(width * 3)) {
                dst[..width * 3].copy_from_slice(src);
            }
        }

        Self {
            width,
            height,
            depth: 24,
            palette: Palette::rgb24(),
            bytes_per_line: stride,
            data,
            alpha,
        }
    }

    /// Color of the pixel at `(x, y)`, or `None` when outside the image.
    pub fn pixel_rgb(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let row = self.data.get(y * self.bytes_per_line..(y + 1) * self.bytes_per_line)?;
        match &self.palette {
            Palette::Direct { .. } if self.depth == 24 => {
                let px = row.get(x * 3..x * 3 + 3)?;
                Some(Rgb::new(px[0], px[1], px[2]))
            }
            Palette::Indexed(colors) if matches!(self.depth, 1 | 2 | 4 | 8) => {
                let depth = usize::from(self.depth);
                let bit = x * depth;
                let byte = *row.get(bit / 8)?;
                let shift = 8 - depth - bit % 8;
                let mask = ((1u16 << depth) - 1) as u8;
                let index = (byte >> shift) & mask;
                colors.get(usize::from(index)).copied()
            }
            _ => None,
        }
    }

    /// Alpha of the pixel at `(x, y)`. Images without an alpha plane are opaque.
    pub fn pixel_alpha(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        match &self.alpha {
            Some(alpha) => alpha.get(y * self.width + x).copied(),
            None => Some(255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanline_padding() {
        assert_eq!(bytes_per_line(1, 1), 4);
        assert_eq!(bytes_per_line(1, 24), 4);
        assert_eq!(bytes_per_line(2, 24), 8);
        assert_eq!(bytes_per_line(4, 24), 12);
        assert_eq!(bytes_per_line(33, 1), 8);
        assert_eq!(bytes_per_line(0, 24), 0);
    }

    #[test]
    fn checked_image_len_overflow() {
        assert_eq!(checked_image_len(2, 3, 24), Some(24));
        assert_eq!(checked_image_len(usize::MAX / 2, 1, 24), None);
        assert_eq!(checked_image_len(usize::MAX / 24, 24, 24), None);
    }

    #[test]
    fn empty_native_image() {
        let image = NativeImage::empty();
        assert_eq!((image.width, image.height, image.depth), (1, 1, 1));
        assert_eq!(image.palette, Palette::Indexed(vec![Rgb::new(0, 0, 0)]));
        assert_eq!(image.pixel_rgb(0, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(image.pixel_rgb(1, 0), None);
        assert_eq!(image.pixel_alpha(0, 0), Some(255));
        assert!(std::ptr::eq(image, NativeImage::empty()));
    }

    #[test]
    fn rgb24_rows_are_padded() {
        let rgb = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let image = NativeImage::from_rgb24(2, 2, &rgb, None);
        assert_eq!(image.bytes_per_line, 8);
        assert_eq!(image.data.len(), 16);
        assert_eq!(&image.data[..8], &[1, 2, 3, 4, 5, 6, 0, 0]);
        assert_eq!(image.pixel_rgb(1, 1), Some(Rgb::new(10, 11, 12)));
        assert_eq!(image.pixel_rgb(2, 1), None);
    }
}
