use std::fmt;

/// Luminance below which a pixel is considered dark.
pub const DARK_LUMINANCE_THRESHOLD: f32 = 0.5;

/// Rec. 601 luma of a normalized RGB triple.
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Information about a specific pixel in an image.
///
/// [`PixelValue::Null`] is returned wherever there is no pixel data, e.g. by the
/// empty buffer or for coordinates outside an image.
///
/// # Examples
///
/// ```
/// use texview_image::PixelValue;
///
/// let red = PixelValue::Rgba8([255, 0, 0, 255]);
/// assert!(red.is_dark());
/// assert_eq!(red.to_string(), "RGBA: (255, 0, 0, 255)");
///
/// assert!(!PixelValue::Null.is_dark());
/// assert_eq!(PixelValue::Null.to_string(), "[null]");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelValue {
    /// No pixel data.
    #[default]
    Null,
    /// 8-bit unsigned normalized RGBA.
    Rgba8([u8; 4]),
    /// 32-bit float RGBA.
    RgbaF32([f32; 4]),
    /// 8-bit unsigned normalized single channel.
    Luminance8(u8),
    /// 32-bit float single channel.
    LuminanceF32(f32),
    /// Depth sample.
    Depth(f32),
}

impl PixelValue {
    /// The null pixel.
    pub const NULL: PixelValue = PixelValue::Null;

    /// Whether this pixel is considered to be a dark color, based on its luminance.
    ///
    /// The null pixel is never dark, and neither is a pixel whose luminance is NaN.
    pub fn is_dark(&self) -> bool {
        match self.luminance() {
            Some(l) => l < DARK_LUMINANCE_THRESHOLD,
            None => false,
        }
    }

    /// Normalized luminance of this pixel, `None` for the null pixel.
    pub fn luminance(&self) -> Option<f32> {
        match *self {
            PixelValue::Null => None,
            PixelValue::Rgba8([r, g, b, _]) => Some(luminance(
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            )),
            PixelValue::RgbaF32([r, g, b, _]) => Some(luminance(r, g, b)),
            PixelValue::Luminance8(l) => Some(f32::from(l) / 255.0),
            PixelValue::LuminanceF32(l) | PixelValue::Depth(l) => Some(l),
        }
    }

    /// Whether this is the null pixel.
    pub fn is_null(&self) -> bool {
        matches!(self, PixelValue::Null)
    }
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelValue::Null => write!(f, "[null]"),
            PixelValue::Rgba8([r, g, b, a]) => write!(f, "RGBA: ({r}, {g}, {b}, {a})"),
            PixelValue::RgbaF32([r, g, b, a]) => write!(f, "RGBA: ({r}, {g}, {b}, {a})"),
            PixelValue::Luminance8(l) => write!(f, "L: {l}"),
            PixelValue::LuminanceF32(l) => write!(f, "L: {l}"),
            PixelValue::Depth(d) => write!(f, "Depth: {d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_pixel() {
        assert!(!PixelValue::NULL.is_dark());
        assert!(PixelValue::NULL.is_null());
        assert_eq!(PixelValue::NULL.to_string(), "[null]");
        assert_eq!(PixelValue::default(), PixelValue::NULL);
        assert_eq!(PixelValue::NULL.luminance(), None);
    }

    #[test]
    fn rgba8_darkness() {
        assert!(PixelValue::Rgba8([0, 0, 0, 255]).is_dark());
        assert!(!PixelValue::Rgba8([255, 255, 255, 255]).is_dark());
        // green dominates the luma
        assert!(!PixelValue::Rgba8([0, 255, 0, 0]).is_dark());
        assert!(PixelValue::Rgba8([0, 0, 255, 255]).is_dark());
    }

    #[test]
    fn float_darkness() {
        assert!(PixelValue::RgbaF32([0.1, 0.1, 0.1, 1.0]).is_dark());
        assert!(!PixelValue::RgbaF32([4.0, 4.0, 4.0, 1.0]).is_dark());
        assert!(!PixelValue::LuminanceF32(f32::NAN).is_dark());
        assert!(PixelValue::Depth(0.25).is_dark());
        assert!(!PixelValue::Depth(1.0).is_dark());
        assert!(PixelValue::Luminance8(127).is_dark());
        assert!(!PixelValue::Luminance8(128).is_dark());
    }

    #[test]
    fn display() {
        assert_eq!(
            PixelValue::RgbaF32([0.5, 1.0, -2.0, 1.0]).to_string(),
            "RGBA: (0.5, 1, -2, 1)"
        );
        assert_eq!(PixelValue::Luminance8(7).to_string(), "L: 7");
        assert_eq!(PixelValue::LuminanceF32(0.25).to_string(), "L: 0.25");
        assert_eq!(PixelValue::Depth(0.75).to_string(), "Depth: 0.75");
    }
}
