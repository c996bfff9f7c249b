/// Information about all the pixels in an image.
///
/// Holds the minimum and maximum sample value across all channels of a buffer and is
/// used for tone mapping. No ordering between `min` and `max` is enforced.
///
/// # Examples
///
/// ```
/// use texview_image::PixelInfo;
///
/// let info = PixelInfo::from_samples([0.5f32, 2.0, f32::NAN, -1.0]);
/// assert_eq!(info.min(), -1.0);
/// assert_eq!(info.max(), 2.0);
/// assert_eq!(info.normalize(0.5), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelInfo {
    min: f32,
    max: f32,
}

impl PixelInfo {
    /// The info of a buffer without data, a `[0, 1]` range.
    pub const NULL: PixelInfo = PixelInfo { min: 0.0, max: 1.0 };

    /// Create a new info from explicit bounds.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Compute the bounds of the given samples.
    ///
    /// Non-finite samples are skipped. If no finite sample remains, [`PixelInfo::NULL`] is
    /// returned.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let bounds = samples
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f32, f32)>, v| match acc {
                Some((min, max)) => Some((min.min(v), max.max(v))),
                None => Some((v, v)),
            });

        match bounds {
            Some((min, max)) => Self { min, max },
            None => {
                log::warn!("no finite samples, falling back to the null pixel info");
                Self::NULL
            }
        }
    }

    /// The minimum value across all channels of the image data.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// The maximum value across all channels of the image data.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// The width of the range, `max - min`.
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Linearly rescale `value` from `[min, max]` into `[0, 1]`, clamping the result.
    ///
    /// An empty or inverted range maps every value to `0`.
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.range();
        if range.is_nan() || range <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}

impl Default for PixelInfo {
    fn default() -> Self {
        Self::NULL
    }
}
