/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use texview_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// assert_eq!(image_size.num_pixels(), 200);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }

    /// Number of samples in `channels` interleaved planes of this size, or `None` on
    /// overflow.
    pub fn checked_num_samples(&self, channels: usize) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(channels)
    }

    /// Row-major index of the pixel at `(x, y)`, or `None` when the coordinate is outside.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ImageSize;

    #[test]
    fn image_size_display() {
        let size = ImageSize::from([3, 2]);
        assert_eq!(size.to_string(), "ImageSize { width: 3, height: 2 }");
    }

    #[test]
    fn checked_num_samples_overflow() {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        assert_eq!(size.checked_num_samples(4), Some(48));

        let wide = ImageSize {
            width: usize::MAX,
            height: 2,
        };
        assert_eq!(wide.checked_num_samples(1), None);

        let tall = ImageSize {
            width: usize::MAX / 2,
            height: 2,
        };
        assert_eq!(tall.checked_num_samples(1), Some(usize::MAX - 1));
        assert_eq!(tall.checked_num_samples(4), None);
    }

    #[test]
    fn index_of_bounds() {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        assert_eq!(size.index_of(0, 0), Some(0));
        assert_eq!(size.index_of(3, 2), Some(11));
        assert_eq!(size.index_of(4, 0), None);
        assert_eq!(size.index_of(0, 3), None);
        assert_eq!(size.index_of(-1, 0), None);
        assert_eq!(size.index_of(0, i32::MIN), None);
    }
}
