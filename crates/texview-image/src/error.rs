/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has no pixels or is too large to address.
    #[error("Invalid image size: width ({0}) and height ({1}) must be non-zero and addressable")]
    InvalidImageSize(usize, usize),

    /// Error reported by the texture receiving an upload.
    #[error("Failed to upload to texture. {0}")]
    TextureUpload(String),
}
