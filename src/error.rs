//! Errors raised while loading, quantizing and drawing an image.

/// Every failure is fatal; the message is the short reason shown after
/// `Failure: ` on the command line.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("Couldn't load image")]
    ImageLoad(#[source] image::ImageError),

    #[error("Image has 0 dimension")]
    ZeroDimension,

    #[error("Resizing source image failed")]
    Resize { width: u32, height: u32 },

    #[error("Problem remapping image")]
    Remap,

    #[error("Invalid color")]
    InvalidColor,

    #[error("Image is empty")]
    EmptyImage,

    #[error("Bad argument")]
    BadArgument,

    #[error("Couldn't write output")]
    Output(#[from] std::io::Error),
}
