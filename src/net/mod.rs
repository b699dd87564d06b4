pub mod embed;

#[cfg(feature = "thumbnails")]
pub mod fetch;

#[cfg(feature = "thumbnails")]
pub mod image;
