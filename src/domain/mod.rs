pub mod image_fetcher;
pub mod image_inspector;
pub mod image_url;

// --- public re-exports ---
pub use image_fetcher::{FetchError, HttpImageSource, ImageBytes, ImageSource};
pub use image_inspector::{inspect, ImageDimensions, InspectError};
pub use image_url::{ImageUrl, UrlError, DEFAULT_IMAGE_URL};
