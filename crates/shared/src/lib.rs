pub mod error;
pub mod media;

pub use error::{BrowserError, BrowserResult};
pub use media::{MediaItem, MediaList};
