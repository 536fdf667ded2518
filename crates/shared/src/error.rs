use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("Media list must contain at least one item")]
    EmptyMediaList,

    #[error("Index {index} is out of range for {len} media items")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type BrowserResult<T> = Result<T, BrowserError>;
