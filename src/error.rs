use std::path::PathBuf;

use thiserror::Error;

use crate::event::SubscriptionId;

/// Errors raised while loading or exporting images
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported file format: {0:?}")]
    UnsupportedFormat(String),
    #[error("the canvas capture is empty")]
    EmptyCapture,
}

/// Errors raised by the drawing state
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("observer {0:?} is not subscribed")]
    ObserverNotFound(SubscriptionId),
}
