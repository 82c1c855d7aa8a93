//! Error handling for GemCAD
//!
//! Provides error types for the layers of the design canvas:
//! - Scene errors (layer management, element addressing)
//! - SVG errors (document-level import failures)
//! - Packing errors (quick-fill requests and responses)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene error type
///
/// Represents errors raised by layer and element operations on a scene.
/// A failed operation always leaves the scene unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The protected base layer cannot be deleted or renamed
    #[error("Layer '{name}' is protected and cannot be removed")]
    ProtectedLayer {
        /// The protected layer name.
        name: String,
    },

    /// No layer with the given name exists
    #[error("Unknown layer: {name}")]
    UnknownLayer {
        /// The requested layer name.
        name: String,
    },

    /// A layer with the given name already exists
    #[error("Layer '{name}' already exists")]
    DuplicateLayer {
        /// The conflicting layer name.
        name: String,
    },

    /// Layer names must contain at least one visible character
    #[error("Invalid layer name: {reason}")]
    InvalidLayerName {
        /// Why the name was rejected.
        reason: String,
    },

    /// Element index does not address an element of the layer
    #[error("Element index {index} out of range for layer '{layer}' ({len} elements)")]
    ElementIndexOutOfRange {
        /// The layer that was addressed.
        layer: String,
        /// The requested index.
        index: usize,
        /// Number of elements in the layer.
        len: usize,
    },
}

/// SVG error type
///
/// Only document-level failures surface as errors. Unsupported tags and
/// missing attributes are handled leniently by the importer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvgError {
    /// The document could not be parsed at all
    #[error("Malformed SVG document: {reason}")]
    Malformed {
        /// The parser's description of the failure.
        reason: String,
    },
}

/// Packing error type
///
/// Represents failures of a quick-fill request. None of these mutate the scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackingError {
    /// Network or service failure while filling the region
    #[error("Failed to fill region")]
    RequestFailed {
        /// Transport or status detail, kept for logs.
        reason: String,
    },

    /// The service answered with a body that does not match the contract
    #[error("Invalid fill response: {reason}")]
    InvalidResponse {
        /// What was wrong with the response.
        reason: String,
    },

    /// The request parameters cannot produce a valid packing
    #[error("Invalid fill request: {reason}")]
    InvalidRequest {
        /// Which parameter was rejected.
        reason: String,
    },

    /// The fill was cancelled before it completed
    #[error("Fill request cancelled")]
    Cancelled,
}

impl PackingError {
    /// Create a request failure from any displayable cause
    pub fn request_failed(reason: impl std::fmt::Display) -> Self {
        Self::RequestFailed {
            reason: reason.to_string(),
        }
    }

    /// Create an invalid-request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Check if this error came from cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Main error type for GemCAD
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// SVG error
    #[error(transparent)]
    Svg(#[from] SvgError),

    /// Packing error
    #[error(transparent)]
    Packing(#[from] PackingError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }

    /// Check if this is a packing error
    pub fn is_packing_error(&self) -> bool {
        matches!(self, Error::Packing(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
