//! # GemCAD Core
//!
//! Core types, errors, and constants shared by the GemCAD crates.
//! Provides the error hierarchy used by the scene model, the SVG codec and
//! the quick-fill pipeline, plus the small enums that travel between the
//! settings layer and the designer.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, PackingError, Result, SceneError, SvgError};
pub use types::{GridType, ParseGridTypeError};
