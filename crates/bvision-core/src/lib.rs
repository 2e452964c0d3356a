//! # bvision-core - Core Domain Types
//!
//! Foundation crate for Blind Vision. Provides the declarative settings
//! layout, peripheral/theme/identity types, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Layout (`layout`)
//! - [`RowDescriptor`] - A row as written in `layout.toml`
//! - [`RowKind`], [`ItemKind`] - Resolved row kind (navigation, status, toggle, accordion)
//! - [`LayoutEntry`], [`Layout`] - Ordered, resolved rows
//!
//! ### Domain Types (`types`)
//! - [`Peripheral`] - Glasses or stick
//! - [`Theme`] - Light or dark
//! - [`Identity`] - The signed-in user
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bvision_core::prelude::*;
//! ```

pub mod error;
pub mod layout;
pub mod logging;
pub mod routes;
pub mod types;

/// Prelude for common imports used throughout all Blind Vision crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use layout::{ItemKind, Layout, LayoutEntry, LayoutFile, RowDescriptor, RowKind, RowKindTag};
pub use types::{Identity, Peripheral, Theme};
