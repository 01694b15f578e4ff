//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Error, constraint and diagnostics types      |
//! | `field`  | Dotted field paths used in diagnostics       |
//! | `handle` | Process-wide config instance (set once)      |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError, ConfigValidationError, Constraint};
pub use field::FieldPath;
pub use handle::{CONFIG, ConfigHandle, cfg, init_config, try_cfg};
