// src/utils/log.rs

//! Logging for the Huffman encoder library.
//!
//! The library logs through the `log` facade and never installs a logger
//! itself. Applications pick a backend (`env_logger`, `simple_logger`, ...)
//! and initialize it before calling into the crate.
//!
//! Tree construction reports at `debug` level (alphabet size, total weight,
//! depth), and every merge step is traced at `trace` level.
//!
//! Example:
//! ```
//! use huffman_encoder::utils::log::{debug, log_enabled, Level};
//!
//! if log_enabled!(Level::Trace) {
//!     debug!("tracing is on");
//! }
//! ```

pub use log::{Level, debug, error, info, log_enabled, trace, warn};

/// Log target shared by every message emitted from this crate.
pub const TARGET: &str = "huffman_encoder";
