//! Output generation.
//!
//! One submodule per output format:
//!
//! - [`rss`]: Serializes the aggregated [`crate::models::Feed`] as an
//!   RSS 2.0 document and writes it to disk.

pub mod rss;
