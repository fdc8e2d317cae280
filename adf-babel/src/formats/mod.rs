//! Format implementations
//!
//! This module contains the output formats that render a converted ADF
//! document as text.

pub mod icons;
pub mod json;
pub mod treeviz;

pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
