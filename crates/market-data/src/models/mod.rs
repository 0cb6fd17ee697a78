//! Market data models
//!
//! - `conversion` - a single amount-conversion request and its answer

mod conversion;

pub use conversion::{Conversion, ConversionRequest};
