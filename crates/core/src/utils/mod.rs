pub mod call_log;

pub use call_log::{CallLogger, LogDestination};
