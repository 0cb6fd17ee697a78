//! Display module - human-readable rendering of instruments, dates and operations.

mod dates;
mod descriptor;
mod operation_view;

pub use dates::format_date;
pub use descriptor::{format_entity, format_entity_with, DisplayLabels};
pub use operation_view::{describe_operation, OperationView};
