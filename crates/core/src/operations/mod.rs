//! Operations module - record model, filtering, ordering and loading.

mod operations_errors;
mod operations_filter;
mod operations_loader;
mod operations_model;

pub use operations_errors::LoadError;
pub use operations_filter::{
    filter_by_currency, filter_by_state, sort_by_date, transaction_descriptions,
};
pub use operations_loader::{
    load_operations, load_operations_csv, load_operations_excel, load_operations_json,
    read_operations_csv, read_operations_excel, read_operations_json, SheetSelector,
};
pub use operations_model::{CurrencyInfo, OperationAmount, OperationId, OperationRecord};
