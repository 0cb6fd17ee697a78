use serde::Serialize;

use crate::operations::OperationRecord;

use super::dates::format_date;
use super::descriptor::{format_entity_with, DisplayLabels};

/// Display-ready rendering of one operation. Missing inputs render as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationView {
    pub id: String,
    pub date: String,
    pub description: String,
    pub from: String,
    pub to: String,
}

pub fn describe_operation(record: &OperationRecord, labels: &DisplayLabels) -> OperationView {
    let entity = |value: &Option<String>| {
        value
            .as_deref()
            .map(|raw| format_entity_with(raw, labels))
            .unwrap_or_default()
    };

    OperationView {
        id: record.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        date: record.date.as_deref().map(format_date).unwrap_or_default(),
        description: record.description.clone().unwrap_or_default(),
        from: entity(&record.from),
        to: entity(&record.to),
    }
}
