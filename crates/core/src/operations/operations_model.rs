use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnError, DeserializeAs};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of an operation. Exports carry either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationId::Number(n) => write!(f, "{}", n),
            OperationId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Currency block of an operation amount. Only `code` drives conversion;
/// `name` is the display name ("руб.", "USD") and is carried as-is.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationAmount {
    /// Decimal amount as written in the source, e.g. "31957.58"
    #[serde_as(deserialize_as = "DefaultOnError<Option<AmountText>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyInfo>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One financial operation from an exported batch.
///
/// Every field is optional; a missing field is never an error, it only makes
/// the record non-matching for filters or unavailable for conversion. A field
/// of the wrong type decodes as `None`. Fields this model does not know about
/// are kept in `extra`, and so are wrong-typed values when the record is built
/// with [`OperationRecord::from_json`].
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OperationId>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ISO-8601 date or date-time, e.g. "2019-08-26T10:50:58.294041"
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source instrument, e.g. "Maestro 1596837868705199"
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Destination instrument, e.g. "Счет 64686473678894779589"
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_amount: Option<OperationAmount>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OperationRecord {
    /// Decodes one exported record, keeping the raw value of every field that
    /// had the wrong type in the `extra` map of the object it appeared in.
    ///
    /// Fails only when `raw` is not a JSON object.
    pub fn from_json(raw: Value) -> Result<Self, serde_json::Error> {
        let mut record: OperationRecord = serde_json::from_value(raw.clone())?;
        let Value::Object(raw) = raw else {
            return Ok(record);
        };

        if let (Some(amount), Some(Value::Object(raw_amount))) =
            (record.operation_amount.as_mut(), raw.get("operationAmount"))
        {
            if let (Some(currency), Some(Value::Object(raw_currency))) =
                (amount.currency.as_mut(), raw_amount.get("currency"))
            {
                let rejected = rejected_fields(&*currency, raw_currency);
                currency.extra.extend(rejected);
            }
            let rejected = rejected_fields(&*amount, raw_amount);
            amount.extra.extend(rejected);
        }

        let rejected = rejected_fields(&record, &raw);
        record.extra.extend(rejected);
        Ok(record)
    }

    /// Currency code of the operation amount, if the record carries one.
    pub fn currency_code(&self) -> Option<&str> {
        self.operation_amount
            .as_ref()
            .and_then(|a| a.currency.as_ref())
            .and_then(|c| c.code.as_deref())
    }

    /// Identifier for diagnostics; "unknown" when the record has none.
    pub fn id_label(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Non-null entries of `raw` that are missing once `decoded` is written back.
fn rejected_fields<T: Serialize>(decoded: &T, raw: &Map<String, Value>) -> Vec<(String, Value)> {
    let kept = match serde_json::to_value(decoded) {
        Ok(Value::Object(kept)) => kept,
        _ => return Vec::new(),
    };
    raw.iter()
        .filter(|(key, value)| !value.is_null() && !kept.contains_key(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Accepts `"100.00"` or `100.0` for an amount.
struct AmountText;

impl<'de> DeserializeAs<'de, String> for AmountText {
    fn deserialize_as<D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "amount must be a string or a number, got {}",
                other
            ))),
        }
    }
}
