//! Selection and ordering of operation batches.
//!
//! All functions borrow the caller's batch and return fresh sequences or lazy
//! iterators; the input is never reordered or modified.

use super::operations_model::OperationRecord;

/// Returns the records whose `state` equals `state` exactly (case-sensitive),
/// in their original order.
///
/// Records with no `state` (absent or JSON `null`) never match.
pub fn filter_by_state(records: &[OperationRecord], state: &str) -> Vec<OperationRecord> {
    records
        .iter()
        .filter(|r| r.state.as_deref() == Some(state))
        .cloned()
        .collect()
}

/// Returns the records ordered by their raw `date` string.
///
/// A missing date compares as the empty string, so it sorts first when
/// ascending and last when descending. Records with equal dates keep their
/// original relative order in both directions.
pub fn sort_by_date(records: &[OperationRecord], descending: bool) -> Vec<OperationRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = date_key(a).cmp(date_key(b));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}

fn date_key(record: &OperationRecord) -> &str {
    record.date.as_deref().unwrap_or("")
}

/// Lazily yields the records whose `operationAmount.currency.code` equals `code`.
pub fn filter_by_currency<'a>(
    records: &'a [OperationRecord],
    code: &'a str,
) -> impl Iterator<Item = &'a OperationRecord> + 'a {
    records
        .iter()
        .filter(move |r| r.currency_code() == Some(code))
}

/// Lazily yields each record's description, skipping records without one.
pub fn transaction_descriptions(records: &[OperationRecord]) -> impl Iterator<Item = &str> {
    records.iter().filter_map(|r| r.description.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::OperationId;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<OperationRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn ids(records: &[OperationRecord]) -> Vec<i64> {
        records
            .iter()
            .map(|r| match r.id {
                Some(OperationId::Number(n)) => n,
                _ => -1,
            })
            .collect()
    }

    fn state_batch() -> Vec<OperationRecord> {
        records(json!([
            {"id": 1, "state": "EXECUTED", "date": "2023-01-01"},
            {"id": 2, "state": "CANCELED", "date": "2023-01-02"},
            {"id": 3, "state": "EXECUTED", "date": "2023-01-03"},
            {"id": 4, "state": "PENDING", "date": "2023-01-04"},
            {"id": 5, "state": "EXECUTED", "date": "2023-01-05"},
            {"id": 6, "date": "2023-01-06"},
            {"id": 7, "state": null, "date": "2023-01-07"},
            {"id": 8, "state": "executed", "date": "2023-01-08"}
        ]))
    }

    #[test]
    fn test_filter_by_state_two_records() {
        let batch = records(json!([
            {"id": 1, "state": "EXECUTED"},
            {"id": 2, "state": "CANCELED"}
        ]));
        let filtered = filter_by_state(&batch, "EXECUTED");
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_filter_by_state_table() {
        let batch = state_batch();
        let cases: [(&str, Vec<i64>); 6] = [
            ("EXECUTED", vec![1, 3, 5]),
            ("CANCELED", vec![2]),
            ("PENDING", vec![4]),
            ("NONEXISTENT", vec![]),
            ("executed", vec![8]),
            ("", vec![]),
        ];
        for (state, expected) in cases {
            assert_eq!(ids(&filter_by_state(&batch, state)), expected, "state {state:?}");
        }
    }

    #[test]
    fn test_filter_by_state_default_state() {
        let batch = state_batch();
        let filtered = filter_by_state(&batch, crate::constants::DEFAULT_STATE);
        assert_eq!(ids(&filtered), vec![1, 3, 5]);
    }

    #[test]
    fn test_filter_by_state_leaves_input_untouched() {
        let batch = state_batch();
        let before = batch.clone();
        let _ = filter_by_state(&batch, "EXECUTED");
        assert_eq!(batch, before);
    }

    #[test]
    fn test_filter_by_state_empty_batch() {
        assert!(filter_by_state(&[], "EXECUTED").is_empty());
    }

    fn date_batch() -> Vec<OperationRecord> {
        records(json!([
            {"id": 1, "date": "2023-01-01"},
            {"id": 2, "date": "2023-01-03"},
            {"id": 3, "date": "2023-01-02"},
            {"id": 4, "date": "2022-12-31"},
            {"id": 5},
            {"id": 6, "date": "2023-01-01T12:00:00"},
            {"id": 7, "date": "2023-01-01T08:00:00"}
        ]))
    }

    #[test]
    fn test_sort_by_date_descending() {
        let sorted = sort_by_date(&date_batch(), true);
        assert_eq!(ids(&sorted), vec![2, 3, 6, 7, 1, 4, 5]);
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let sorted = sort_by_date(&date_batch(), false);
        assert_eq!(ids(&sorted), vec![5, 4, 1, 7, 6, 3, 2]);
    }

    #[test]
    fn test_sort_by_date_is_stable_for_equal_dates() {
        let batch = records(json!([
            {"id": 1, "date": "2023-01-01"},
            {"id": 2, "date": "2023-01-02"},
            {"id": 3, "date": "2023-01-01"},
            {"id": 4},
            {"id": 5}
        ]));
        assert_eq!(ids(&sort_by_date(&batch, false)), vec![4, 5, 1, 3, 2]);
        assert_eq!(ids(&sort_by_date(&batch, true)), vec![2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_sort_by_date_is_idempotent() {
        let once = sort_by_date(&date_batch(), true);
        let twice = sort_by_date(&once, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_directions_mirror_each_other() {
        let batch = records(json!([
            {"id": 1, "date": "2019-08-26T10:50:58.294041"},
            {"id": 2, "date": "2018-06-30T02:08:58.425572"},
            {"id": 3, "date": "2019-04-04T23:20:05.206878"},
            {"id": 4, "date": "2018-09-12T21:27:25.241689"}
        ]));
        let mut descending = sort_by_date(&batch, true);
        descending.reverse();
        assert_eq!(descending, sort_by_date(&batch, false));
    }

    #[test]
    fn test_sort_by_date_leaves_input_untouched() {
        let batch = date_batch();
        let before = batch.clone();
        let _ = sort_by_date(&batch, true);
        assert_eq!(batch, before);
    }

    fn currency_batch() -> Vec<OperationRecord> {
        records(json!([
            {"id": 1, "operationAmount": {"amount": "9824.07", "currency": {"name": "USD", "code": "USD"}}, "description": "Перевод организации"},
            {"id": 2, "operationAmount": {"amount": "79114.93", "currency": {"name": "USD", "code": "USD"}}, "description": "Перевод со счета на счет"},
            {"id": 3, "operationAmount": {"amount": "43318.34", "currency": {"name": "руб.", "code": "RUB"}}, "description": "Перевод со счета на счет"},
            {"id": 4, "operationAmount": {"amount": "56883.54", "currency": {"name": "USD", "code": "usd"}}},
            {"id": 5, "operationAmount": {"amount": "67314.70"}, "description": "Открытие вклада"}
        ]))
    }

    #[test]
    fn test_filter_by_currency() {
        let batch = currency_batch();
        let usd: Vec<&OperationRecord> = filter_by_currency(&batch, "USD").collect();
        assert_eq!(usd.len(), 2);
        assert!(usd.iter().all(|r| r.currency_code() == Some("USD")));

        let rub: Vec<&OperationRecord> = filter_by_currency(&batch, "RUB").collect();
        assert_eq!(rub.len(), 1);

        assert_eq!(filter_by_currency(&batch, "EUR").count(), 0);
    }

    #[test]
    fn test_filter_by_currency_is_lazy() {
        let batch = currency_batch();
        let mut usd = filter_by_currency(&batch, "USD");
        assert_eq!(usd.next().unwrap().id, Some(OperationId::Number(1)));
        assert_eq!(usd.next().unwrap().id, Some(OperationId::Number(2)));
        assert!(usd.next().is_none());
    }

    #[test]
    fn test_transaction_descriptions() {
        let batch = currency_batch();
        let descriptions: Vec<&str> = transaction_descriptions(&batch).collect();
        assert_eq!(
            descriptions,
            vec![
                "Перевод организации",
                "Перевод со счета на счет",
                "Перевод со счета на счет",
                "Открытие вклада"
            ]
        );
        assert_eq!(transaction_descriptions(&[]).count(), 0);
    }
}
