use crate::domain::model::Record;
use std::collections::HashSet;

/// Drop rows whose `id` was already seen, keeping the first occurrence.
///
/// Rows keep their relative input order. The returned count is the number of
/// dropped rows, so `kept + removed == original` always holds. Rows without an
/// `id` field form a single equivalence class of their own: the first id-less
/// row survives and the rest are dropped. An explicit `"id": null` is a
/// separate class from an absent `id`, so null-id rows dedupe among themselves
/// but never against id-less rows.
pub fn deduplicate(rows: Vec<Record>) -> (Vec<Record>, usize) {
    let original = rows.len();
    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut kept = Vec::with_capacity(original);

    for row in rows {
        // serde_json::Value has no Hash impl; its canonical serialization
        // gives value equality for the set key. For object-valued ids the key
        // is sensitive to field order, since key order is preserved on parse.
        let key = row.id().map(|v| v.to_string());
        if seen.insert(key) {
            kept.push(row);
        }
    }

    let removed = original - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_from(json: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn keeps_first_occurrence_of_duplicate_id() {
        let rows = rows_from(serde_json::json!([
            {"id": 1, "v": "a"},
            {"id": 2, "v": "b"},
            {"id": 1, "v": "c"}
        ]));

        let (kept, removed) = deduplicate(rows);

        assert_eq!(removed, 1);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].data["v"], "a");
        assert_eq!(kept[1].data["v"], "b");
    }

    #[test]
    fn no_duplicates_is_a_no_op() {
        let rows = rows_from(serde_json::json!([
            {"id": 1}, {"id": 2}, {"id": 3}
        ]));
        let original = rows.clone();

        let (kept, removed) = deduplicate(rows);

        assert_eq!(removed, 0);
        assert_eq!(kept, original);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let (kept, removed) = deduplicate(Vec::new());
        assert!(kept.is_empty());
        assert_eq!(removed, 0);
    }

    #[test]
    fn all_rows_share_one_id() {
        let rows = rows_from(serde_json::json!([
            {"id": 7, "n": 0},
            {"id": 7, "n": 1},
            {"id": 7, "n": 2},
            {"id": 7, "n": 3},
            {"id": 7, "n": 4}
        ]));

        let (kept, removed) = deduplicate(rows);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].data["n"], 0);
        assert_eq!(removed, 4);
    }

    #[test]
    fn dedup_is_idempotent() {
        let rows = rows_from(serde_json::json!([
            {"id": "x"}, {"id": "y"}, {"id": "x"}, {"id": "z"}, {"id": "y"}
        ]));

        let (first_pass, removed) = deduplicate(rows);
        assert_eq!(removed, 2);

        let (second_pass, removed_again) = deduplicate(first_pass.clone());
        assert_eq!(removed_again, 0);
        assert_eq!(second_pass, first_pass);
    }

    #[test]
    fn surviving_ids_are_pairwise_distinct() {
        let rows = rows_from(serde_json::json!([
            {"id": 1}, {"id": 2}, {"id": 1}, {"id": 3}, {"id": 2}, {"id": 3}
        ]));

        let (kept, removed) = deduplicate(rows);

        assert_eq!(kept.len() + removed, 6);
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn string_and_number_ids_are_distinct_keys() {
        let rows = rows_from(serde_json::json!([
            {"id": 1}, {"id": "1"}
        ]));

        let (kept, removed) = deduplicate(rows);

        assert_eq!(kept.len(), 2);
        assert_eq!(removed, 0);
    }

    #[test]
    fn null_id_and_absent_id_are_distinct_classes() {
        let rows = rows_from(serde_json::json!([
            {"id": null, "v": "null-1"},
            {"v": "absent-1"},
            {"id": null, "v": "null-2"},
            {"v": "absent-2"}
        ]));

        let (kept, removed) = deduplicate(rows);

        assert_eq!(removed, 2);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].data["v"], "null-1");
        assert_eq!(kept[1].data["v"], "absent-1");
    }

    #[test]
    fn object_id_key_is_field_order_sensitive() {
        let rows = rows_from(serde_json::json!([
            {"id": {"a": 1, "b": 2}},
            {"id": {"b": 2, "a": 1}},
            {"id": {"a": 1, "b": 2}}
        ]));

        let (kept, removed) = deduplicate(rows);

        // Same values in a different field order count as a distinct key.
        assert_eq!(kept.len(), 2);
        assert_eq!(removed, 1);
    }

    #[test]
    fn missing_ids_collapse_into_one_row() {
        let rows = rows_from(serde_json::json!([
            {"v": "first"},
            {"id": 1},
            {"v": "second"}
        ]));

        let (kept, removed) = deduplicate(rows);

        assert_eq!(removed, 1);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].data["v"], "first");
        assert_eq!(kept[1].data["id"], 1);
    }
}
