//! Records and the supplemental merge policy.
//!
//! A [`Record`] is a field-name → JSON value mapping that keeps insertion
//! order. Remote SWAPI records are merged with an optional supplemental
//! record from a local source: the supplement wins on shared keys, keys
//! unique to either side are kept, and nested values are replaced whole.

use serde_json::{Map, Value};

use crate::error::{json_type_name, RecordError};

/// Field name → value mapping, insertion ordered.
pub type Record = Map<String, Value>;

/// Merge `supplement` over `remote`, last writer wins.
///
/// Shared keys keep their position from `remote` but take the supplement's
/// value. No deep merge is attempted.
pub fn merge(remote: &Record, supplement: Option<&Record>) -> Record {
    let mut merged = remote.clone();
    if let Some(extra) = supplement {
        for (key, value) in extra {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// First record whose `name` equals `name` exactly.
///
/// A miss is the normal "no supplemental data" case and returns `None`.
pub fn find_by_name<'a>(records: &'a [Record], name: &str) -> Option<&'a Record> {
    records
        .iter()
        .find(|r| r.get("name").and_then(Value::as_str) == Some(name))
}

/// Supplemental record for `remote`: the one with the same exact `name`.
///
/// A candidate carrying a different non-empty `url` describes another
/// entity and is refused, so a merge can never reassign an identity.
pub fn match_supplement<'a>(remote: &Record, source: &'a [Record]) -> Option<&'a Record> {
    let name = record_name(remote)?;
    let candidate = find_by_name(source, name)?;
    match (record_url(candidate), record_url(remote)) {
        (Some(theirs), Some(ours)) if theirs != ours => {
            log::warn!("supplemental record {name:?} is {theirs}, not {ours}; ignoring it");
            None
        }
        _ => Some(candidate),
    }
}

fn record_url(record: &Record) -> Option<&str> {
    record
        .get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

/// Record at `index`; negative indexes count back from the end.
pub fn record_at(records: &[Record], index: isize) -> Option<&Record> {
    let idx = if index < 0 {
        records.len().checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    records.get(idx)
}

/// Unwrap a JSON value that must be an object.
pub fn into_record(value: Value) -> Result<Record, RecordError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(RecordError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

/// Name of a record, if it has a string `name`.
pub fn record_name(record: &Record) -> Option<&str> {
    record.get("name").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(value: Value) -> Record {
        into_record(value).unwrap()
    }

    #[test]
    fn test_merge_last_writer_wins() {
        let remote = rec(json!({ "name": "Hoth", "moons": "3" }));
        let supplement = rec(json!({ "moons": "3", "suns": "1" }));
        let merged = merge(&remote, Some(&supplement));
        assert_eq!(merged, rec(json!({ "name": "Hoth", "moons": "3", "suns": "1" })));
    }

    #[test]
    fn test_merge_supplement_overrides() {
        let remote = rec(json!({ "name": "Leia Organa", "height": "150" }));
        let supplement = rec(json!({ "height": "1.5", "birth_year": "19 BBY" }));
        let merged = merge(&remote, Some(&supplement));
        assert_eq!(merged["height"], json!("1.5"));
        assert_eq!(merged["birth_year"], json!("19 BBY"));
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "height", "birth_year"]);
    }

    #[test]
    fn test_merge_replaces_nested_wholesale() {
        let remote = rec(json!({ "meta": { "a": 1, "b": 2 } }));
        let supplement = rec(json!({ "meta": { "c": 3 } }));
        let merged = merge(&remote, Some(&supplement));
        assert_eq!(merged["meta"], json!({ "c": 3 }));
    }

    #[test]
    fn test_merge_without_supplement_is_copy() {
        let remote = rec(json!({ "name": "Jakku" }));
        assert_eq!(merge(&remote, None), remote);
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let remote = rec(json!({ "name": "Hoth" }));
        let supplement = rec(json!({ "suns": "1" }));
        let _ = merge(&remote, Some(&supplement));
        assert_eq!(remote.len(), 1);
        assert_eq!(supplement.len(), 1);
    }

    #[test]
    fn test_find_by_name_exact() {
        let planets = vec![
            rec(json!({ "name": "Tatooine" })),
            rec(json!({ "name": "Hoth" })),
        ];
        assert_eq!(record_name(find_by_name(&planets, "Hoth").unwrap()), Some("Hoth"));
        assert!(find_by_name(&planets, "hoth").is_none());
        assert!(find_by_name(&planets, "Naboo").is_none());
        assert!(find_by_name(&[], "Hoth").is_none());
    }

    #[test]
    fn test_match_supplement_by_remote_name() {
        let people = vec![
            rec(json!({ "name": "Chewbacca", "birth_year": "200BBY" })),
            rec(json!({ "name": "Poe Dameron", "height": "1.72" })),
        ];
        let poe = rec(json!({ "name": "Poe Dameron", "url": "https://swapi.py4e.com/api/people/86/" }));
        assert_eq!(match_supplement(&poe, &people), Some(&people[1]));
    }

    #[test]
    fn test_unmatched_remote_keeps_its_identity() {
        let people = vec![rec(json!({
            "name": "Chewbacca",
            "url": "https://swapi.py4e.com/api/people/13/",
            "birth_year": "200BBY",
        }))];
        let poe = rec(json!({ "name": "Poe Dameron", "url": "https://swapi.py4e.com/api/people/86/" }));

        let supplement = match_supplement(&poe, &people);
        assert!(supplement.is_none());
        let merged = merge(&poe, supplement);
        assert_eq!(merged["name"], json!("Poe Dameron"));
        assert_eq!(merged["url"], json!("https://swapi.py4e.com/api/people/86/"));
        assert!(merged.get("birth_year").is_none());
    }

    #[test]
    fn test_match_supplement_refuses_conflicting_url() {
        let droids = vec![rec(json!({ "name": "BB8", "url": "https://swapi.py4e.com/api/people/3/" }))];
        let bb8 = rec(json!({ "name": "BB8", "url": "https://swapi.py4e.com/api/people/87/" }));
        assert!(match_supplement(&bb8, &droids).is_none());

        let same = vec![rec(json!({ "name": "BB8", "url": "https://swapi.py4e.com/api/people/87/" }))];
        assert!(match_supplement(&bb8, &same).is_some());
    }

    #[test]
    fn test_match_supplement_needs_remote_name() {
        let planets = vec![rec(json!({ "name": "Hoth" }))];
        assert!(match_supplement(&rec(json!({ "url": "x" })), &planets).is_none());
    }

    #[test]
    fn test_record_at_signed_index() {
        let droids = vec![
            rec(json!({ "name": "BB-8" })),
            rec(json!({ "name": "C-3PO" })),
            rec(json!({ "name": "R2-D2" })),
        ];
        assert_eq!(record_name(record_at(&droids, 0).unwrap()), Some("BB-8"));
        assert_eq!(record_name(record_at(&droids, -1).unwrap()), Some("R2-D2"));
        assert!(record_at(&droids, 3).is_none());
        assert!(record_at(&droids, -4).is_none());
    }

    #[test]
    fn test_into_record_rejects_arrays() {
        assert_eq!(
            into_record(json!([1, 2])).unwrap_err(),
            RecordError::NotAnObject { found: "array" }
        );
    }
}
