//! Records offered by the lookup
//!
//! A [`Record`] always has a non-blank `id` and `name`. Any other fields are
//! carried along untouched for the host. Malformed input is rejected here,
//! at the boundary, so filtering and selection never see it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RecordError;

/// A selectable entity with a unique identifier and a display name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Record {
    id: String,
    name: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Record {
    /// Create a record, rejecting blank identifiers or names.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, RecordError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(RecordError::EmptyField("id"));
        }
        if name.trim().is_empty() {
            return Err(RecordError::EmptyField("name"));
        }
        Ok(Self {
            id,
            name,
            extra: Map::new(),
        })
    }

    /// Attach an opaque field. `id` and `name` cannot be overwritten this way.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "id" && key != "name" {
            self.extra.insert(key, value.into());
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque fields other than `id` and `name`
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Look up an opaque field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

fn take_string(map: &mut Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    match map.remove(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(RecordError::EmptyField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(RecordError::WrongType {
            field,
            found: json_type_name(&other).to_string(),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take_string(&mut map, "id")?;
        let name = take_string(&mut map, "name")?;
        Ok(Self {
            id,
            name,
            extra: map,
        })
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Record::try_from(map),
            other => Err(RecordError::WrongType {
                field: "record",
                found: json_type_name(&other).to_string(),
            }),
        }
    }
}

/// Convert loosely typed entries into records, skipping malformed ones.
///
/// Entries that fail validation are logged and dropped. Repeated ids keep
/// their first occurrence.
pub fn records_from_values(values: impl IntoIterator<Item = Value>) -> Vec<Record> {
    let records = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match Record::try_from(value) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed record");
                None
            }
        });
    dedup_by_id(records)
}

/// Parse a JSON array of records.
///
/// A document that is not an array is an error; malformed entries inside
/// the array are skipped as in [`records_from_values`].
pub fn records_from_json(json: &str) -> Result<Vec<Record>, RecordError> {
    let values: Vec<Value> =
        serde_json::from_str(json).map_err(|e| RecordError::NotAList(e.to_string()))?;
    Ok(records_from_values(values))
}

/// Drop records whose id was already seen, keeping list order.
pub fn dedup_by_id(records: impl IntoIterator<Item = Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id.clone());
            if !fresh {
                tracing::warn!(id = %record.id, "dropping record with duplicate id");
            }
            fresh
        })
        .collect()
}

/// Insert `record`, replacing any entry with the same id in place.
///
/// Returns the index the record now occupies.
pub fn upsert(records: &mut Vec<Record>, record: Record) -> usize {
    match records.iter().position(|r| r.id == record.id) {
        Some(index) => {
            records[index] = record;
            index
        }
        None => {
            records.push(record);
            records.len() - 1
        }
    }
}
