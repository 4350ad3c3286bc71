use crate::{Error, ParsedName, Slot, SlotValue};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

impl Serialize for ParsedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParsedName", 8)?;
        state.serialize_field("raw", self.raw())?;
        for &slot in Slot::ALL.iter() {
            let value = self.get(slot);
            state.serialize_field(slot.name(), &value)?;
        }
        state.serialize_field("unparsable", &self.is_unparsable())?;
        state.end()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON values map onto slot assignments: null clears, a string splits
/// on whitespace, an array of strings is an explicit word list. Numbers,
/// booleans, and objects have no slot meaning and are rejected.
impl TryFrom<&Value> for SlotValue {
    type Error = Error;

    fn try_from(value: &Value) -> Result<SlotValue, Error> {
        match value {
            Value::Null => Ok(SlotValue::Null),
            Value::String(s) => Ok(SlotValue::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(Error::InvalidAssignment(json_type(other))),
                })
                .collect::<Result<Vec<String>, Error>>()
                .map(SlotValue::List),
            other => Err(Error::InvalidAssignment(json_type(other))),
        }
    }
}
