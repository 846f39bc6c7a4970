use std::collections::BTreeMap;

pub type AnyValue = serde_json::Value;

/// Fields the typed records do not model, carried through to the wire unchanged.
pub type Extra = BTreeMap<String, serde_json::Value>;
