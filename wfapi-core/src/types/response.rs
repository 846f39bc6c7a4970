use std::collections::BTreeMap;

use crate::types::AnyValue;

/// A decoded JSON response body plus the transport metadata it arrived with.
///
/// The body is kept as untyped JSON; its shape is resource-specific and is
/// interpreted by the caller, never by the service layer.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JsonResponse {
    pub status: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: AnyValue,
}

impl JsonResponse {
    pub fn new(status: u16, body: AnyValue) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body,
        }
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `data` member of an object body, if there is one.
    pub fn data(&self) -> Option<&AnyValue> {
        self.body.get("data")
    }

    pub fn body(&self) -> &AnyValue {
        &self.body
    }

    pub fn into_body(self) -> AnyValue {
        self.body
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Deserialize the `data` member (or the whole body when there is none) into `T`.
    pub fn deserialize_data<T>(&self) -> Result<T, serde_json::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.data().unwrap_or(&self.body);
        T::deserialize(value)
    }
}
