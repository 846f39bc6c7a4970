use std::fmt;

use crate::types::{AnyValue, Extra};

/// Opaque server-side identifier of a workflow.
///
/// Never generated locally and never validated: whatever the caller hands in is
/// sent as a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(String);

impl WorkflowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for WorkflowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WorkflowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkflowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkflowCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "notificationGroupId")]
    pub notification_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<AnyValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "preferenceSettings")]
    pub preference_settings: Option<AnyValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "blueprintId")]
    pub blueprint_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AnyValue>,

    #[serde(flatten, default)]
    pub extra: Extra,
}

impl WorkflowCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_notification_group(mut self, id: impl Into<String>) -> Self {
        self.notification_group_id = Some(id.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_steps(mut self, steps: Vec<AnyValue>) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_critical(mut self, critical: bool) -> Self {
        self.critical = Some(critical);
        self
    }

    /// Set a raw field. A key naming a typed field replaces it, so the key is sent once.
    pub fn with_field(mut self, key: impl Into<String>, value: AnyValue) -> Self {
        let key = key.into();
        match key.as_str() {
            "name" => self.name = None,
            "notificationGroupId" => self.notification_group_id = None,
            "tags" => self.tags = None,
            "description" => self.description = None,
            "steps" => self.steps = None,
            "active" => self.active = None,
            "critical" => self.critical = None,
            "preferenceSettings" => self.preference_settings = None,
            "blueprintId" => self.blueprint_id = None,
            "data" => self.data = None,
            _ => {}
        }
        self.extra.insert(key, value);
        self
    }
}

/// Treats every key as an extra field, so an arbitrary JSON object goes out unchanged.
impl From<serde_json::Map<String, AnyValue>> for WorkflowCreateRequest {
    fn from(map: serde_json::Map<String, AnyValue>) -> Self {
        Self {
            extra: map.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Partial or full replacement of a workflow. Unset fields are omitted from the body.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkflowUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<AnyValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "notificationGroupId")]
    pub notification_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "preferenceSettings")]
    pub preference_settings: Option<AnyValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AnyValue>,

    #[serde(flatten, default)]
    pub extra: Extra,
}

impl WorkflowUpdateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_steps(mut self, steps: Vec<AnyValue>) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: AnyValue) -> Self {
        let key = key.into();
        match key.as_str() {
            "name" => self.name = None,
            "tags" => self.tags = None,
            "description" => self.description = None,
            "identifier" => self.identifier = None,
            "steps" => self.steps = None,
            "notificationGroupId" => self.notification_group_id = None,
            "critical" => self.critical = None,
            "preferenceSettings" => self.preference_settings = None,
            "data" => self.data = None,
            _ => {}
        }
        self.extra.insert(key, value);
        self
    }
}

impl From<serde_json::Map<String, AnyValue>> for WorkflowUpdateRequest {
    fn from(map: serde_json::Map<String, AnyValue>) -> Self {
        Self {
            extra: map.into_iter().collect(),
            ..Default::default()
        }
    }
}
