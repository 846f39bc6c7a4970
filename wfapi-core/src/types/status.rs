/// Body of a status toggle: `{"active": bool}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdateRequest {
    pub active: bool,
}

impl StatusUpdateRequest {
    pub fn new(active: bool) -> Self {
        Self { active }
    }
}
