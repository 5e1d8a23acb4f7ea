use serde::Deserialize;

/// A decoded audit log: an ordered list of records describing API actions.
///
/// Only the fields the relay reads are modelled; everything else in the log
/// is ignored by the deserializer.
#[derive(Debug, Deserialize)]
pub struct AuditLog {
    #[serde(rename = "Records")]
    pub records: Vec<AuditRecord>,
}

/// One logged action. Records come in many shapes, so every field is
/// optional at decode time; the extractor decides which absences are faults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub user_identity: Option<UserIdentity>,
    // null for read-only actions
    #[serde(default)]
    pub response_elements: Option<ResponseElements>,
}

#[derive(Debug, Deserialize)]
pub struct UserIdentity {
    #[serde(default)]
    pub arn: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseElements {
    #[serde(default)]
    pub instances_set: Option<InstancesSet>,
}

#[derive(Debug, Deserialize)]
pub struct InstancesSet {
    #[serde(default)]
    pub items: Vec<InstanceItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceItem {
    #[serde(default)]
    pub instance_id: Option<String>,
}

/// Outcome of scanning a log for the watched event type.
#[derive(Debug, PartialEq)]
pub enum ExtractionResult {
    Found(LaunchEvent),
    /// No record matched. A normal outcome, not a fault.
    NotFound,
}

/// The fields reported to the webhook for a matched record.
#[derive(Debug, PartialEq)]
pub struct LaunchEvent {
    pub username: String,
    pub role: String,
    pub instance_ids: Vec<String>,
}
