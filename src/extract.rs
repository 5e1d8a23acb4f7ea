use crate::error::RelayError;
use crate::models::{AuditLog, ExtractionResult, LaunchEvent};

/// Scans the log in order and reports the first record whose `eventName`
/// equals `event_type` (case-sensitive). Later matches are ignored: one
/// notification per invocation.
///
/// An absent list or no match is [`ExtractionResult::NotFound`]. Absent
/// identity or instance fields on the matched record are faults, never
/// silent defaults.
pub fn extract(log: &AuditLog, event_type: &str) -> Result<ExtractionResult, RelayError> {
    for record in &log.records {
        if record.event_name.as_deref() != Some(event_type) {
            continue;
        }

        tracing::info!("{} event found", event_type);

        let arn = record
            .user_identity
            .as_ref()
            .and_then(|identity| identity.arn.as_deref())
            .ok_or(RelayError::MissingField("userIdentity.arn"))?;
        let (role, username) = split_identity(arn)?;
        tracing::info!("Assumed role {} for user {}", role, username);

        let instances = record
            .response_elements
            .as_ref()
            .and_then(|elements| elements.instances_set.as_ref())
            .ok_or(RelayError::MissingField("responseElements.instancesSet"))?;

        let instance_ids = instances
            .items
            .iter()
            .map(|item| {
                item.instance_id
                    .clone()
                    .ok_or(RelayError::MissingField("instanceId"))
            })
            .collect::<Result<Vec<String>, RelayError>>()?;

        return Ok(ExtractionResult::Found(LaunchEvent {
            username,
            role,
            instance_ids,
        }));
    }

    Ok(ExtractionResult::NotFound)
}

/// The identity ARN packs role and username into its trailing segments:
/// `arn:aws:sts::123:assumed-role/Admin/alice`. Anything that does not
/// split into exactly three segments is rejected.
fn split_identity(arn: &str) -> Result<(String, String), RelayError> {
    let segments: Vec<&str> = arn.split('/').collect();
    match segments.as_slice() {
        [_prefix, role, username] => Ok((role.to_string(), username.to_string())),
        _ => Err(RelayError::MalformedIdentity(arn.to_string())),
    }
}
