use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};

use crate::decode;
use crate::error::RelayError;
use crate::extract;
use crate::fetch::ObjectFetcher;
use crate::models::ExtractionResult;
use crate::notify::SlackNotifier;

/// The one audit event type this relay watches for.
pub const WATCHED_EVENT: &str = "RunInstances";

/// Runs the pipeline for one storage event: resolve the object reference,
/// fetch, decode, scan, and notify on a match. Any fault before the notify
/// step fails the invocation; the platform redelivers the trigger if it
/// wants a retry.
pub async fn handle_event(
    event: LambdaEvent<S3Event>,
    fetcher: &ObjectFetcher,
    notifier: &SlackNotifier,
) -> Result<(), Error> {
    let (bucket, key) = first_object_ref(&event.payload)?;

    let raw = fetcher.fetch(&bucket, &key).await?;
    let log = decode::decode(&raw)?;

    match extract::extract(&log, WATCHED_EVENT)? {
        ExtractionResult::Found(launch) => {
            let status = notifier
                .notify(&launch.username, &launch.role, &launch.instance_ids)
                .await?;
            tracing::info!("Slack POST returned HTTP code {}", status);
        }
        ExtractionResult::NotFound => {
            tracing::info!("No {} record in log, nothing to report", WATCHED_EVENT);
        }
    }

    Ok(())
}

/// The trigger carries bucket/key identifiers only, not content. Only the
/// first record is used.
fn first_object_ref(event: &S3Event) -> Result<(String, String), RelayError> {
    let record = event
        .records
        .first()
        .ok_or_else(|| RelayError::Notification("event contains no records".to_string()))?;

    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .ok_or_else(|| RelayError::Notification("record has no bucket name".to_string()))?;

    let key = record
        .s3
        .object
        .key
        .clone()
        .ok_or_else(|| RelayError::Notification("record has no object key".to_string()))?;

    Ok((bucket, key))
}
