use std::io;

use aws_sdk_s3::Client;

use crate::error::RelayError;

/// Reads log objects out of the object store. Holds the long-lived S3
/// client created at cold start so connections are reused across
/// invocations.
pub struct ObjectFetcher {
    client: Client,
}

impl ObjectFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the full object body into memory. Single attempt, no
    /// retries; a missing object or denied access surfaces as
    /// [`RelayError::ObjectStore`].
    pub async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, RelayError> {
        tracing::info!("Fetching log object s3://{}/{}", bucket, key);

        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| RelayError::ObjectStore(err.into()))?;

        let body = object
            .body
            .collect()
            .await
            .map_err(|err| RelayError::Io(io::Error::new(io::ErrorKind::Other, err)))?;

        Ok(body.into_bytes().to_vec())
    }
}
