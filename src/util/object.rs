use crate::model::error::ExportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    AWS,
    GCS,
}

/// Where to list from: `s3://bucket/prefix` or `gs://bucket/prefix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub uri: String,
    pub provider: Provider,
    pub bucket: String,
    pub prefix: String,
}

pub fn parse_provider_from_uri(bucket_uri: &str) -> Result<Provider, ExportError> {
    return if bucket_uri.starts_with("s3://") {
        Ok(Provider::AWS)
    } else if bucket_uri.starts_with("gs://") {
        Ok(Provider::GCS)
    } else {
        let scheme = bucket_uri.split_once("://").map(|(s, _)| s).unwrap_or("");
        Err(ExportError::Location {
            location: bucket_uri.to_string(),
            reason: format!("expected s3 or gs URL, got {:?} URL instead", scheme),
        })
    };
}

pub fn parse_bucket_from_uri(bucket_uri: &str) -> &str {
    let rest = bucket_uri.split_once("://").map(|(_, rest)| rest).unwrap_or("");
    rest.split_once('/').map(|(bucket, _)| bucket).unwrap_or(rest)
}

/// Everything after the bucket with the separating `/` removed.
pub fn parse_prefix_from_uri(bucket_uri: &str) -> &str {
    let rest = bucket_uri.split_once("://").map(|(_, rest)| rest).unwrap_or("");
    rest.split_once('/').map(|(_, prefix)| prefix).unwrap_or("")
}

pub fn parse_location(bucket_uri: &str) -> Result<Location, ExportError> {
    let provider = parse_provider_from_uri(bucket_uri)?;

    let bucket = parse_bucket_from_uri(bucket_uri);
    if bucket.is_empty() {
        return Err(ExportError::Location {
            location: bucket_uri.to_string(),
            reason: "missing bucket name".to_string(),
        });
    }

    Ok(Location {
        uri: bucket_uri.to_string(),
        provider,
        bucket: bucket.to_string(),
        prefix: parse_prefix_from_uri(bucket_uri).to_string(),
    })
}
