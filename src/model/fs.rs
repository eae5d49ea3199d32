use thiserror::Error;

/// One listed object, timestamps in Unix seconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FSObject {
    pub key: String,
    pub size: i64,
    pub modified_time: i64,
}

#[derive(Clone, Debug, Default)]
pub struct FSPage {
    pub objects: Vec<FSObject>,
    pub next_token: Option<String>,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct FSError {
    pub message: String,
}
