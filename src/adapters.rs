use futures::future::BoxFuture;

use crate::model;

pub mod gcs;
#[cfg(test)]
pub mod mock;
pub mod s3;

pub trait ObjectLister: Send + Sync {
    /// Lists one page of objects under `prefix`. `continuation_token` is the
    /// `next_token` of the previous page, `None` for the first one.
    fn fs_list_objects_page<'a>(
        &'a self,
        bucket: &'a str,
        prefix: &'a str,
        continuation_token: Option<String>,
    ) -> BoxFuture<'a, Result<model::fs::FSPage, model::fs::FSError>>;
}
