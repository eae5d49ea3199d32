use futures::{future::BoxFuture, FutureExt};
use google_cloud_storage::http::objects::list::ListObjectsRequest;

use crate::{adapters, model};

impl adapters::ObjectLister for google_cloud_storage::client::Client {
    fn fs_list_objects_page<'a>(
        &'a self,
        bucket: &'a str,
        prefix: &'a str,
        continuation_token: Option<String>,
    ) -> BoxFuture<'a, Result<model::fs::FSPage, model::fs::FSError>> {
        async move {
            let req = ListObjectsRequest {
                bucket: bucket.to_string(),
                prefix: if prefix.is_empty() {
                    None
                } else {
                    Some(prefix.to_string())
                },
                page_token: continuation_token,
                ..Default::default()
            };

            let lo = self
                .list_objects(&req)
                .await
                .map_err(|err| model::fs::FSError {
                    message: format!("failed to list_objects at: {}, {}", prefix, err),
                })?;

            let objects = lo
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|obj| model::fs::FSObject {
                    key: obj.name,
                    size: obj.size,
                    modified_time: obj
                        .updated
                        .map(time::OffsetDateTime::unix_timestamp)
                        .unwrap_or(0),
                })
                .collect();

            Ok(model::fs::FSPage {
                objects,
                next_token: lo.next_page_token,
            })
        }
        .boxed()
    }
}
