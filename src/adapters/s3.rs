use aws_sdk_s3::error::DisplayErrorContext;
use futures::{future::BoxFuture, FutureExt};

use crate::{adapters, model};

impl adapters::ObjectLister for aws_sdk_s3::Client {
    fn fs_list_objects_page<'a>(
        &'a self,
        bucket: &'a str,
        prefix: &'a str,
        continuation_token: Option<String>,
    ) -> BoxFuture<'a, Result<model::fs::FSPage, model::fs::FSError>> {
        async move {
            let mut req = self.list_objects_v2().bucket(bucket);

            if !prefix.is_empty() {
                req = req.prefix(prefix);
            }

            if let Some(tok) = continuation_token {
                req = req.continuation_token(tok);
            }

            let lo = req.send().await.map_err(|err| model::fs::FSError {
                message: format!(
                    "failed to list_objects at: {}, {}",
                    prefix,
                    DisplayErrorContext(&err)
                ),
            })?;

            let objects = lo
                .contents()
                .iter()
                .map(|o| model::fs::FSObject {
                    key: o.key().unwrap_or("").to_string(),
                    size: o.size().unwrap_or(0),
                    modified_time: o.last_modified().map(|t| t.secs()).unwrap_or(0),
                })
                .collect();

            Ok(model::fs::FSPage {
                objects,
                next_token: lo.next_continuation_token().map(|tok| tok.to_string()),
            })
        }
        .boxed()
    }
}
