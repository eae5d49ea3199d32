use futures::{future::BoxFuture, FutureExt};

use crate::{adapters, model};

/// Serves scripted pages. Page `n` is returned for token `"n"`, and
/// `fail_at` turns that page into an error.
pub struct MockClient {
    pub pages: Vec<Vec<model::fs::FSObject>>,
    pub fail_at: Option<usize>,
}

impl MockClient {
    pub fn new(pages: Vec<Vec<model::fs::FSObject>>) -> Self {
        Self {
            pages,
            fail_at: None,
        }
    }
}

impl adapters::ObjectLister for MockClient {
    fn fs_list_objects_page<'a>(
        &'a self,
        _bucket: &'a str,
        prefix: &'a str,
        continuation_token: Option<String>,
    ) -> BoxFuture<'a, Result<model::fs::FSPage, model::fs::FSError>> {
        let index = continuation_token
            .and_then(|tok| tok.parse::<usize>().ok())
            .unwrap_or(0);

        let result = if self.fail_at == Some(index) {
            Err(model::fs::FSError {
                message: format!("failed to list_objects at: {}, page {}", prefix, index),
            })
        } else {
            let next_token = if index + 1 < self.pages.len() {
                Some((index + 1).to_string())
            } else {
                None
            };

            Ok(model::fs::FSPage {
                objects: self.pages.get(index).cloned().unwrap_or_default(),
                next_token,
            })
        };

        futures::future::ready(result).boxed()
    }
}
