use tracing::{error, info, info_span, warn, Instrument};

use crate::{
    adapters, index,
    model::{self, error::ExportError},
    util::object::Location,
};

/// Lists every page under `location` and folds it into a fresh tree. The
/// first failing page aborts the scan and the partial tree is dropped.
pub async fn scan(
    client: &dyn adapters::ObjectLister,
    location: &Location,
    inode_seed: u64,
) -> Result<model::tree::Tree, ExportError> {
    let span = info_span!("scan", context = "scan", bucket = %location.bucket, prefix = %location.prefix);

    async move {
        info!("called");

        let mut index = index::TreeIndex::new(&location.prefix, inode_seed);
        let mut continuation_token: Option<String> = None;
        let mut pages = 0;

        loop {
            let page = match client
                .fs_list_objects_page(&location.bucket, &location.prefix, continuation_token)
                .await
            {
                Err(err) => {
                    error!(error_message=%err, error_group="list_objects", page = pages);
                    return Err(ExportError::Listing {
                        location: location.uri.clone(),
                        source: err,
                    });
                }
                Ok(page) => page,
            };

            for obj in &page.objects {
                index.index_object(obj);
            }
            pages += 1;

            continuation_token = page.next_token;
            if continuation_token.is_none() {
                break;
            }
        }

        if index.tree().is_empty() {
            warn!("no objects found");
        }

        info!(
            pages = pages,
            indexed = index.indexed,
            skipped = index.skipped,
            nodes = index.tree().node_count(),
            "scanned"
        );

        Ok(index.into_tree())
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{adapters::mock::MockClient, index::DEFAULT_INODE_SEED, util::object::parse_location};

    fn object(key: &str, size: i64, modified_time: i64) -> model::fs::FSObject {
        model::fs::FSObject {
            key: key.to_string(),
            size,
            modified_time,
        }
    }

    #[tokio::test]
    async fn test_scan_folds_every_page() {
        let client = MockClient::new(vec![
            vec![object("logs/a/1", 1, 10), object("logs/b", 2, 20)],
            vec![],
            vec![object("logs/a/2", 3, 30), object("logs/", 0, 0)],
        ]);
        let location = parse_location("s3://bkt/logs").unwrap();

        let tree = scan(&client, &location, DEFAULT_INODE_SEED).await.unwrap();

        assert_eq!(tree.entries.len(), 2);
        assert_eq!(tree.get("a").unwrap().children.len(), 2);
        assert_eq!(tree.get("b").unwrap().meta.as_ref().unwrap().apparent_size, 2);

        let inode = tree.get("a/2").unwrap().meta.as_ref().unwrap().inode;
        assert_eq!(inode, 9003, "inodes keep counting across pages");
    }

    #[tokio::test]
    async fn test_scan_empty_bucket() {
        let client = MockClient::new(vec![]);
        let location = parse_location("gs://bkt").unwrap();

        let tree = scan(&client, &location, DEFAULT_INODE_SEED).await.unwrap();

        assert!(tree.is_empty());
    }

    #[tokio::test]
    async fn test_scan_listing_failure() {
        let mut client = MockClient::new(vec![vec![object("a", 1, 1)], vec![object("b", 1, 1)]]);
        client.fail_at = Some(1);
        let location = parse_location("s3://bkt").unwrap();

        let result = scan(&client, &location, DEFAULT_INODE_SEED).await;

        match result {
            Err(ExportError::Listing { location, .. }) => assert_eq!(location, "s3://bkt"),
            other => panic!("expected listing error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_scan_custom_inode_seed() {
        let client = MockClient::new(vec![vec![object("x", 1, 1)]]);
        let location = parse_location("s3://bkt").unwrap();

        let tree = scan(&client, &location, 1).await.unwrap();

        assert_eq!(tree.get("x").unwrap().meta.as_ref().unwrap().inode, 1);
    }
}
