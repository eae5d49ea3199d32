use tracing::{trace, warn};

use crate::model;

pub const DEFAULT_INODE_SEED: u64 = 9001;
/// ncdu stores inodes as signed 64-bit values.
pub const MAX_INODE_SEED: u64 = i64::MAX as u64;

/// Hands out synthetic inode numbers, one per leaf write.
#[derive(Debug)]
pub struct InodeSequence {
    next: u64,
}

impl InodeSequence {
    pub fn new(seed: u64) -> Self {
        Self { next: seed }
    }

    pub fn next_ino(&mut self) -> u64 {
        let ino = self.next;
        self.next = self.next.saturating_add(1);

        return ino;
    }
}

/// Folds flat object keys into a [`model::tree::Tree`].
///
/// Keys may arrive in any order and parent prefixes never need to be listed
/// on their own: every segment is looked up by name and created on first use.
#[derive(Debug)]
pub struct TreeIndex {
    pub prefix: String,
    pub indexed: usize,
    pub skipped: usize,
    tree: model::tree::Tree,
    inodes: InodeSequence,
}

impl TreeIndex {
    pub fn new(prefix: &str, inode_seed: u64) -> Self {
        Self {
            prefix: prefix.to_string(),
            indexed: 0,
            skipped: 0,
            tree: model::tree::Tree::new(),
            inodes: InodeSequence::new(inode_seed),
        }
    }

    pub fn tree(&self) -> &model::tree::Tree {
        &self.tree
    }

    pub fn into_tree(self) -> model::tree::Tree {
        self.tree
    }

    /// Strips the listing prefix from the object key and indexes the rest.
    pub fn index_object(&mut self, object: &model::fs::FSObject) {
        let key = match object.key.strip_prefix(self.prefix.as_str()) {
            None => {
                warn!(key = %object.key, prefix = %self.prefix, "key outside of prefix");
                self.skipped += 1;
                return;
            }
            Some(key) => key,
        };

        self.index_key(key, object.size, object.modified_time);
    }

    /// Walks `key` segment by segment, creating missing nodes, and writes the
    /// object metadata onto the node of the final segment. An empty segment
    /// ends the walk without writing any metadata.
    pub fn index_key(&mut self, key: &str, size: i64, modified_time: i64) {
        if key.is_empty() {
            self.skipped += 1;
            return;
        }

        let key = key.strip_prefix('/').unwrap_or(key);
        let parts: Vec<&str> = key.split('/').collect();
        let last = parts.len() - 1;

        let mut written = false;
        let mut cur_dir = &mut self.tree.entries;
        for (idx, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                break;
            }

            let node = cur_dir
                .entry(part.to_string())
                .or_insert_with(|| model::tree::Node::new(part));

            if idx == last {
                if let Some(prev) = &node.meta {
                    if prev.apparent_size != size || prev.modified_time != modified_time {
                        warn!(
                            key = key,
                            previous_size = prev.apparent_size,
                            size = size,
                            previous_mtime = prev.modified_time,
                            mtime = modified_time,
                            "duplicate key, keeping last listed metadata"
                        );
                    }
                }

                node.meta = Some(model::tree::LeafMeta {
                    apparent_size: size,
                    disk_size: size,
                    inode: self.inodes.next_ino(),
                    device: 0,
                    modified_time,
                });
                written = true;
                break;
            } else {
                cur_dir = &mut node.children;
            }
        }

        if !written {
            trace!(key = key, "no object segment");
            self.skipped += 1;
            return;
        }

        trace!(key = key, size = size, "indexed");
        self.indexed += 1;
    }
}
