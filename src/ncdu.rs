use std::{
    collections::HashMap,
    io::{ErrorKind, Write},
    time::SystemTime,
};

use tracing::{info, span, Level};

use crate::model::{
    self,
    error::ExportError,
    ncdu::{Document, Entry, Metadata, Record},
};

pub const PROGNAME: &str = env!("CARGO_PKG_NAME");
pub const PROGVER: &str = env!("CARGO_PKG_VERSION");

pub fn now_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Builds the ncdu export document for `tree`. The root record is named after
/// `source`, the location the tree was listed from.
pub fn export(tree: &model::tree::Tree, source: &str, timestamp: i64) -> Document {
    Document {
        metadata: Metadata {
            progname: PROGNAME.to_string(),
            progver: PROGVER.to_string(),
            timestamp,
        },
        root: Record::named(source),
        entries: list_entries(&tree.entries),
    }
}

fn list_entries(dir: &HashMap<String, model::tree::Node>) -> Vec<Entry> {
    dir.values()
        .filter(|node| !node.name.is_empty())
        .map(|node| {
            if node.is_directory() {
                Entry::Directory(Record::named(&node.name), list_entries(&node.children))
            } else {
                Entry::Leaf(leaf_record(node))
            }
        })
        .collect()
}

fn leaf_record(node: &model::tree::Node) -> Record {
    match &node.meta {
        None => Record::named(&node.name),
        Some(meta) => Record {
            name: node.name.clone(),
            asize: meta.apparent_size,
            dsize: meta.disk_size,
            ino: meta.inode,
            dev: meta.device,
            mtime: meta.modified_time,
        },
    }
}

pub fn encode(document: &Document) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(document)?)
}

/// Writes the whole document, resuming after partial writes. A writer that
/// stops accepting bytes is an error, a truncated document is useless to ncdu.
pub fn write_document<W: Write + ?Sized>(out: &mut W, raw_data: &[u8]) -> Result<(), ExportError> {
    let span = span!(Level::INFO, "write_document", context = "write_document");
    let _e = span.enter();

    let mut written = 0;
    while written < raw_data.len() {
        match out.write(&raw_data[written..]) {
            Ok(0) => {
                return Err(ExportError::ShortWrite {
                    written,
                    expected: raw_data.len(),
                });
            }
            Ok(n) => written += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
    out.flush()?;

    info!(bytes = written, "written");
    Ok(())
}
