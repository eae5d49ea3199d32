use serde::{ser::SerializeSeq, ser::SerializeTuple, Serialize, Serializer};

pub const MAJOR_VERSION: u32 = 1;
pub const MINOR_VERSION: u32 = 1;

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn is_zero_ino(value: &u64) -> bool {
    *value == 0
}

/// A single ncdu info block. Zero values are left out, ncdu reads a missing
/// field as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub asize: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub dsize: i64,
    #[serde(skip_serializing_if = "is_zero_ino")]
    pub ino: u64,
    pub dev: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub mtime: i64,
}

impl Record {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// A file-list item: a bare record for files, `[record, children...]` for
/// directories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Leaf(Record),
    Directory(Record, Vec<Entry>),
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Leaf(record) => record.serialize(serializer),
            Entry::Directory(record, children) => {
                let mut seq = serializer.serialize_seq(Some(children.len() + 1))?;
                seq.serialize_element(record)?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub progname: String,
    pub progver: String,
    pub timestamp: i64,
}

/// `[major, minor, metadata, [root, entries...]]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub metadata: Metadata,
    pub root: Record,
    pub entries: Vec<Entry>,
}

struct FileList<'a> {
    root: &'a Record,
    entries: &'a [Entry],
}

impl Serialize for FileList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len() + 1))?;
        seq.serialize_element(self.root)?;
        for entry in self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&MAJOR_VERSION)?;
        tuple.serialize_element(&MINOR_VERSION)?;
        tuple.serialize_element(&self.metadata)?;
        tuple.serialize_element(&FileList {
            root: &self.root,
            entries: &self.entries,
        })?;
        tuple.end()
    }
}
