use std::collections::HashMap;

/// Metadata written onto the terminal segment of a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafMeta {
    pub apparent_size: i64,
    pub disk_size: i64,
    pub inode: u64,
    pub device: u64,
    pub modified_time: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub children: HashMap<String, Node>,
    pub meta: Option<LeafMeta>,
}

impl Node {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: HashMap::new(),
            meta: None,
        }
    }

    /// A node is a directory iff something was indexed underneath it.
    pub fn is_directory(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Virtual root container. It has no name and no metadata of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    pub entries: HashMap<String, Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follows `/`-separated segments from the root.
    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/');
        let mut node = self.entries.get(segments.next()?)?;
        for segment in segments {
            node = node.children.get(segment)?;
        }

        Some(node)
    }

    /// Number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        fn count(children: &HashMap<String, Node>) -> usize {
            children.values().map(|n| 1 + count(&n.children)).sum()
        }

        count(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        let mut leaf = Node::new("b.txt");
        leaf.meta = Some(LeafMeta {
            apparent_size: 10,
            disk_size: 10,
            inode: 9001,
            device: 0,
            modified_time: 1000,
        });

        let mut dir = Node::new("a");
        dir.children.insert(leaf.name.clone(), leaf);

        let mut tree = Tree::new();
        tree.entries.insert(dir.name.clone(), dir);
        tree
    }

    #[test]
    fn test_get() {
        let tree = sample();

        let cases = vec![
            ("a", true),
            ("a/b.txt", true),
            ("b.txt", false),
            ("a/c", false),
            ("", false),
        ];

        for (path, expected) in cases {
            assert_eq!(tree.get(path).is_some(), expected, "failed for case: {}", path);
        }
    }

    #[test]
    fn test_is_directory() {
        let tree = sample();

        assert!(tree.get("a").unwrap().is_directory());
        assert!(!tree.get("a/b.txt").unwrap().is_directory());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(Tree::new().node_count(), 0);
        assert_eq!(sample().node_count(), 2);
    }
}
