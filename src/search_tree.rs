use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace, warn};

use crate::record::{Key, Record};
use crate::render::render_records;
use crate::table::{TableError, TableResult};

type Link = Option<Box<Node>>;

/// Result of a [`SearchTable::search`], carrying the number of key comparisons made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search<'a> {
    pub record: Option<&'a Record>,
    pub comparisons: usize,
}

impl<'a> Search<'a> {
    /// Returns `true` when the key was found.
    pub fn is_found(&self) -> bool {
        self.record.is_some()
    }
}

/// Whether a table currently holds any records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    Empty,
    Populated,
}

/// Dynamic search table backed by an unbalanced binary search tree.
///
/// Keys in a node's left subtree are strictly smaller than the node's key and keys in its
/// right subtree strictly greater. Inserting an existing key is rejected, so every key
/// appears at most once. No rebalancing is done: inserting keys in sorted order produces
/// a tree of depth `n`. Traversal and teardown use an explicit stack, so deep trees do not
/// exhaust the call stack.
#[derive(Default)]
pub struct SearchTable {
    root: Link,
    len: usize,
}

impl SearchTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of records stored in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn state(&self) -> TableState {
        if self.is_empty() {
            TableState::Empty
        } else {
            TableState::Populated
        }
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Inserts `record`, rejecting it if a record with the same key is already present.
    pub fn insert(&mut self, record: Record) -> TableResult<()> {
        let key = record.key;
        let slot = Self::slot_mut(&mut self.root, key);
        if slot.is_some() {
            debug!("insert of key {} rejected: key already present", key);
            return Err(TableError::DuplicateKey(key));
        }
        *slot = Some(Box::new(Node::new(record)));
        self.len += 1;
        debug!("inserted key {} ({} records)", key, self.len);
        Ok(())
    }

    /// Looks up `key`, counting one comparison per node visited on the way down.
    pub fn search(&self, key: Key) -> Search<'_> {
        let mut comparisons = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            comparisons += 1;
            match key.cmp(&node.record.key) {
                Ordering::Equal => {
                    trace!("found key {} after {} comparisons", key, comparisons);
                    return Search {
                        record: Some(&node.record),
                        comparisons,
                    };
                }
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        trace!("key {} not found after {} comparisons", key, comparisons);
        Search {
            record: None,
            comparisons,
        }
    }

    /// Borrows the record stored under `key`.
    pub fn get(&self, key: Key) -> Option<&Record> {
        self.search(key).record
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.search(key).is_found()
    }

    /// Returns the 1-based depth of the node holding `key`.
    pub fn depth_of(&self, key: Key) -> Option<usize> {
        let search = self.search(key);
        search.record.map(|_| search.comparisons)
    }

    /// Removes and returns the record stored under `key`.
    ///
    /// A node with two children keeps its place in the tree: it takes over the record of its
    /// in-order successor, and the successor's node is unlinked instead.
    pub fn remove(&mut self, key: Key) -> TableResult<Record> {
        let slot = Self::slot_mut(&mut self.root, key);
        let mut target = match slot.take() {
            Some(node) => node,
            None => {
                debug!("remove of key {} failed: key not present", key);
                return Err(TableError::KeyNotFound(key));
            }
        };
        let removed = match (target.left.take(), target.right.take()) {
            (None, None) => target.record,
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                target.record
            }
            (Some(left), Some(right)) => {
                let (successor, rest) = Self::take_min(right);
                target.left = Some(left);
                target.right = rest;
                let removed = mem::replace(&mut target.record, successor);
                *slot = Some(target);
                removed
            }
        };
        self.len -= 1;
        debug!("removed key {} ({} records)", key, self.len);
        Ok(removed)
    }

    /// Replaces the contents of the table with `records`, inserted in the given order.
    ///
    /// Records whose key was already loaded are skipped. Returns the number inserted.
    pub fn bulk_load<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Record>,
    {
        self.clear();
        let mut inserted = 0;
        for record in records {
            match self.insert(record) {
                Ok(()) => inserted += 1,
                Err(err) => warn!("bulk load skipped a record: {}", err),
            }
        }
        debug!("bulk load inserted {} records", inserted);
        inserted
    }

    /// Creates an iterator over the records in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Returns a copy of the records in ascending key order.
    pub fn in_order(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    pub fn keys(&self) -> Vec<Key> {
        self.iter().map(|record| record.key).collect()
    }

    /// Returns the number of levels in the tree; zero when empty.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    /// Checks that keys strictly increase in traversal order and that every node is counted.
    pub fn is_ordered(&self) -> bool {
        let mut count = 0;
        let mut previous: Option<Key> = None;
        for record in self.iter() {
            if previous.map_or(false, |key| key >= record.key) {
                return false;
            }
            previous = Some(record.key);
            count += 1;
        }
        count == self.len
    }

    /// Renders the records as a padded text table in key order.
    pub fn render(&self) -> String {
        render_records(self.iter())
    }

    /// Renders the shape of the tree, one node per line.
    pub fn render_shape(&self) -> String {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return "(empty tree)".to_string(),
        };
        let mut lines = Vec::with_capacity(self.len);
        let mut pending: Vec<(&Node, String, &str)> = vec![(root, String::new(), "*")];
        while let Some((node, prefix, marker)) = pending.pop() {
            lines.push(format!("{}{}- [{}]", prefix, marker, node.record));
            let child_prefix = prefix + if marker == "L" { "|  " } else { "   " };
            // Right is pushed first so the left branch is printed first.
            if let Some(right) = node.right.as_deref() {
                pending.push((right, child_prefix.clone(), "R"));
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, child_prefix, "L"));
            }
        }
        lines.join("\n")
    }
}

impl SearchTable {
    /// Walks down from `slot` to the link that holds `key`, or to the empty link where it
    /// would be attached.
    fn slot_mut(mut slot: &mut Link, key: Key) -> &mut Link {
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => key.cmp(&node.record.key),
                None => return slot,
            };
            slot = match (ordering, slot) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, found) => return found,
            };
        }
    }

    /// Detaches the leftmost node of `node`'s subtree. Returns its record and the remaining
    /// subtree, whose left spine is relinked bottom-up from an explicit stack.
    fn take_min(mut node: Box<Node>) -> (Record, Link) {
        let mut spine = Vec::new();
        while let Some(left) = node.left.take() {
            spine.push(node);
            node = left;
        }
        let Node { record, right, .. } = *node;
        let mut rest = right;
        while let Some(mut parent) = spine.pop() {
            parent.left = rest;
            rest = Some(parent);
        }
        (record, rest)
    }
}

impl Drop for SearchTable {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for SearchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTable")
            .field("len", &self.len)
            .field("records", &self.in_order())
            .finish()
    }
}

impl FromIterator<Record> for SearchTable {
    fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut table = SearchTable::new();
        table.bulk_load(records);
        table
    }
}

impl Extend<Record> for SearchTable {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for record in records {
            if let Err(err) = self.insert(record) {
                warn!("extend skipped a record: {}", err);
            }
        }
    }
}

struct Node {
    record: Record,
    left: Link,
    right: Link,
}

impl Node {
    fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }
}

/// Iterator that yields records in ascending key order.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: &'a Link) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root.as_deref());
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a SearchTable {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(keys: &[Key]) -> SearchTable {
        keys.iter()
            .map(|&key| Record::new(key, format!("n{}", key), "M", 20))
            .collect()
    }

    fn root_key(table: &SearchTable) -> Option<Key> {
        table.root.as_ref().map(|node| node.record.key)
    }

    #[test]
    fn two_child_removal_keeps_node_in_place() {
        let mut table = table_of(&[56, 19, 80, 5, 21, 64, 88]);
        table.remove(56).unwrap();
        // 64 is the successor of 56; it moves into the root node.
        assert_eq!(root_key(&table), Some(64));
        let right = table.root.as_ref().unwrap().right.as_ref().unwrap();
        assert_eq!(right.record.key, 80);
        assert!(right.left.is_none());
        assert!(table.is_ordered());
    }

    #[test]
    fn successor_right_child_is_spliced_up() {
        let mut table = table_of(&[50, 30, 70, 60, 80, 65]);
        table.remove(50).unwrap();
        assert_eq!(root_key(&table), Some(60));
        let right = table.root.as_ref().unwrap().right.as_ref().unwrap();
        assert_eq!(right.left.as_ref().map(|n| n.record.key), Some(65));
        assert_eq!(table.keys(), vec![30, 60, 65, 70, 80]);
    }

    #[test]
    fn successor_below_left_spine_is_relinked() {
        let mut table = table_of(&[10, 5, 40, 30, 20, 15, 17, 35]);
        table.remove(10).unwrap();
        assert_eq!(root_key(&table), Some(15));
        // 17 takes 15's place as the left child of 20.
        assert_eq!(table.depth_of(17), Some(5));
        assert_eq!(table.depth_of(20), Some(4));
        assert_eq!(table.depth_of(35), Some(4));
        assert_eq!(table.keys(), vec![5, 15, 17, 20, 30, 35, 40]);
        assert!(table.is_ordered());
    }

    #[test]
    fn one_child_root_is_promoted() {
        let mut table = table_of(&[10, 20, 30]);
        table.remove(10).unwrap();
        assert_eq!(root_key(&table), Some(20));
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn removing_last_record_empties_root() {
        let mut table = table_of(&[7]);
        table.remove(7).unwrap();
        assert!(table.root.is_none());
        assert_eq!(table.state(), TableState::Empty);
    }
}
