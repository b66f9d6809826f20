//! Unbalanced binary search tree keyed by record key.

use std::cmp::Ordering;

use crate::record::Record;

#[derive(Debug)]
struct Node {
    record: Record,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
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

/// Binary search tree without rebalancing.
///
/// The shape is dictated entirely by insertion order: sorted input
/// degenerates into a chain of depth `n`. The experiments deliberately keep
/// that behavior reproducible as the contrast case for the AVL variant.
///
/// Every operation reports how many nodes it visited; the counter is an
/// explicit accumulator threaded through the recursion, so a shared tree
/// can be probed from multiple test threads without interior mutability.
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a record, returning the number of nodes visited during the
    /// descent. The terminal empty slot that receives the new node counts
    /// as one visit, so inserting into an empty tree returns 1.
    ///
    /// Re-inserting an existing key is a no-op: the descent stops at the
    /// equal node and the returned count covers only the nodes visited.
    pub fn insert(&mut self, record: Record) -> u64 {
        let mut iterations = 0;
        if Self::insert_at(&mut self.root, record, &mut iterations) {
            self.len += 1;
        }
        iterations
    }

    fn insert_at(slot: &mut Option<Box<Node>>, record: Record, iterations: &mut u64) -> bool {
        *iterations += 1;
        match slot {
            None => {
                *slot = Some(Box::new(Node::new(record)));
                true
            }
            Some(node) => match record.key.cmp(&node.record.key) {
                Ordering::Less => Self::insert_at(&mut node.left, record, iterations),
                Ordering::Greater => Self::insert_at(&mut node.right, record, iterations),
                Ordering::Equal => false,
            },
        }
    }

    /// Looks up a key, returning the record (if present) and the number of
    /// nodes visited. Reaching an empty subtree ends the search without a
    /// further increment, so a miss in an empty tree costs 0.
    pub fn search(&self, key: u32) -> (Option<&Record>, u64) {
        let mut iterations = 0;
        let found = Self::search_at(self.root.as_deref(), key, &mut iterations);
        (found, iterations)
    }

    fn search_at<'a>(node: Option<&'a Node>, key: u32, iterations: &mut u64) -> Option<&'a Record> {
        let node = node?;
        *iterations += 1;
        match key.cmp(&node.record.key) {
            Ordering::Less => Self::search_at(node.left.as_deref(), key, iterations),
            Ordering::Greater => Self::search_at(node.right.as_deref(), key, iterations),
            Ordering::Equal => Some(&node.record),
        }
    }

    /// Depth of the deepest node: 0 for an empty tree, 1 for a single node.
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_deref())
    }

    fn height_of(node: Option<&Node>) -> usize {
        match node {
            None => 0,
            Some(node) => {
                1 + Self::height_of(node.left.as_deref()).max(Self::height_of(node.right.as_deref()))
            }
        }
    }

    /// Keys in ascending order.
    pub fn in_order_keys(&self) -> Vec<u32> {
        let mut keys = Vec::with_capacity(self.len);
        Self::collect_in_order(self.root.as_deref(), &mut keys);
        keys
    }

    fn collect_in_order(node: Option<&Node>, keys: &mut Vec<u32>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), keys);
            keys.push(node.record.key);
            Self::collect_in_order(node.right.as_deref(), keys);
        }
    }
}
