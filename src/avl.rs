//! Height-balanced binary search tree with rotation-based rebalancing.

use std::cmp::Ordering;

use crate::record::Record;

#[derive(Debug)]
struct Node {
    record: Record,
    /// Cached subtree height; always `1 + max(child heights)`.
    height: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(record: Record) -> Self {
        Self {
            record,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recompute the cached height from the children's cached heights.
    /// Must run immediately after any structural change under this node.
    fn refresh_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }

    fn balance(&self) -> isize {
        height_of(&self.left) as isize - height_of(&self.right) as isize
    }
}

fn height_of(slot: &Option<Box<Node>>) -> usize {
    slot.as_ref().map_or(0, |node| node.height)
}

/// AVL tree: the balanced counterpart of [`crate::BinarySearchTree`].
///
/// Insertion descends like a plain BST (same iteration counting), then
/// unwinds refreshing cached heights and applying at most one of the four
/// classic rebalance cases per ancestor. Each performed rotation adds one
/// to the reported iteration count.
#[derive(Debug, Default)]
pub struct AVLTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl AVLTree {
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

    /// Inserts a record. The count covers the BST-style descent (one per
    /// node visited, including the terminal empty slot) plus one per
    /// rotation performed while rebalancing. Duplicate keys are no-ops
    /// whose count covers only the descent.
    pub fn insert(&mut self, record: Record) -> u64 {
        let mut iterations = 0;
        let (root, inserted) = Self::insert_at(self.root.take(), record, &mut iterations);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        iterations
    }

    fn insert_at(
        slot: Option<Box<Node>>,
        record: Record,
        iterations: &mut u64,
    ) -> (Box<Node>, bool) {
        *iterations += 1;
        let Some(mut node) = slot else {
            return (Box::new(Node::new(record)), true);
        };

        let key = record.key;
        let inserted = match key.cmp(&node.record.key) {
            Ordering::Less => {
                let (child, inserted) = Self::insert_at(node.left.take(), record, iterations);
                node.left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let (child, inserted) = Self::insert_at(node.right.take(), record, iterations);
                node.right = Some(child);
                inserted
            }
            Ordering::Equal => return (node, false),
        };
        if !inserted {
            return (node, false);
        }

        node.refresh_height();
        (Self::rebalance(node, key, iterations), true)
    }

    /// Applies at most one rebalance case. The case is selected by
    /// comparing the freshly inserted key against the taller child's key,
    /// not by which side the recursion returned from.
    fn rebalance(mut node: Box<Node>, key: u32, iterations: &mut u64) -> Box<Node> {
        let balance = node.balance();
        if balance > 1 {
            match node.left.as_deref().map(|child| key.cmp(&child.record.key)) {
                Some(Ordering::Less) => return Self::rotate_right(node, iterations),
                Some(Ordering::Greater) => {
                    node.left = node
                        .left
                        .take()
                        .map(|child| Self::rotate_left(child, iterations));
                    return Self::rotate_right(node, iterations);
                }
                _ => {}
            }
        } else if balance < -1 {
            match node.right.as_deref().map(|child| key.cmp(&child.record.key)) {
                Some(Ordering::Greater) => return Self::rotate_left(node, iterations),
                Some(Ordering::Less) => {
                    node.right = node
                        .right
                        .take()
                        .map(|child| Self::rotate_right(child, iterations));
                    return Self::rotate_left(node, iterations);
                }
                _ => {}
            }
        }
        node
    }

    /// Right rotation: the left child becomes the subtree root. Heights
    /// are refreshed for the demoted node first, then the new root.
    fn rotate_right(mut node: Box<Node>, iterations: &mut u64) -> Box<Node> {
        // A rotation is only requested when the pivot child exists.
        let Some(mut pivot) = node.left.take() else {
            return node;
        };
        *iterations += 1;
        node.left = pivot.right.take();
        node.refresh_height();
        pivot.right = Some(node);
        pivot.refresh_height();
        pivot
    }

    /// Left rotation, mirror of [`Self::rotate_right`].
    fn rotate_left(mut node: Box<Node>, iterations: &mut u64) -> Box<Node> {
        let Some(mut pivot) = node.right.take() else {
            return node;
        };
        *iterations += 1;
        node.right = pivot.left.take();
        node.refresh_height();
        pivot.left = Some(node);
        pivot.refresh_height();
        pivot
    }

    /// Looks up a key; same contract as the BST search, but the balanced
    /// shape keeps the visit count logarithmic.
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

    /// Height from the root's cached value: 0 for an empty tree.
    pub fn height(&self) -> usize {
        height_of(&self.root)
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

    /// Verify the balance invariant at every node, recomputing heights from
    /// the structure instead of trusting the cache. Also fails if a cached
    /// height disagrees with the recomputed one.
    pub fn is_balanced(&self) -> bool {
        Self::checked_height(self.root.as_deref()).is_some()
    }

    fn checked_height(node: Option<&Node>) -> Option<usize> {
        let Some(node) = node else {
            return Some(0);
        };
        let left = Self::checked_height(node.left.as_deref())?;
        let right = Self::checked_height(node.right.as_deref())?;
        if (left as isize - right as isize).abs() > 1 {
            return None;
        }
        let height = 1 + left.max(right);
        if height != node.height {
            return None;
        }
        Some(height)
    }
}
