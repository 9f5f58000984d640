//! Self-balancing binary search tree keyed by `i64`
//!
//! Nodes are uniquely owned by their parent (`Option<Box<Node>>`), so
//! rotations are pure ownership moves with no aliasing. The height convention
//! is: an absent child has height 0, a leaf has height 1, and every node
//! satisfies `height = 1 + max(height(left), height(right))`.

use std::cmp::Ordering;
use std::mem;

/// Owned link to a subtree; `None` is the empty tree.
type Link = Option<Box<Node>>;

/// A tree node owning both of its subtrees.
#[derive(Debug, Clone)]
struct Node {
    /// Search key.
    key: i64,
    /// Value associated with the key.
    value: i64,
    /// Cached subtree height; a leaf stores 1.
    height: usize,
    /// Left subtree, all keys strictly smaller.
    left: Link,
    /// Right subtree, all keys strictly greater.
    right: Link,
}

impl Node {
    /// Creates a leaf node.
    fn leaf(key: i64, value: i64) -> Box<Self> {
        Box::new(Self { key, value, height: 1, left: None, right: None })
    }
}

/// An AVL tree mapping `i64` keys to `i64` values.
///
/// Insert and remove rebalance every node on the path back to the root, which
/// bounds the tree height to O(log n) regardless of insertion order. A
/// value-only overwrite of an existing key never changes the structure.
#[derive(Debug, Clone, Default)]
pub struct AvlTree {
    /// Root of the tree; `None` when empty.
    root: Link,
}

impl AvlTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns true if the tree holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a key-value pair.
    ///
    /// A new key is added and the path to the root rebalanced. An existing key
    /// has its value overwritten in place with no structural change; the
    /// previous value is returned.
    pub fn insert(&mut self, key: i64, value: i64) -> Option<i64> {
        let mut replaced = None;
        self.root = Some(insert_node(self.root.take(), key, value, &mut replaced));
        replaced
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// Two-child nodes are removed by successor replacement: the leftmost
    /// entry of the right subtree is copied into the node, then deleted from
    /// the right subtree. The path to the root is rebalanced.
    pub fn remove(&mut self, key: i64) -> Option<i64> {
        let mut removed = None;
        self.root = remove_node(self.root.take(), key, &mut removed);
        removed
    }

    /// Returns true if the key is present. Pure lookup, no rebalancing.
    #[must_use]
    pub fn contains(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value stored for the key, if any.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<i64> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.value),
            };
        }
        None
    }

    /// Visits every entry in key order. Used by the bucketed table's rehash.
    pub(crate) fn for_each<F: FnMut(i64, i64)>(&self, visit: &mut F) {
        visit_in_order(self.root.as_deref(), visit);
    }
}

/// Height of a possibly-empty subtree.
fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Recomputes a node's cached height from its children.
fn update_height(node: &mut Node) {
    node.height = height(&node.left).max(height(&node.right)).saturating_add(1);
}

/// Height difference `left - right`; in [-1, 1] for a balanced node.
#[allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)]
fn balance_factor(node: &Node) -> isize {
    // Heights are bounded by the tree depth, far below isize::MAX.
    height(&node.left) as isize - height(&node.right) as isize
}

/// Rotates the subtree right around its left child and returns the new root.
fn rotate_right(mut root: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = root.left.take() else {
        // Callers only rotate a left-heavy node, which has a left child.
        return root;
    };
    root.left = pivot.right.take();
    update_height(&mut root);
    pivot.right = Some(root);
    update_height(&mut pivot);
    pivot
}

/// Rotates the subtree left around its right child and returns the new root.
fn rotate_left(mut root: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = root.right.take() else {
        return root;
    };
    root.right = pivot.left.take();
    update_height(&mut root);
    pivot.left = Some(root);
    update_height(&mut pivot);
    pivot
}

/// Restores the AVL invariant at this node after a child changed.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    update_height(&mut node);
    let balance = balance_factor(&node);

    if balance > 1 {
        // Left-right case: rotate the left child left first.
        if node.left.as_deref().is_some_and(|left| balance_factor(left) < 0) {
            if let Some(left) = node.left.take() {
                node.left = Some(rotate_left(left));
            }
        }
        return rotate_right(node);
    }

    if balance < -1 {
        // Right-left case: rotate the right child right first.
        if node.right.as_deref().is_some_and(|right| balance_factor(right) > 0) {
            if let Some(right) = node.right.take() {
                node.right = Some(rotate_right(right));
            }
        }
        return rotate_left(node);
    }

    node
}

/// Recursive insert; rebalances each node on the unwind path.
fn insert_node(link: Link, key: i64, value: i64, replaced: &mut Option<i64>) -> Box<Node> {
    let Some(mut node) = link else {
        return Node::leaf(key, value);
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), key, value, replaced)),
        Ordering::Greater => {
            node.right = Some(insert_node(node.right.take(), key, value, replaced));
        }
        Ordering::Equal => {
            // Value overwrite: no structural change, no rebalancing.
            *replaced = Some(mem::replace(&mut node.value, value));
            return node;
        }
    }

    rebalance(node)
}

/// Recursive remove; rebalances each node on the unwind path.
fn remove_node(link: Link, key: i64, removed: &mut Option<i64>) -> Link {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove_node(node.left.take(), key, removed),
        Ordering::Greater => node.right = remove_node(node.right.take(), key, removed),
        Ordering::Equal => {
            *removed = Some(node.value);
            return remove_found(node);
        }
    }

    Some(rebalance(node))
}

/// Detaches the matched node, reattaching its subtrees.
fn remove_found(mut node: Box<Node>) -> Link {
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            // Copy the in-order successor into this node, then delete the
            // successor from the right subtree.
            let (successor_key, successor_value) = leftmost(&right);
            node.key = successor_key;
            node.value = successor_value;
            node.left = Some(left);
            let mut shadow = None;
            node.right = remove_node(Some(right), successor_key, &mut shadow);
            Some(rebalance(node))
        }
    }
}

/// Key and value of the leftmost (minimum) entry of a subtree.
fn leftmost(node: &Node) -> (i64, i64) {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    (current.key, current.value)
}

/// In-order traversal over borrowed nodes.
fn visit_in_order<F: FnMut(i64, i64)>(node: Option<&Node>, visit: &mut F) {
    if let Some(node) = node {
        visit_in_order(node.left.as_deref(), visit);
        visit(node.key, node.value);
        visit_in_order(node.right.as_deref(), visit);
    }
}
