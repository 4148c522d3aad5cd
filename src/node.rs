use std::cmp::{self, Ordering};

pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: usize,
}

/// Returns the cached height of a subtree, 0 for an absent one.
pub(crate) fn height_of<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(node) => node.height,
    }
}

/// Returns left height minus right height of a subtree, 0 for an absent one.
pub(crate) fn balance_factor<K>(link: &Link<K>) -> isize {
    match link {
        None => 0,
        Some(node) => node.balance_factor(),
    }
}

/// Returns the node holding the smallest key of the subtree rooted at `node`.
pub(crate) fn min_node<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}

/// Returns the node holding the largest key of the subtree rooted at `node`.
pub(crate) fn max_node<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(right) = current.right.as_deref() {
        current = right;
    }
    current
}

impl<K> Node<K> {
    fn create(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    fn balance_factor(&self) -> isize {
        height_of(&self.left) as isize - height_of(&self.right) as isize
    }

    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(height_of(&self.left), height_of(&self.right));
    }

    // Left child takes the place of `node`, which becomes its right child.
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        match node.left.take() {
            None => node,
            Some(mut left_node) => {
                log::trace!("rotate right at height {}", node.height);
                node.left = left_node.right.take();
                node.adjust_height();
                left_node.right = Some(node);
                left_node.adjust_height();
                left_node
            }
        }
    }

    // Right child takes the place of `node`, which becomes its left child.
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        match node.right.take() {
            None => node,
            Some(mut right_node) => {
                log::trace!("rotate left at height {}", node.height);
                node.right = right_node.left.take();
                node.adjust_height();
                right_node.left = Some(node);
                right_node.adjust_height();
                right_node
            }
        }
    }

    /// Adjusts height and restores the AVL condition at `node` after an insertion
    /// below it. `outer` tells whether the new key went into the outer subtree of
    /// the child it descended into (left-left or right-right).
    /// A single insertion needs at most one single or double rotation in total.
    fn rebalance_insert(mut node: Box<Self>, outer: bool) -> Box<Self> {
        node.adjust_height();
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        if balance > 1 {
            if !outer {
                node.left = node.left.take().map(Self::rotate_left);
            }
            Self::rotate_right(node)
        } else if balance < -1 {
            if !outer {
                node.right = node.right.take().map(Self::rotate_right);
            }
            Self::rotate_left(node)
        } else {
            node
        }
    }

    /// Adjusts height and restores the AVL condition at `node` after a removal
    /// below it. Unlike insertion, every ancestor of a removal may need one.
    fn rebalance_remove(mut node: Box<Self>) -> Box<Self> {
        node.adjust_height();
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        if balance > 1 {
            if balance_factor(&node.left) < 0 {
                node.left = node.left.take().map(Self::rotate_left);
            }
            Self::rotate_right(node)
        } else if balance < -1 {
            if balance_factor(&node.right) > 0 {
                node.right = node.right.take().map(Self::rotate_right);
            }
            Self::rotate_left(node)
        } else {
            node
        }
    }
}

impl<K: Ord> Node<K> {
    /// Inserts `key` into the subtree at `link`.
    /// Returns the new subtree root and whether a node has been created.
    ///
    /// An already present key leaves the subtree untouched, heights on the
    /// path included.
    pub(crate) fn insert(link: Link<K>, key: K) -> (Box<Self>, bool) {
        let mut node = match link {
            None => return (Self::create(key), true),
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Equal => (node, false),
            Ordering::Less => {
                let outer = node.left.as_ref().map_or(true, |left| key < left.key);
                let (left, inserted) = Self::insert(node.left.take(), key);
                node.left = Some(left);
                if inserted {
                    node = Self::rebalance_insert(node, outer);
                }
                (node, inserted)
            }
            Ordering::Greater => {
                let outer = node.right.as_ref().map_or(true, |right| key > right.key);
                let (right, inserted) = Self::insert(node.right.take(), key);
                node.right = Some(right);
                if inserted {
                    node = Self::rebalance_insert(node, outer);
                }
                (node, inserted)
            }
        }
    }

    /// Returns the node holding `key` in the subtree at `link`, if any.
    pub(crate) fn find<'a>(link: &'a Link<K>, key: &K) -> Option<&'a Node<K>> {
        let mut current = link.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            }
        }
        current
    }
}

impl<K: Ord + Clone> Node<K> {
    /// Removes `key` from the subtree rooted at `node`.
    /// Returns the new subtree root (absent if the subtree became empty) and
    /// whether a node has been removed.
    ///
    /// A node with at most one child is replaced by that child. A node with two
    /// children keeps its place, takes over the key of its in-order successor and
    /// the successor is removed from the right subtree instead.
    pub(crate) fn delete(mut node: Box<Self>, key: &K) -> (Link<K>, bool) {
        let removed = match key.cmp(&node.key) {
            Ordering::Less => match node.left.take() {
                None => false,
                Some(left) => {
                    let (left, removed) = Self::delete(left, key);
                    node.left = left;
                    removed
                }
            },
            Ordering::Greater => match node.right.take() {
                None => false,
                Some(right) => {
                    let (right, removed) = Self::delete(right, key);
                    node.right = right;
                    removed
                }
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => {
                    log::trace!("unlink leaf");
                    return (None, true);
                }
                (Some(child), None) | (None, Some(child)) => {
                    log::trace!("unlink stem, child takes its place");
                    return (Some(child), true);
                }
                (Some(left), Some(right)) => {
                    node.key = min_node(&right).key.clone();
                    let (right, removed) = Self::delete(right, &node.key);
                    debug_assert!(removed);
                    node.left = Some(left);
                    node.right = right;
                    true
                }
            },
        };
        if removed {
            node = Self::rebalance_remove(node);
        }
        (Some(node), removed)
    }
}

/// Asserts ordering, balance and height of every node in the subtree at `link`
/// with keys strictly between `lower` and `upper`.
/// Returns the number of nodes in the subtree.
#[cfg(any(test, feature = "consistency_check"))]
pub(crate) fn check_subtree<K: Ord>(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> usize {
    match link {
        None => 0,
        Some(node) => {
            // Check ordering against all ancestors
            if let Some(lower) = lower {
                assert!(*lower < node.key);
            }
            if let Some(upper) = upper {
                assert!(node.key < *upper);
            }

            let num_left = check_subtree(&node.left, lower, Some(&node.key));
            let num_right = check_subtree(&node.right, Some(&node.key), upper);

            // Check height
            let left_height = height_of(&node.left);
            let right_height = height_of(&node.right);
            assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            num_left + num_right + 1
        }
    }
}
