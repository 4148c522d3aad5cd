use std::fmt;
use std::iter::FromIterator;

#[cfg(any(test, feature = "consistency_check"))]
use crate::node::check_subtree;
use crate::node::{self, Link, Node};
use crate::Iter;

/// An ordered set of unique keys implemented with an AVL tree.
///
/// ```
/// use avl_set::AvlTree;
/// let mut tree = AvlTree::with_root(10);
/// tree.insert(5);
/// tree.insert(15);
/// assert!(!tree.insert(5));
/// tree.delete(&10);
/// assert_eq!(tree.in_order(), vec![5, 15]);
/// ```
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    num_nodes: usize,
}

impl<K: Ord> AvlTree<K> {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Creates a tree holding a single root key.
    pub fn with_root(key: K) -> Self {
        let mut tree = Self::new();
        tree.insert(key);
        tree
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 if empty and 1 for a single key.
    pub fn height(&self) -> usize {
        node::height_of(&self.root)
    }

    /// Removes all keys, deallocating all nodes.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns true if the tree contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        Node::find(&self.root, key).is_some()
    }

    /// Returns a reference to the key in the tree that is equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        Node::find(&self.root, key).map(|node| &node.key)
    }

    /// Returns the smallest key.
    pub fn first(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &node::min_node(root).key)
    }

    /// Returns the largest key.
    pub fn last(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &node::max_node(root).key)
    }

    /// Inserts a key into the tree.
    /// Returns false and leaves the tree unchanged if the key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, inserted) = Node::insert(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.num_nodes += 1;
        }
        inserted
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.num_nodes)
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check ordering, heights and AVL condition of all nodes
        let num_nodes = check_subtree(&self.root, None, None);

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.is_empty(), self.num_nodes == 0);
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Link<K> {
        &self.root
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    /// Removes a key from the tree.
    /// Returns whether the key was previously in the tree.
    pub fn delete(&mut self, key: &K) -> bool {
        let removed = match self.root.take() {
            None => false,
            Some(root) => {
                let (root, removed) = Node::delete(root, key);
                self.root = root;
                removed
            }
        };
        if removed {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }

    /// Returns all keys in ascending order.
    pub fn in_order(&self) -> Vec<K> {
        self.iter().cloned().collect()
    }
}

impl<K: Ord> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Iter::new(self.root.as_deref(), self.num_nodes))
            .finish()
    }
}

impl<K: Ord> PartialEq for AvlTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord> Eq for AvlTree<K> {}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Ord> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
