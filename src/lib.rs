//! An ordered set of unique keys implemented with an AVL tree.
//!
//! Every node exclusively owns its children. Insertion and deletion descend
//! recursively and restore the AVL condition with rotations while unwinding,
//! so the height of the tree stays logarithmic in the number of keys.
//!
//! ```
//! use avl_set::AvlTree;
//! let tree: AvlTree<i32> = [10, 5, 15, 3, 7, 12, 17].into_iter().collect();
//! assert_eq!(tree.in_order(), vec![3, 5, 7, 10, 12, 15, 17]);
//! assert_eq!(tree.height(), 3);
//! ```

mod iter;
mod node;
mod tree;

#[cfg(any(test, feature = "quickcheck"))]
mod arbitrary;

pub use iter::Iter;
pub use tree::AvlTree;
