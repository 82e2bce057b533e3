//! Data model for constituency trees.
//!
//! # Tree representation
//! Trees are represented by [TreeNode], a plain owned composite: a label and
//! an ordered `Vec` of child nodes. Each node exclusively owns its children;
//! there is no arena, no shared ownership, and no parent back-pointers.
//! Consumers that need parent links should maintain them externally.
//!
//! Terminal / pre-terminal / internal are computed predicates on structure,
//! not variants, so post-processing can freely mutate a tree without keeping
//! flags in sync.
//!
//! # Traversal
//! [TreeNode::pre_order_iter] walks the tree parents-first with an explicit
//! stack. The query operations — [TreeNode::select_dfs],
//! [TreeNode::pre_terminals], [TreeNode::to_text] — are all built on it.

pub mod tree;

pub use tree::PreOrderIter;
pub use tree::TreeNode;
