//! Static KD-tree over k-dimensional points.
//!
//! The tree is built once from a point set and then answers two read-only
//! queries: the exact nearest neighbor of a point and every point inside an
//! axis-aligned box (orthotope).
//!
//! ```
//! use kdindex::KdTree;
//!
//! let tree = KdTree::new([[3.0, 3.0], [4.0, 2.0], [2.0, 4.0], [1.0, 1.0], [6.0, 6.0], [5.0, 2.0]])?;
//! assert_eq!(tree.nearest_neighbor(&[9.0, 2.0])?, &[5.0, 2.0]);
//! assert_eq!(tree.points_in_orthotope(&[4.0, 2.0], &[14.0, 16.0])?.len(), 3);
//! # Ok::<(), kdindex::Error>(())
//! ```
mod distance;
mod error;
mod kdtree;
mod node;
mod orthotope;

pub use error::{Error, InputError, Result};
pub use kdtree::KdTree;
