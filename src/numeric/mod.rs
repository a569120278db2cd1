//! Small numeric utilities reused alongside the containers.

mod fenwick;
mod matrix;
mod segment_tree;
mod vector2d;

pub use fenwick::BinaryIndexedTree;
pub use matrix::Matrix2D;
pub use segment_tree::SegmentTree;
pub use vector2d::Vector2D;
