pub mod boundary;
pub mod detection;
pub mod manifold;

// Re-export key types
pub use boundary::{contain, EdgeHits};
pub use detection::check_circle_circle;
pub use manifold::CollisionManifold;
