pub mod circle;
pub mod line_segment;
pub mod rectangle;
pub mod triangle;

// Re-export the specific shape types
pub use circle::{Circle, LineIntersection};
pub use line_segment::{LineForm, LineSegment};
pub use rectangle::{Rectangle, RectangleBounds};
pub use triangle::Triangle;
