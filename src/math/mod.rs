pub mod quadratic;
pub mod tolerance;
pub mod vec2;

pub use quadratic::{solve_quadratic, Roots};
pub use tolerance::Tolerance;
pub use vec2::Vec2;
