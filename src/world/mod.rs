pub mod physics_world;
pub mod scene;

pub use physics_world::World;
pub use scene::{scatter_bodies, ScatterOptions};
