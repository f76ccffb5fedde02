pub mod gravity;

pub use gravity::gravitational_accelerations;
