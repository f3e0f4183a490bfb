//! Box geometry and collision queries
//!
//! Everything here is pure value computation except the movement methods,
//! which mutate the receiving box in place:
//! - No rendering or platform dependencies
//! - World access is read-only
//! - Every loop is bounded

pub mod aabb;
pub mod sweep;
pub mod world;

pub use aabb::Aabb;
pub use world::{Bounded, Entity, EntityWorld, World};
