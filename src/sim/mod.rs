//! Ray casting core
//!
//! Everything in here is pure and deterministic:
//! - No rendering or platform dependencies
//! - Seeded/injected RNG only
//! - Output order follows input order

pub mod fan;
pub mod intersect;
pub mod scene;
pub mod segment;

pub use fan::{cast_fan, nearest_hit, ray_angle};
pub use intersect::{intersect_distance, intersect_params};
pub use scene::Scene;
pub use segment::Segment;
