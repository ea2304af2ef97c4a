mod aabb;
mod color;
mod ray;
mod triangle;

pub use aabb::AABB;
pub use color::hex_to_rgb;
pub use ray::{intersect_aabb, Ray};
pub use triangle::{moller_trumbore, nearest_triangle_hit};
