//! # vmath-core
//!
//! Small-vector math for 2D and 3D graphics work.
//!
//! This crate provides the primitives a renderer, tool, or game loop reaches
//! for first:
//!
//! - [`Vec2`] - 2D vectors for screen positions and texture coordinates
//! - [`Vec3`] - 3D vectors for world positions, directions, and RGB colors
//! - [`Point2`], [`Point3`], [`Color3`] - intent-revealing aliases
//! - Strict delimited-string parsing with structured [`Error`]s
//!
//! # Design
//!
//! Arithmetic between vectors is component-wise; `*` and `/` with an `f32`
//! scale uniformly. The cross product is right-handed (`X.cross(Y) == Z`), and
//! [`Vec2::cross`] returns the scalar signed area. [`Display`](std::fmt::Display)
//! output is space-separated components, and parsing accepts a configurable
//! single-character delimiter:
//!
//! ```text
//! "3.0, 4.0"  ->  Vec2 { x: 3.0, y: 4.0 }
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vmath_core::{Vec2, Vec3};
//!
//! // Parse a point from user input
//! let p: Vec2 = "3.0, 4.0".parse().unwrap();
//! assert_eq!(p.length(), 5.0);
//!
//! // Build a surface normal
//! let n = Vec3::X.cross(Vec3::Y);
//! assert_eq!(n, Vec3::Z);
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` derives on [`Vec2`] and [`Vec3`]
//!
//! # Dependencies
//!
//! - [`glam`] - Fast SIMD-accelerated math, for interop
//! - `thiserror` - Structured parse errors
//!
//! # Used By
//!
//! - `vmath-cli` - Command-line vector calculator
//! - `vmath-tests` - Integration suite and demo binaries

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod parse;
mod vec2;
mod vec3;

pub use error::*;
pub use vec2::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Vec2 as GlamVec2, Vec3 as GlamVec3};
}
