//! # rs_mat4
//!
//! [Rust][rust] crate providing the 4 x 4 matrix and 4-component
//! row-vector math used by a real-time transform pipeline
//! (model/view/projection matrices for 3D rendering).
//!
//! Matrices follow the *row-vector* convention: a vector is treated
//! as a row and multiplied on the left, `v' = v * M`. The last row of
//! a transform matrix therefore carries the translation. Both types
//! are plain `Copy` values; all operations are pure functions over
//! their 16 (or 4) scalar components.
//!
//! ```rust
//! use rs_mat4::core::geometry::Vector4;
//! use rs_mat4::core::matrix::Matrix4;
//!
//!     let identity = Matrix4::default();
//!     let v = Vector4 {
//!         x: 1.0,
//!         y: 2.0,
//!         z: 3.0,
//!         w: 1.0,
//!     };
//!
//!     assert_eq!(identity * v, v);
//! ```
//!
//! [rust]: https://www.rust-lang.org

#[macro_use]
extern crate impl_ops;

pub mod core;
