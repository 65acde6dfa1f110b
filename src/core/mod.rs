//! The building blocks of the transform pipeline: a **Vector4** row
//! vector, the **Matrix4** type built from four of them, and the
//! transpose/inverse operations defined over matrices.
//!
//! ```rust
//! use rs_mat4::core::matrix::Matrix4;
//!
//!     let m = Matrix4::new(
//!         1.0, 0.0, 0.0, 0.0, //
//!         0.0, 1.0, 0.0, 0.0, //
//!         0.0, 0.0, 1.0, 0.0, //
//!         2.5, -4.0, 8.0, 1.0,
//!     );
//!
//!     assert_eq!(Matrix4::transpose(&Matrix4::transpose(&m)), m);
//! ```

pub mod geometry;
pub mod mat4;
pub mod matrix;
