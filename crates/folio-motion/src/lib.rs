//! Folio Motion
//!
//! Pure math behind the portfolio's pointer-reactive dock: map an icon's
//! distance from the pointer to a target size, then smooth that target with
//! spring physics.
//!
//! ## Overview
//!
//! The dock tracks the pointer along one axis. Each icon measures its own
//! center on that axis and feeds the signed distance through a three-point
//! piecewise-linear curve: size peaks when the pointer sits dead-center on
//! the icon, decays linearly to the resting size at the edge of the
//! influence radius, and stays flat beyond it. A spring integrator chases
//! the resulting target so the rendered size never jumps.
//!
//! This crate has no UI dependencies; the widget layer owns event plumbing
//! and rendering.
//!
//! ## Quick start
//!
//! ```
//! use folio_motion::{MagnifyCurve, Spring, SpringConfig, RESTING_SIZE};
//!
//! let curve = MagnifyCurve::default();
//! let mut spring = Spring::new(RESTING_SIZE, SpringConfig::DOCK);
//!
//! // Pointer 70px from the icon's center: halfway into the falloff.
//! spring.set_target(curve.target_size(70.0));
//!
//! // Tick at ~60fps until the size settles.
//! while !spring.is_settled() {
//!     spring.tick(1.0 / 60.0);
//! }
//! assert!((spring.value() - 50.0).abs() < 0.01);
//! ```

pub mod curve;
pub mod geometry;
pub mod spring;

pub use curve::{MagnifyCurve, DEFAULT_DISTANCE, DEFAULT_MAGNIFICATION, RESTING_SIZE};
pub use geometry::{Axis, Rect};
pub use spring::{Spring, SpringConfig};
