//! Certified Zariski-Van Kampen computation of the fundamental group of a
//! plane algebraic curve's complement in `C^2`.
//!
//! ## Kernel
//!
//! [Complex numbers and simplification](numeric/index.html)
//!
//! [Univariate polynomials](polynomial/struct.Poly.html)
//!
//! [Bivariate polynomials](bivariate/struct.BiPoly.html)
//!
//! ## Geometry
//!
//! [Planar helpers](geometry/index.html)
//!
//! [Loop graph construction](loops/struct.LoopGraph.html)
//!
//! ## Braids and groups
//!
//! [Braid monoid](braid/struct.Braid.html)
//!
//! [Free group and Hurwitz action](group/index.html)
//!
//! ## Monodromy
//!
//! [Approximate and certified followers](monodromy/index.html)
//!
//! ## Driving the pipeline
//!
//! [`prepare`](driver/fn.prepare.html), [`run_segments`](driver/fn.run_segments.html)
//! and [`finish`](driver/fn.finish.html), or [`driver::run`] for all three at
//! once. [`persistence`] reads and writes the `.prep`/`.seg.<i>` snapshot
//! files these stages produce.

#![warn(missing_docs)]

pub mod bivariate;
pub mod braid;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod group;
pub mod loops;
pub mod monodromy;
pub mod numeric;
pub mod persistence;
pub mod polynomial;

pub use config::Config;
pub use driver::{finish, prepare, run, run_segments, PipelineResult, Prepared};
pub use error::{Error, Result};
pub use group::Presentation;
