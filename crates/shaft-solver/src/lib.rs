//! Shaft diameter solver for combined twisting and axial loading.
//!
//! This crate sizes a solid circular shaft under a twisting moment and an
//! axial pull using the Maximum Shear Stress Theory of Failure. The design
//! criterion is cleared to a polynomial in the unknown diameter, a sign-change
//! bracket is located by an integer scan, and the root is refined with the
//! Regula Falsi (false position) method.

pub mod bracket;
pub mod config;
pub mod criterion;
pub mod error;
pub mod regula_falsi;
pub mod solve;

pub use bracket::Bracket;
pub use config::{SolverConfig, Variant};
pub use criterion::ShearCriterion;
pub use error::{SolverError, SolverResult};
pub use regula_falsi::RegulaFalsiResult;
pub use solve::{DiameterSolution, solve_diameter};
