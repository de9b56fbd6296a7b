//! # Boundary value held by the host
//!
//! [`PatchValue`] stores the current vector of every face together with
//! the condition that computes it. Within one update cycle the condition
//! is evaluated at most once, [`PatchValue::reset`] starts the next cycle.
pub mod read;
pub mod write;

use crate::boundary::{BoundaryCondition, PatchField};
use crate::error::Result;
use crate::patch::Patch;
use ndarray::Array2;

/// Per-face boundary value and its condition
///
/// # Example
/// ```
/// use rustinlet::boundary::FixedValue;
/// use rustinlet::field::PatchValue;
/// use rustinlet::patch::{DiscPatch, Patch};
/// let disc = DiscPatch::new(1., 2, 4, [0.; 3], [0., 0., 1.]);
/// let mut value = PatchValue::new(FixedValue::new([0., 0., -1.]).into(), disc.n_faces());
/// value.update_coeffs(&disc, 0.).unwrap();
/// assert!(value.updated());
/// assert_eq!(value.value()[[3, 2]], -1.);
/// ```
#[derive(Debug, Clone)]
pub struct PatchValue {
    /// Boundary condition
    bc: BoundaryCondition,
    /// Current value, shape (n_faces, 3)
    value: Array2<f64>,
    /// Value is up to date in this cycle
    updated: bool,
}

impl PatchValue {
    /// Return new patch value, initialized with the prescribed vector
    /// of a fixed value condition and zeros otherwise
    #[must_use]
    pub fn new(bc: BoundaryCondition, n_faces: usize) -> Self {
        let mut value = Array2::<f64>::zeros((n_faces, 3));
        if let BoundaryCondition::FixedValue(fixed) = &bc {
            for mut row in value.rows_mut() {
                row.assign(&ndarray::aview1(&fixed.value()));
            }
        }
        Self::with_value(bc, value)
    }

    /// Return new patch value with initial `value`
    #[must_use]
    pub fn with_value(bc: BoundaryCondition, value: Array2<f64>) -> Self {
        PatchValue {
            bc,
            value,
            updated: false,
        }
    }

    /// Evaluate the condition on `patch` at `time`, unless this cycle
    /// is already up to date.
    ///
    /// # Errors
    /// Evaluation of the condition failed, the old value is kept.
    pub fn update_coeffs(&mut self, patch: &dyn Patch, time: f64) -> Result<()> {
        if self.updated {
            return Ok(());
        }
        self.value = self.bc.evaluate(patch, time)?;
        self.updated = true;
        Ok(())
    }

    /// Start a new update cycle
    pub fn reset(&mut self) {
        self.updated = false;
    }

    /// True if the value is up to date in this cycle
    pub fn updated(&self) -> bool {
        self.updated
    }

    /// Current value
    pub fn value(&self) -> &Array2<f64> {
        &self.value
    }

    /// Boundary condition
    pub fn boundary_condition(&self) -> &BoundaryCondition {
        &self.bc
    }
}
