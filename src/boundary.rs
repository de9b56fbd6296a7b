//! # Boundary conditions
//!
//! A boundary condition turns a patch snapshot and the simulation time
//! into one velocity vector per face. Conditions are selected by the
//! `type` keyword of their dictionary.
//!
//! Implemented:
//! - `fourierParabolic`: pulsatile parabolic profile, flow rate from a
//!   Fourier series
//! - `fixedValue`: uniform prescribed vector
//!
//! # Example
//! ```
//! use rustinlet::boundary::{BoundaryCondition, PatchField};
//! use rustinlet::dictionary::Dictionary;
//! use rustinlet::patch::DiscPatch;
//! let dict: Dictionary = "type fourierParabolic; Q ((3 0) (0 2)); omega 6.283185307179586;"
//!     .parse()
//!     .unwrap();
//! let bc = BoundaryCondition::from_dict(&dict).unwrap();
//! let disc = DiscPatch::new(0.5, 8, 16, [0., 0., 0.], [0., 0., -1.]);
//! let u = bc.evaluate(&disc, 0.).unwrap();
//! assert_eq!(u.shape(), &[128, 3]);
//! // Positive flow rate enters the domain, against the outward normal
//! assert!(u.column(2).iter().all(|uz| *uz > -1e-12));
//! assert!(u.column(2).sum() > 0.);
//! ```
pub mod fixed_value;
pub mod fourier_parabolic;
pub use fixed_value::FixedValue;
pub use fourier_parabolic::FourierParabolic;

use crate::dictionary::Dictionary;
use crate::error::{ConfigError, Result};
use crate::patch::Patch;
use enum_dispatch::enum_dispatch;
use ndarray::Array2;

/// Capability of a boundary condition: prescribe a vector per face.
#[enum_dispatch]
pub trait PatchField {
    /// Name under which the condition is registered
    fn type_name(&self) -> &'static str;

    /// Return one vector per face of `patch` at `time`, shape (n_faces, 3).
    ///
    /// The geometry is read anew on every call.
    ///
    /// # Errors
    /// Violated geometry preconditions or a non-finite time.
    fn evaluate(&self, patch: &dyn Patch, time: f64) -> Result<Array2<f64>>;

    /// Write the configuration, including `type`
    fn write(&self, dict: &mut Dictionary);
}

/// Enum of all registered boundary conditions.
#[enum_dispatch(PatchField)]
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryCondition {
    /// Pulsatile parabolic profile
    FourierParabolic(FourierParabolic),
    /// Uniform prescribed vector
    FixedValue(FixedValue),
}

type Constructor = fn(&Dictionary) -> Result<BoundaryCondition>;

/// Type names and their constructors
const REGISTRY: &[(&str, Constructor)] = &[
    (FourierParabolic::TYPE_NAME, new_fourier_parabolic),
    (FixedValue::TYPE_NAME, new_fixed_value),
];

fn new_fourier_parabolic(dict: &Dictionary) -> Result<BoundaryCondition> {
    Ok(FourierParabolic::from_dict(dict)?.into())
}

fn new_fixed_value(dict: &Dictionary) -> Result<BoundaryCondition> {
    Ok(FixedValue::from_dict(dict)?.into())
}

/// Names of all registered boundary conditions
pub fn registered_types() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

impl BoundaryCondition {
    /// Construct the condition named by the `type` entry of `dict`
    ///
    /// # Errors
    /// Missing or unknown `type`, or invalid entries of the condition.
    pub fn from_dict(dict: &Dictionary) -> Result<Self> {
        let name = dict.get_word("type")?;
        let (_, constructor) = REGISTRY
            .iter()
            .find(|(registered, _)| *registered == name)
            .ok_or_else(|| ConfigError::UnknownType {
                name: name.to_string(),
                known: registered_types().join(", "),
            })?;
        constructor(dict)
    }
}
