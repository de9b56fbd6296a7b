#![warn(missing_docs)]
//! # rustinlet: time-periodic inlet velocity profiles
//!
//! This library prescribes the velocity on an inflow boundary patch of a
//! finite volume mesh. The flow rate through the patch is a truncated
//! Fourier series in time,
//! $$
//! Q(t) = \Re \sum_{n=0}^{N-1} Q_n e^{i n \omega t},
//! $$
//! and is distributed over the patch as a parabolic (Poiseuille) profile
//! around the patch centre.
//!
//! Currently rustinlet implements the following boundary conditions:
//! - fourierParabolic (pulsatile parabolic profile)
//! - fixedValue (uniform vector)
//!
//! Conditions are configured with a keyword dictionary, see [`dictionary`],
//! and evaluated on any geometry that implements [`Patch`].
//!
//! # Example
//! Evaluate a pulsatile profile on a circular patch
//! ```
//! use rustinlet::{BoundaryCondition, Dictionary, DiscPatch, PatchField};
//! let dict: Dictionary = "type fourierParabolic; Q ((3 0) (0 2)); omega 6.283185307179586;"
//!     .parse()
//!     .unwrap();
//! let bc = BoundaryCondition::from_dict(&dict).unwrap();
//! let disc = DiscPatch::new(0.5, 8, 16, [0., 0., 0.], [0., 0., -1.]);
//! let u = bc.evaluate(&disc, 0.25).unwrap();
//! assert_eq!(u.shape(), &[128, 3]);
//! ```
pub mod boundary;
pub mod dictionary;
pub mod error;
pub mod field;
pub mod fourier;
pub mod integrate;
pub mod patch;
pub mod profile;
pub use boundary::{BoundaryCondition, FixedValue, FourierParabolic, PatchField};
pub use dictionary::Dictionary;
pub use error::{ConfigError, Error, GeometryError, Result};
pub use field::PatchValue;
pub use fourier::FourierSeries;
pub use integrate::{integrate, Integrate, PulsatileInlet};
pub use patch::{BoundBox, DiscPatch, Patch, PatchGeometry};
