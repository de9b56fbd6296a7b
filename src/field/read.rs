//! Construct [`PatchValue`] from a dictionary
use super::PatchValue;
use crate::boundary::BoundaryCondition;
use crate::dictionary::Dictionary;
use crate::error::Result;
use ndarray::Array2;

impl PatchValue {
    /// Read condition and optional initial `value` for `n_faces` faces
    ///
    /// # Errors
    /// Invalid condition, or a `value` entry that is malformed or
    /// differs in size.
    pub fn from_dict(dict: &Dictionary, n_faces: usize) -> Result<Self> {
        let bc = BoundaryCondition::from_dict(dict)?;
        let value = if dict.found("value") {
            dict.get_vector_field("value", n_faces)?
        } else {
            Array2::zeros((n_faces, 3))
        };
        Ok(Self::with_value(bc, value))
    }

    /// Read from the sub-dictionary `patch` of the file `filename`
    ///
    /// # Errors
    /// File cannot be read, sub-dictionary is missing or invalid.
    pub fn read(filename: &str, patch: &str, n_faces: usize) -> Result<Self> {
        let dict = Dictionary::read(filename)?;
        Self::from_dict(dict.sub_dict(patch)?, n_faces)
    }
}
