//! Uniform prescribed vector
use super::PatchField;
use crate::dictionary::Dictionary;
use crate::error::{ConfigError, Error, Result};
use crate::patch::{check_patch, Patch};
use ndarray::{aview1, Array2};

/// Same vector on every face, independent of time
#[derive(Debug, Clone, PartialEq)]
pub struct FixedValue {
    value: [f64; 3],
}

impl FixedValue {
    /// Registered type name
    pub const TYPE_NAME: &'static str = "fixedValue";

    /// Return new condition
    #[must_use]
    pub fn new(value: [f64; 3]) -> Self {
        FixedValue { value }
    }

    /// Read `value uniform (x y z)`, or a nonuniform list of equal vectors
    ///
    /// # Errors
    /// Missing, malformed or non-finite value, or a list that is empty or
    /// not uniform.
    pub fn from_dict(dict: &Dictionary) -> std::result::Result<Self, ConfigError> {
        let value = if dict.is_uniform("value")? {
            dict.get_uniform_vector("value")?
        } else {
            let list = dict.get_nonuniform_vectors("value")?;
            let first = match list.rows().into_iter().next() {
                Some(first) => first,
                None => {
                    return Err(ConfigError::InvalidValue {
                        key: "value".to_string(),
                        reason: "empty list has no fixed value".to_string(),
                    })
                }
            };
            if list.rows().into_iter().any(|row| row != first) {
                return Err(ConfigError::InvalidValue {
                    key: "value".to_string(),
                    reason: "vectors differ between faces".to_string(),
                });
            }
            [first[0], first[1], first[2]]
        };
        if value.iter().any(|x| !x.is_finite()) {
            return Err(ConfigError::InvalidValue {
                key: "value".to_string(),
                reason: format!("{:?} is not finite", value),
            });
        }
        tracing::info!("Using the {} boundary condition", Self::TYPE_NAME);
        Ok(Self::new(value))
    }

    /// Prescribed vector
    pub fn value(&self) -> [f64; 3] {
        self.value
    }
}

impl PatchField for FixedValue {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn evaluate(&self, patch: &dyn Patch, time: f64) -> Result<Array2<f64>> {
        if !time.is_finite() {
            return Err(Error::NonFiniteTime(time));
        }
        check_patch(patch)?;
        let mut field = Array2::<f64>::zeros((patch.n_faces(), 3));
        for mut row in field.rows_mut() {
            row.assign(&aview1(&self.value));
        }
        Ok(field)
    }

    fn write(&self, dict: &mut Dictionary) {
        dict.add_word("type", Self::TYPE_NAME);
        let mut field = Array2::<f64>::zeros((1, 3));
        field.row_mut(0).assign(&aview1(&self.value));
        dict.add_vector_field("value", &field);
    }
}
