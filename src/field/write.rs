//! Write [`PatchValue`] to a dictionary
use super::PatchValue;
use crate::boundary::PatchField;
use crate::dictionary::Dictionary;
use crate::error::Result;

impl PatchValue {
    /// Condition entries followed by the current `value`.
    ///
    /// A condition that writes its own `value` keeps it.
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        self.bc.write(&mut dict);
        if !dict.found("value") {
            dict.add_vector_field("value", &self.value);
        }
        dict
    }

    /// Write as sub-dictionary `patch` to the file `filename`
    ///
    /// # Errors
    /// File cannot be written.
    pub fn write(&self, filename: &str, patch: &str) -> Result<()> {
        let mut dict = Dictionary::new();
        dict.add_dict(patch, self.to_dict());
        dict.write(filename)?;
        Ok(())
    }
}
