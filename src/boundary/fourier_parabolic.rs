//! Pulsatile parabolic velocity profile
//!
//! Velocity at radius $r$ from the patch centre
//! $$
//! u(t, r) = 2 \frac{Q(t)}{\pi R^2} \left( 1 - \left(\frac{r}{R}\right)^2 \right)
//! $$
//! with the flow rate $Q(t)$ from a Fourier series and the maximum face
//! radius $R$. The patch centre is the midpoint of the bounding box of
//! the face centres.
//!
//! Dictionary entries:
//!
//! | Keyword | Description                                          | Required |
//! |---------|------------------------------------------------------|----------|
//! | `Q`     | complex Fourier coefficients of the flow rate        | yes      |
//! | `omega` | angular frequency of the first harmonic, $2\pi / T$  | yes      |
//! | `value` | initial field, not used by the profile               | no       |
use super::PatchField;
use crate::dictionary::Dictionary;
use crate::error::{ConfigError, Error, Result};
use crate::fourier::FourierSeries;
use crate::patch::{check_patch, radii, BoundBox, Patch};
use crate::profile::parabolic_velocity;
use ndarray::Array2;

/// Pulsatile parabolic profile driven by a Fourier series flow rate
#[derive(Debug, Clone, PartialEq)]
pub struct FourierParabolic {
    series: FourierSeries,
}

impl FourierParabolic {
    /// Registered type name
    pub const TYPE_NAME: &'static str = "fourierParabolic";

    /// Return new condition
    #[must_use]
    pub fn new(series: FourierSeries) -> Self {
        FourierParabolic { series }
    }

    /// Read `Q` and `omega`
    ///
    /// # Errors
    /// Missing or malformed entries, empty coefficient list.
    pub fn from_dict(dict: &Dictionary) -> std::result::Result<Self, ConfigError> {
        let coefficients = dict.get_complex_list("Q")?;
        let omega = dict.get_scalar("omega")?;
        let series = FourierSeries::new(coefficients, omega)?;
        tracing::info!(
            "Using the {} boundary condition ({} harmonics, omega = {})",
            Self::TYPE_NAME,
            series.n_harmonics(),
            series.omega()
        );
        Ok(Self::new(series))
    }

    /// Flow rate series
    pub fn series(&self) -> &FourierSeries {
        &self.series
    }
}

impl PatchField for FourierParabolic {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn evaluate(&self, patch: &dyn Patch, time: f64) -> Result<Array2<f64>> {
        if !time.is_finite() {
            return Err(Error::NonFiniteTime(time));
        }
        check_patch(patch)?;
        let centres = patch.face_centres();
        let centre = BoundBox::from_patch(patch).centre();
        let radii = radii(&centres, &centre);
        let r_max = patch.reduce_max(radii.fold(0., |a: f64, b| a.max(*b)));
        let q = self.series.flow_rate(time);
        tracing::debug!(
            time,
            flow_rate = q,
            r_max,
            n_faces = radii.len(),
            "update {}",
            Self::TYPE_NAME
        );
        Ok(parabolic_velocity(q, r_max, &radii, &patch.face_normals())?)
    }

    fn write(&self, dict: &mut Dictionary) {
        dict.add_word("type", Self::TYPE_NAME);
        dict.add_complex_list("Q", self.series.coefficients());
        dict.add_scalar("omega", self.series.omega());
    }
}
