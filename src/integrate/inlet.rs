//! # March a prescribed inlet in time
//!
//! Evaluates the boundary value of one patch every timestep and records
//! diagnostics of the prescribed flow.
//!
//! # Example
//! ```
//! use rustinlet::boundary::BoundaryCondition;
//! use rustinlet::dictionary::Dictionary;
//! use rustinlet::integrate::{integrate, PulsatileInlet};
//! use rustinlet::patch::DiscPatch;
//! let dict: Dictionary = "type fourierParabolic; Q ((3 0) (0 2)); omega 6.283185307179586;"
//!     .parse()
//!     .unwrap();
//! let bc = BoundaryCondition::from_dict(&dict).unwrap();
//! let disc = DiscPatch::new(0.5, 16, 16, [0.; 3], [0., 0., -1.]);
//! let mut inlet = PulsatileInlet::new(disc, bc, 0.01);
//! integrate(&mut inlet, 1.0, Some(0.1)).unwrap();
//! assert_eq!(inlet.diagnostics["time"].len(), 10);
//! ```
use super::Integrate;
use crate::boundary::BoundaryCondition;
use crate::error::Result;
use crate::field::PatchValue;
use crate::patch::Patch;
use std::collections::HashMap;

/// Diagnostics columns in output order
const COLUMNS: [&str; 5] = ["time", "Q", "flux", "peak", "mean"];

/// Boundary value of a patch, advanced in time
pub struct PulsatileInlet<P> {
    /// Patch geometry
    pub patch: P,
    /// Boundary value
    pub field: PatchValue,
    /// Time
    pub time: f64,
    /// Time step size
    pub dt: f64,
    /// diagnostics like flow rate, flux, peak velocity
    pub diagnostics: HashMap<String, Vec<f64>>,
}

impl<P: Patch> PulsatileInlet<P> {
    /// Start at time zero with a zero boundary value
    pub fn new(patch: P, bc: BoundaryCondition, dt: f64) -> Self {
        let field = PatchValue::new(bc, patch.n_faces());
        Self::from_field(patch, field, dt)
    }

    /// Start at time zero with an existing boundary value
    pub fn from_field(patch: P, field: PatchValue, dt: f64) -> Self {
        let mut diagnostics = HashMap::new();
        diagnostics.insert("time".to_string(), Vec::<f64>::new());
        diagnostics.insert("peak".to_string(), Vec::<f64>::new());
        diagnostics.insert("mean".to_string(), Vec::<f64>::new());
        if let BoundaryCondition::FourierParabolic(_) = field.boundary_condition() {
            diagnostics.insert("Q".to_string(), Vec::<f64>::new());
        }
        if patch.face_areas().is_some() {
            diagnostics.insert("flux".to_string(), Vec::<f64>::new());
        }
        PulsatileInlet {
            patch,
            field,
            time: 0.,
            dt,
            diagnostics,
        }
    }

    /// Evaluate the boundary value at the current time
    ///
    /// # Errors
    /// Evaluation failed.
    pub fn init(&mut self) -> Result<()> {
        self.field.reset();
        self.field.update_coeffs(&self.patch, self.time)
    }

    /// Flow rate of the condition, if it prescribes one
    pub fn flow_rate(&self) -> Option<f64> {
        match self.field.boundary_condition() {
            BoundaryCondition::FourierParabolic(bc) => Some(bc.series().flow_rate(self.time)),
            BoundaryCondition::FixedValue(_) => None,
        }
    }

    /// Speed into the domain, $-\mathbf{u} \cdot \mathbf{n}$, per face
    pub fn inflow_speed(&self) -> Vec<f64> {
        self.field
            .value()
            .rows()
            .into_iter()
            .zip(self.patch.face_normals().rows())
            .map(|(u, n)| -u.dot(&n))
            .collect()
    }

    /// Area weighted inflow, if face areas are known
    pub fn flux(&self) -> Option<f64> {
        let areas = self.patch.face_areas()?;
        Some(
            self.inflow_speed()
                .iter()
                .zip(areas.iter())
                .map(|(u, a)| u * a)
                .sum(),
        )
    }

    fn push(&mut self, key: &str, value: f64) {
        if let Some(d) = self.diagnostics.get_mut(key) {
            d.push(value);
        }
    }

    /// Write diagnostics as whitespace separated columns
    ///
    /// # Errors
    /// File cannot be written.
    pub fn write_diagnostics(&self, filename: &str) -> Result<()> {
        use std::io::Write;
        let columns: Vec<&Vec<f64>> = COLUMNS
            .iter()
            .filter_map(|key| self.diagnostics.get(*key))
            .collect();
        let header: Vec<&str> = COLUMNS
            .iter()
            .copied()
            .filter(|key| self.diagnostics.contains_key(*key))
            .collect();
        let mut file = std::fs::File::create(filename)?;
        writeln!(file, "# {}", header.join(" "))?;
        let n = columns.iter().map(|c| c.len()).min().unwrap_or(0);
        for i in 0..n {
            let row: Vec<String> = columns.iter().map(|c| format!("{:e}", c[i])).collect();
            writeln!(file, "{}", row.join(" "))?;
        }
        tracing::info!(" ==> {:?}", filename);
        Ok(())
    }
}

impl<P: Patch> Integrate for PulsatileInlet<P> {
    /// Update 1 timestep
    fn update(&mut self) -> Result<()> {
        self.time += self.dt;
        self.field.reset();
        self.field.update_coeffs(&self.patch, self.time)
    }

    fn get_time(&self) -> f64 {
        self.time
    }

    fn get_dt(&self) -> f64 {
        self.dt
    }

    fn write(&mut self) -> Result<()> {
        let speed = self.inflow_speed();
        let peak = speed.iter().fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        let mean = if speed.is_empty() {
            0.
        } else {
            speed.iter().sum::<f64>() / speed.len() as f64
        };
        let q = self.flow_rate();
        let flux = self.flux();
        tracing::info!(
            "time = {:4.2}      Q = {:5.3e}     flux = {:5.3e}     peak = {:5.3e}    mean = {:5.3e}",
            self.time,
            q.unwrap_or(f64::NAN),
            flux.unwrap_or(f64::NAN),
            peak,
            mean,
        );

        // diagnostics
        let time = self.time;
        self.push("time", time);
        self.push("peak", peak);
        self.push("mean", mean);
        if let Some(q) = q {
            self.push("Q", q);
        }
        if let Some(flux) = flux {
            self.push("flux", flux);
        }
        Ok(())
    }
}
