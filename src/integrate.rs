//! Integrate trait, step a boundary value forward in time
pub mod inlet;
pub use inlet::PulsatileInlet;

use crate::error::Result;

const MAX_TIMESTEP: usize = 10_000_000;

/// Integrate trait, step forward in time, and write results
pub trait Integrate {
    /// Update solution
    ///
    /// # Errors
    /// Update failed, integration stops.
    fn update(&mut self) -> Result<()>;
    /// Receive current time
    fn get_time(&self) -> f64;
    /// Get timestep
    fn get_dt(&self) -> f64;
    /// Write results (can be used as callback)
    ///
    /// # Errors
    /// Writing failed, integration stops.
    fn write(&mut self) -> Result<()>;
}

/// Integrate pde, that implements the Integrate trait.
///
/// Specify save_intervall to force writing an output.
///
/// Stop Criteria:
/// 1. Timestep limit
/// 2. Time limit
///
/// # Errors
/// First failed update or write.
pub fn integrate<T: Integrate>(pde: &mut T, max_time: f64, save_intervall: Option<f64>) -> Result<()> {
    let mut timestep: usize = 0;
    let eps_dt = pde.get_dt() * 1e-4;
    loop {
        // Update
        pde.update()?;
        timestep += 1;

        // Save
        if let Some(dt_save) = &save_intervall {
            if (pde.get_time() % dt_save) < pde.get_dt() / 2.
                || (pde.get_time() % dt_save) > dt_save - pde.get_dt() / 2.
            {
                pde.write()?;
            }
        }

        // Break
        if pde.get_time() + eps_dt >= max_time {
            tracing::info!("time limit reached: {:?}", pde.get_time());
            break;
        }
        if timestep >= MAX_TIMESTEP {
            tracing::info!("timestep limit reached: {:?}", timestep);
            break;
        }
    }
    Ok(())
}
