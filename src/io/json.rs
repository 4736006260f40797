use std::io::{self, Write};

use crate::physics::Params;
use crate::sim::{EnergyMonitor, Trajectory};

/// Summary statistics computed from one integration run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub scheme: &'static str,
    pub steps: usize,
    pub elapsed: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    /// Signed end-to-end drift relative to the initial energy.
    pub energy_drift: f64,
    /// Largest |E - E0| / |E0| over the recorded samples.
    pub max_energy_error: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub final_radius: f64,
}

impl RunSummary {
    /// Compute a summary from a recorded trajectory.
    pub fn from_trajectory(scheme: &'static str, params: &Params, trajectory: &Trajectory) -> Self {
        let energies = trajectory.energies(params);
        let monitor = EnergyMonitor::from_energies(&energies).unwrap();

        let radii = trajectory.radii();
        let min_radius = radii.iter().copied().fold(f64::INFINITY, f64::min);
        let max_radius = radii.iter().copied().fold(0.0_f64, f64::max);

        let last = trajectory.samples.last().unwrap();

        RunSummary {
            scheme,
            steps: (last.time / params.dt).round() as usize,
            elapsed: last.time,
            initial_energy: monitor.baseline(),
            final_energy: *energies.last().unwrap(),
            energy_drift: monitor.drift(),
            max_energy_error: monitor.max_relative_error(),
            min_radius,
            max_radius,
            final_radius: last.position.norm(),
        }
    }
}

/// Write a run summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    params: &Params,
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"params\": {{")?;
    writeln!(writer, "    \"g\": {},", params.g)?;
    writeln!(writer, "    \"central_mass\": {},", params.central_mass)?;
    writeln!(writer, "    \"mass\": {},", params.mass)?;
    writeln!(writer, "    \"dt\": {}", params.dt)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"run\": {{")?;
    writeln!(writer, "    \"scheme\": \"{}\",", summary.scheme)?;
    writeln!(writer, "    \"steps\": {},", summary.steps)?;
    writeln!(writer, "    \"elapsed\": {:.6},", summary.elapsed)?;
    writeln!(writer, "    \"initial_energy\": {:.12},", summary.initial_energy)?;
    writeln!(writer, "    \"final_energy\": {:.12},", summary.final_energy)?;
    writeln!(writer, "    \"energy_drift\": {:.6e},", summary.energy_drift)?;
    writeln!(writer, "    \"max_energy_error\": {:.6e},", summary.max_energy_error)?;
    writeln!(writer, "    \"min_radius\": {:.9},", summary.min_radius)?;
    writeln!(writer, "    \"max_radius\": {:.9},", summary.max_radius)?;
    writeln!(writer, "    \"final_radius\": {:.9}", summary.final_radius)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a run summary JSON to a file.
pub fn write_summary_file(path: &str, params: &Params, summary: &RunSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, params, summary)
}
