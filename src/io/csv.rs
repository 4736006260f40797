use std::io::{self, Write};

use crate::physics::Params;
use crate::sim::Trajectory;

/// Write a recorded trajectory to CSV format.
///
/// Columns: time, pos_x, pos_y, mom_x, mom_y, energy
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    params: &Params,
    trajectory: &Trajectory,
) -> io::Result<()> {
    writeln!(writer, "time,pos_x,pos_y,mom_x,mom_y,energy")?;

    for s in &trajectory.samples {
        writeln!(
            writer,
            "{:.6},{:.6},{:.6},{:.6},{:.6},{:.9}",
            s.time,
            s.position.x,
            s.position.y,
            s.momentum.x,
            s.momentum.y,
            params.energy_at(&s.momentum, &s.position),
        )?;
    }

    Ok(())
}

/// Write a trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, params: &Params, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, params, trajectory)
}
