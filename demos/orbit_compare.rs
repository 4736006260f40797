use orbit_lab::io::csv;
use orbit_lab::io::json::{self, RunSummary};
use orbit_lab::orbital;
use orbit_lab::physics::Params;
use orbit_lab::sim::{simulate_sampled, EulerState, Integrator, LeapfrogState, VerletState};

fn main() {
    let params = Params::default();
    let (r0, p0) = orbital::circular_state(&params, 1.0);
    let period = orbital::period(&params, 1.0);
    let n_steps = (period / params.dt).round() as usize;

    println!("Integrating one circular orbit ({} steps) under three schemes ...", n_steps);

    let mut schemes: Vec<Box<dyn Integrator>> = vec![
        Box::new(EulerState::new(params, r0, p0)),
        Box::new(VerletState::new(params, r0, p0)),
        Box::new(LeapfrogState::new(params, r0, p0)),
    ];

    for state in &mut schemes {
        let label = state.label();
        let traj = simulate_sampled(state.as_mut(), n_steps, 10);
        let summary = RunSummary::from_trajectory(label, &params, &traj);

        println!(
            "{:<10} drift {:+.3e}   max |dE/E0| {:.3e}   r [{:.6}, {:.6}]",
            label,
            summary.energy_drift,
            summary.max_energy_error,
            summary.min_radius,
            summary.max_radius
        );

        let csv_path = format!("{}_orbit.csv", label);
        let json_path = format!("{}_summary.json", label);
        csv::write_trajectory_file(&csv_path, &params, &traj).expect("Failed to write CSV");
        json::write_summary_file(&json_path, &params, &summary).expect("Failed to write JSON");
        println!("Exported: {}, {}", csv_path, json_path);
    }
}
