use orbit_lab::io::RunSummary;
use orbit_lab::orbital;
use orbit_lab::physics::Params;
use orbit_lab::sim::{simulate_sampled, EulerState, Integrator, LeapfrogState, VerletState};

fn main() {
    // -----------------------------------------------------------------------
    // Problem setup: lecture constants, circular seed at r = 1
    // -----------------------------------------------------------------------
    let params = Params::default();
    let radius = 1.0;
    let (r0, p0) = orbital::circular_state(&params, radius);
    let period = orbital::period(&params, radius);
    let n_steps = (period / params.dt).round() as usize;
    let e0 = params.energy_at(&p0, &r0);

    println!();
    println!("====================================================================");
    println!("  CENTRAL-FORCE ORBIT LAB — Euler vs. Verlet vs. leapfrog");
    println!("====================================================================");
    println!();
    println!("  Problem Setup");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  G:             {:>10}      Central mass: {:>10}",
        params.g, params.central_mass
    );
    println!(
        "  Orbiter mass:  {:>10}      Time step:    {:>10}",
        params.mass, params.dt
    );
    println!(
        "  Radius:        {:>10.4}      |p| circular: {:>10.6}",
        radius,
        p0.norm()
    );
    println!(
        "  Energy E0:     {:>10.6}      Period:       {:>10.6}",
        e0, period
    );
    println!("  Steps/orbit:   {:>10}", n_steps);
    println!();

    // -----------------------------------------------------------------------
    // One full orbit under each scheme
    // -----------------------------------------------------------------------
    let mut schemes: Vec<Box<dyn Integrator>> = vec![
        Box::new(EulerState::new(params, r0, p0)),
        Box::new(VerletState::new(params, r0, p0)),
        Box::new(LeapfrogState::new(params, r0, p0)),
    ];

    println!("  Scheme Comparison — one full orbit");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:<10}  {:>12}  {:>12}  {:>12}  {:>14}",
        "scheme", "E drift", "max |dE/E0|", "closure", "r range"
    );
    println!("  {}", "─".repeat(66));

    for state in &mut schemes {
        let traj = simulate_sampled(state.as_mut(), n_steps, 100);
        let summary = RunSummary::from_trajectory(state.label(), &params, &traj);
        let closure = (traj.samples.last().unwrap().position - r0).norm();

        println!(
            "  {:<10}  {:>12.3e}  {:>12.3e}  {:>12.3e}  {:>6.4}–{:>6.4}",
            summary.scheme,
            summary.energy_drift,
            summary.max_energy_error,
            closure,
            summary.min_radius,
            summary.max_radius
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Leapfrog trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Leapfrog Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>9}  {:>9}  {:>9}  {:>8}  {:>12}",
        "t", "x", "y", "r", "E"
    );
    println!("  {}", "─".repeat(54));

    let mut leapfrog = LeapfrogState::new(params, r0, p0);
    let traj = simulate_sampled(&mut leapfrog, n_steps, (n_steps / 12).max(1));
    for s in &traj.samples {
        println!(
            "  {:>9.4}  {:>9.5}  {:>9.5}  {:>8.5}  {:>12.8}",
            s.time,
            s.position.x,
            s.position.y,
            s.position.norm(),
            params.energy_at(&s.momentum, &s.position)
        );
    }

    println!();
    println!("  Simulation: {} steps, dt={}", n_steps, params.dt);
    println!("====================================================================");
    println!();
}
