use nalgebra::Vector2;

use orbit_lab::orbital;
use orbit_lab::physics::{self, Params};
use orbit_lab::sim::{
    simulate, simulate_sampled, EnergyMonitor, EulerState, Integrator, LeapfrogState, VerletState,
};

/// Lecture constants with a circular seed at r = 1
pub fn circular_setup() -> (Params, Vector2<f64>, Vector2<f64>) {
    let params = Params::default();
    let (r0, p0) = orbital::circular_state(&params, 1.0);
    (params, r0, p0)
}

/// Steps in one full orbital period at the default dt
pub fn steps_per_period(params: &Params) -> usize {
    (orbital::period(params, 1.0) / params.dt).round() as usize
}

// ==================================================================================
// Force law
// ==================================================================================

#[test]
fn force_satisfies_inverse_square_law() {
    let (params, _, _) = circular_setup();

    let f_r = params.force_at(&Vector2::new(1.0, 0.0));
    let f_2r = params.force_at(&Vector2::new(2.0, 0.0));

    let ratio = f_r.norm() / f_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

#[test]
fn force_points_at_the_center_everywhere() {
    let (params, _, _) = circular_setup();

    for r in [
        Vector2::new(0.3, 0.7),
        Vector2::new(-1.2, 2.5),
        Vector2::new(0.0, -4.0),
    ] {
        let f = params.force_at(&r);
        assert!(f.dot(&r) < 0.0, "Force on {:?} is not attractive", r);
        assert!(
            f.perp(&r).abs() < 1e-15,
            "Force on {:?} has a transverse component",
            r
        );
    }
}

#[test]
fn trajectory_energy_equals_potential_plus_kinetic() {
    let (params, r0, p0) = circular_setup();
    let mut state = LeapfrogState::new(params, r0, p0);
    let traj = simulate(&mut state, 1000);

    let positions = traj.positions();
    let momenta = traj.momenta();
    let pot = physics::potential(&params, &positions);
    let kin = physics::kinetic(&params, &momenta);
    let tot = traj.energies(&params);

    for i in 0..traj.len() {
        assert_eq!(tot[i], pot[i] + kin[i], "energy identity broken at row {}", i);
    }
}

// ==================================================================================
// Scheme behavior over many steps
// ==================================================================================

#[test]
fn leapfrog_energy_stays_bounded_over_ten_thousand_steps() {
    let (params, r0, p0) = circular_setup();
    let mut state = LeapfrogState::new(params, r0, p0);
    let traj = simulate(&mut state, 10_000);

    let monitor = EnergyMonitor::from_energies(&traj.energies(&params)).unwrap();
    assert!(
        monitor.is_bounded(1e-9),
        "Leapfrog energy error grew to {}",
        monitor.max_relative_error()
    );
}

#[test]
fn verlet_energy_stays_bounded_over_ten_thousand_steps() {
    let (params, r0, p0) = circular_setup();
    let mut state = VerletState::new(params, r0, p0);
    let traj = simulate(&mut state, 10_000);

    let monitor = EnergyMonitor::from_energies(&traj.energies(&params)).unwrap();
    assert!(
        monitor.is_bounded(1e-9),
        "Verlet energy error grew to {}",
        monitor.max_relative_error()
    );
}

#[test]
fn euler_energy_drifts_upward_monotonically() {
    let (params, r0, p0) = circular_setup();
    let mut state = EulerState::new(params, r0, p0);
    let traj = simulate_sampled(&mut state, 10_000, 100);

    let monitor = EnergyMonitor::from_energies(&traj.energies(&params)).unwrap();
    assert!(
        monitor.drift() > 1e-4,
        "Euler should gain energy, drift was {}",
        monitor.drift()
    );
    assert!(
        monitor.monotone_fraction() > 0.95,
        "Euler drift should be secular, rising fraction was {}",
        monitor.monotone_fraction()
    );
}

#[test]
fn verlet_momentum_is_central_difference_of_positions() {
    let (params, r0, p0) = circular_setup();
    let mut state = VerletState::new(params, r0, p0);
    let traj = simulate(&mut state, 200);

    // After step n the stored momentum is m·(r_n - r_{n-2}) / (2·dt), the
    // central-difference estimate at r_{n-1}.
    for n in 2..traj.len() {
        let expected = params.mass * (traj.samples[n].position - traj.samples[n - 2].position)
            / (2.0 * params.dt);
        let got = traj.samples[n].momentum;
        assert!(
            (got - expected).norm() < 1e-12,
            "central difference broken at step {}: {:?} vs {:?}",
            n,
            got,
            expected
        );
    }
}

#[test]
fn elapsed_time_is_step_count_times_dt() {
    let (params, r0, p0) = circular_setup();
    let mut schemes: Vec<Box<dyn Integrator>> = vec![
        Box::new(EulerState::new(params, r0, p0)),
        Box::new(VerletState::new(params, r0, p0)),
        Box::new(LeapfrogState::new(params, r0, p0)),
    ];

    for state in &mut schemes {
        let traj = simulate(state.as_mut(), 2500);
        let elapsed = traj.samples.last().unwrap().time;
        assert!(
            (elapsed - 2500.0 * params.dt).abs() < 1e-12,
            "{} elapsed {} after 2500 steps",
            state.label(),
            elapsed
        );
    }
}

// ==================================================================================
// One full period
// ==================================================================================

#[test]
fn leapfrog_closes_the_circular_orbit() {
    let (params, r0, p0) = circular_setup();
    let n = steps_per_period(&params);

    let mut state = LeapfrogState::new(params, r0, p0);
    let traj = simulate_sampled(&mut state, n, n);

    let gap = (traj.samples.last().unwrap().position - r0).norm();
    assert!(gap < 1e-3, "Orbit failed to close, gap {}", gap);
}

#[test]
fn euler_misses_the_closure_leapfrog_achieves() {
    let (params, r0, p0) = circular_setup();
    let n = steps_per_period(&params);

    let mut euler = EulerState::new(params, r0, p0);
    let mut leapfrog = LeapfrogState::new(params, r0, p0);
    let euler_gap = (simulate_sampled(&mut euler, n, n).samples.last().unwrap().position - r0).norm();
    let leapfrog_gap =
        (simulate_sampled(&mut leapfrog, n, n).samples.last().unwrap().position - r0).norm();

    assert!(
        euler_gap > 10.0 * leapfrog_gap,
        "Expected Euler ({}) far worse than leapfrog ({})",
        euler_gap,
        leapfrog_gap
    );
    assert!(euler_gap > 1e-3, "Euler gap suspiciously small: {}", euler_gap);
}

#[test]
fn circular_radius_stays_pinned_for_a_period() {
    let (params, r0, p0) = circular_setup();
    let n = steps_per_period(&params);

    let mut state = LeapfrogState::new(params, r0, p0);
    let traj = simulate_sampled(&mut state, n, 25);

    for (i, r) in traj.radii().iter().enumerate() {
        assert!(
            (r - 1.0).abs() < 1e-3,
            "radius wandered to {} at row {}",
            r,
            i
        );
    }
}
