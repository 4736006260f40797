use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};
use nalgebra::Vector2;

use orbit_lab::fractal::{chaos, presets};
use orbit_lab::orbital;
use orbit_lab::physics::Params;
use orbit_lab::sim::{
    simulate_sampled, EulerState, Integrator, LeapfrogState, Trajectory, VerletState,
};

fn main() -> eframe::Result {
    let params = Params::default();
    let radius = 1.0;
    let (r0, p0) = orbital::circular_state(&params, radius);
    let period = orbital::period(&params, radius);
    let n_steps = (period / params.dt).round() as usize;

    let mut schemes: Vec<Box<dyn Integrator>> = vec![
        Box::new(EulerState::new(params, r0, p0)),
        Box::new(VerletState::new(params, r0, p0)),
        Box::new(LeapfrogState::new(params, r0, p0)),
    ];

    let mut runs = Vec::new();
    for state in &mut schemes {
        let label = state.label();
        runs.push((label, simulate_sampled(state.as_mut(), n_steps, 10)));
    }

    let fern = chaos::render_default(&presets::barnsley(), 20_000);

    let app = OrbitViz {
        params,
        period,
        runs,
        fern,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Central-Force Orbit Lab", options, Box::new(|_| Ok(Box::new(app))))
}

struct OrbitViz {
    params: Params,
    period: f64,
    runs: Vec<(&'static str, Trajectory)>,
    fern: Vec<Vector2<f64>>,
}

impl OrbitViz {
    fn sampled(&self, traj: &Trajectory) -> Vec<(f64, Vector2<f64>, Vector2<f64>)> {
        let step = (traj.len() / 2000).max(1);
        traj.samples
            .iter()
            .step_by(step)
            .map(|s| (s.time, s.position, s.momentum))
            .collect()
    }
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let e0 = self
            .runs
            .first()
            .and_then(|(_, t)| t.samples.first())
            .map_or(0.0, |s| self.params.energy_at(&s.momentum, &s.position));

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Central-Force Orbit Lab");
            ui.label(format!(
                "E0: {:.6}  |  Period: {:.4}  |  dt: {}  |  Schemes: {}",
                e0,
                self.period,
                self.params.dt,
                self.runs.len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Orbit trace, one full period per scheme
                ui.vertical(|ui| {
                    ui.label("Orbit trace");
                    let traces: Vec<(&str, PlotPoints)> = self
                        .runs
                        .iter()
                        .map(|(label, traj)| {
                            let pts: PlotPoints = self
                                .sampled(traj)
                                .iter()
                                .map(|(_, r, _)| [r.x, r.y])
                                .collect();
                            (*label, pts)
                        })
                        .collect();
                    Plot::new("orbit")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            for (label, pts) in traces {
                                plot_ui.line(Line::new(label, pts));
                            }
                        });
                });

                // Energy error growth separates the schemes
                ui.vertical(|ui| {
                    ui.label("Energy error |E - E0| / |E0|");
                    let traces: Vec<(&str, PlotPoints)> = self
                        .runs
                        .iter()
                        .map(|(label, traj)| {
                            let pts: PlotPoints = self
                                .sampled(traj)
                                .iter()
                                .map(|(t, r, p)| {
                                    let e = self.params.energy_at(p, r);
                                    [*t, (e - e0).abs() / e0.abs()]
                                })
                                .collect();
                            (*label, pts)
                        })
                        .collect();
                    Plot::new("energy")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            for (label, pts) in traces {
                                plot_ui.line(Line::new(label, pts));
                            }
                        });
                });
            });

            ui.horizontal(|ui| {
                // Radius history
                ui.vertical(|ui| {
                    ui.label("Radius");
                    let traces: Vec<(&str, PlotPoints)> = self
                        .runs
                        .iter()
                        .map(|(label, traj)| {
                            let pts: PlotPoints = self
                                .sampled(traj)
                                .iter()
                                .map(|(t, r, _)| [*t, r.norm()])
                                .collect();
                            (*label, pts)
                        })
                        .collect();
                    Plot::new("radius")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            for (label, pts) in traces {
                                plot_ui.line(Line::new(label, pts));
                            }
                        });
                });

                // Chaos-game scatter
                ui.vertical(|ui| {
                    ui.label("Barnsley fern (chaos game)");
                    let pts: PlotPoints = self.fern.iter().map(|p| [p.x, p.y]).collect();
                    Plot::new("fern")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.points(Points::new("fern", pts).radius(0.5));
                        });
                });
            });
        });
    }
}
