use std::io::Write;
use std::time::Instant;

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{simulate_acceleration, simulate_deceleration};

/// Step sizes swept by default, coarse to fine
pub const DEFAULT_STEPS: [f64; 6] = [0.05, 0.02, 0.01, 0.005, 0.002, 0.001];

/// One row of the step-size sweep
#[derive(Debug, Clone)]
pub struct SweepRow {
    pub dt: f64,
    pub sim_tmax: f64,
    pub sim_ts: f64,
    pub micros: f64, // wall time of both simulations
}

/// Run the acceleration and deceleration simulations for every `dt`
pub fn sweep_step_sizes(cfg: &ScenarioConfig, steps: &[f64]) -> Result<Vec<SweepRow>> {
    cfg.validate()?;
    let params = Parameters::from_movement(&cfg.movement);
    let max_steps = cfg.simulation.max_steps;

    let mut rows = Vec::with_capacity(steps.len());
    for &dt in steps {
        let t0 = Instant::now();
        let accel = simulate_acceleration(&params, dt, max_steps)?;
        let decel = simulate_deceleration(&params, dt, max_steps)?;
        let micros = t0.elapsed().as_secs_f64() * 1.0e6;

        rows.push(SweepRow {
            dt,
            sim_tmax: accel.elapsed,
            sim_ts: decel.elapsed,
            micros,
        });
    }
    Ok(rows)
}

/// Print the sweep as CSV, paste into a spreadsheet to graph
pub fn write_sweep<W: Write>(out: &mut W, cfg: &ScenarioConfig, rows: &[SweepRow]) -> std::io::Result<()> {
    writeln!(out, "dt,sim_tmax,tmax,sim_ts,ts,us")?;
    for r in rows {
        writeln!(
            out,
            "{},{:.6},{},{:.6},{},{:.1}",
            r.dt, r.sim_tmax, cfg.movement.time_to_max_speed, r.sim_ts, cfg.movement.time_to_stop, r.micros
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_stops_within_one_step_of_theory() {
        let cfg = ScenarioConfig::default();
        let rows = sweep_step_sizes(&cfg, &DEFAULT_STEPS).unwrap();
        for r in &rows {
            assert!((r.sim_tmax - cfg.movement.time_to_max_speed).abs() <= r.dt + 1e-9, "{r:?}");
            assert!((r.sim_ts - cfg.movement.time_to_stop).abs() <= r.dt + 1e-9, "{r:?}");
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let cfg = ScenarioConfig::default();
        let rows = sweep_step_sizes(&cfg, &DEFAULT_STEPS).unwrap();
        let mut buf = Vec::new();
        write_sweep(&mut buf, &cfg, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), DEFAULT_STEPS.len() + 1);
        assert!(text.starts_with("dt,sim_tmax"));
    }
}
