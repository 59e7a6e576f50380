//! Console output of a scenario: diagnostics and CSV dumps

use std::io::Write;

use crate::simulation::scenario::Scenario;
use crate::simulation::trajectory::Series;

/// Diagnostics plus the ground stop trace summary
pub fn write_report<W: Write>(out: &mut W, scenario: &Scenario) -> crate::error::Result<()> {
    let diag = scenario.diagnostics();
    let ground = scenario.ground_stop()?;
    writeln!(out, "{diag}")?;
    writeln!(out, "simulated ground stop: {:.4} ({} ticks)", ground.elapsed, ground.steps)?;
    Ok(())
}

/// Every curve of the scenario as `curve,x,y` rows
pub fn write_csv<W: Write>(out: &mut W, scenario: &Scenario) -> std::io::Result<()> {
    writeln!(out, "curve,x,y")?;
    let curves: [(&str, &Series); 4] = [
        ("simulated_acceleration", &scenario.acceleration.trajectory),
        ("theoretical_acceleration", &scenario.acceleration_theory),
        ("simulated_deceleration", &scenario.deceleration.trajectory),
        ("theoretical_deceleration", &scenario.deceleration_theory),
    ];
    for (name, series) in curves {
        for (x, y) in series.points() {
            writeln!(out, "{name},{x},{y}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::ScenarioConfig;

    #[test]
    fn csv_lists_all_curves() {
        let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_csv(&mut buf, &scenario).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let expected = 1
            + scenario.acceleration.trajectory.len()
            + scenario.acceleration_theory.len()
            + scenario.deceleration.trajectory.len()
            + scenario.deceleration_theory.len();
        assert_eq!(text.lines().count(), expected);
        assert!(text.contains("theoretical_deceleration,0,32"));
    }

    #[test]
    fn report_prints_coefficients() {
        let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &scenario).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("f = "));
        assert!(text.contains("simulated ground stop"));
    }
}
