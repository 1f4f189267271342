use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};
use plotters::prelude::*;

use crate::error::RelativityError;
use crate::relativity::special::{Event, lorentz_factor};

/// One row of a β sweep: an event before and after the boost.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub beta: f64,
    pub gamma: f64,
    pub x: f64,
    pub t: f64,
    pub x_prime: f64,
    pub t_prime: f64,
    pub invariant: f64,
    pub invariant_prime: f64,
    pub timelike: bool,
}

impl Sample {
    pub fn new(event: Event, beta: f64) -> crate::Result<Self> {
        let gamma = lorentz_factor(beta)?;
        let boosted = event.boost(beta)?;
        Ok(Sample {
            beta,
            gamma,
            x: event.x,
            t: event.t,
            x_prime: boosted.x,
            t_prime: boosted.t,
            invariant: event.invariant(),
            invariant_prime: boosted.invariant(),
            timelike: event.is_timelike(),
        })
    }
}

/// Upper bound on sweep resolution; one sample per step is held in memory.
pub const MAX_SWEEP_STEPS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub beta_min: f64,
    pub beta_max: f64,
    pub steps: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            beta_min: -0.99,
            beta_max: 0.99,
            steps: 199,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> crate::Result<()> {
        for beta in [self.beta_min, self.beta_max] {
            lorentz_factor(beta)?;
        }
        if self.steps == 0 {
            return Err(RelativityError::invalid_sweep("steps must be at least 1"));
        }
        if self.steps > MAX_SWEEP_STEPS {
            return Err(RelativityError::invalid_sweep(format!(
                "steps {} exceeds the limit of {MAX_SWEEP_STEPS}",
                self.steps
            )));
        }
        if self.beta_min > self.beta_max {
            return Err(RelativityError::invalid_sweep(format!(
                "beta_min {} is greater than beta_max {}",
                self.beta_min, self.beta_max
            )));
        }
        Ok(())
    }

    /// Evenly spaced β values, both bounds included.
    pub fn betas(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.beta_min];
        }
        let step = (self.beta_max - self.beta_min) / (self.steps - 1) as f64;
        (0..self.steps)
            .map(|i| {
                if i == self.steps - 1 {
                    self.beta_max
                } else {
                    self.beta_min + i as f64 * step
                }
            })
            .collect()
    }
}

/// Boost `event` at every β of the sweep.
pub fn sweep(event: Event, config: &SweepConfig) -> crate::Result<Vec<Sample>> {
    config.validate()?;
    config
        .betas()
        .into_iter()
        .map(|beta| Sample::new(event, beta))
        .collect()
}

const HEADER: [&str; 9] = [
    "beta",
    "gamma",
    "x",
    "t",
    "x_prime",
    "t_prime",
    "invariant",
    "invariant_prime",
    "timelike",
];

pub fn write_csv<W: Write>(log: &[Sample], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for s in log {
        wtr.write_record([
            format!("{:.3}", s.beta),
            format!("{:.6}", s.gamma),
            format!("{:.6}", s.x),
            format!("{:.6}", s.t),
            format!("{:.6}", s.x_prime),
            format!("{:.6}", s.t_prime),
            format!("{:.6}", s.invariant),
            format!("{:.6}", s.invariant_prime),
            s.timelike.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv(log: &[Sample], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(log, file)
}

pub fn plot_results(log: &[Sample], path: impl AsRef<Path>) -> Result<()> {
    if log.is_empty() {
        bail!("nothing to plot");
    }

    let values = log.iter().flat_map(|s| [s.x_prime, s.t_prime, s.gamma]);
    let (mut y_min, mut y_max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if y_max - y_min < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let x_min = log[0].beta;
    let x_max = log[log.len() - 1].beta.max(x_min + f64::EPSILON);

    let root = BitMapBackend::new(path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Lorentz Transform vs Velocity", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min.floor()..y_max.ceil())?;

    chart
        .configure_mesh()
        .x_desc("β (fraction of c)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(log.iter().map(|s| (s.beta, s.x_prime)), &BLUE))?
        .label("x'")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(log.iter().map(|s| (s.beta, s.t_prime)), &RED))?
        .label("t'")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RED));

    chart
        .draw_series(LineSeries::new(log.iter().map(|s| (s.beta, s.gamma)), &GREEN))?
        .label("Lorentz Factor γ")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &GREEN));

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_covers_both_bounds() {
        let config = SweepConfig { beta_min: -0.8, beta_max: 0.8, steps: 5 };
        let samples = sweep(Event::new(1.0, 2.0), &config).unwrap();
        let betas: Vec<f64> = samples.iter().map(|s| s.beta).collect();
        let expected = [-0.8, -0.4, 0.0, 0.4, 0.8];
        assert_eq!(betas.len(), expected.len());
        for (b, e) in betas.iter().zip(expected) {
            assert!((b - e).abs() < 1e-12, "beta {b} != {e}");
        }
        for s in &samples {
            assert!((s.invariant - s.invariant_prime).abs() < 1e-9);
            assert!(s.timelike);
        }
    }

    #[test]
    fn single_step_uses_lower_bound() {
        let config = SweepConfig { beta_min: 0.25, beta_max: 0.5, steps: 1 };
        assert_eq!(config.betas(), vec![0.25]);
    }

    #[test]
    fn rejects_bad_sweeps() {
        let event = Event::new(0.0, 1.0);
        let zero = SweepConfig { steps: 0, ..SweepConfig::default() };
        assert!(matches!(sweep(event, &zero), Err(RelativityError::InvalidSweep(_))));

        let huge = SweepConfig { steps: usize::MAX, ..SweepConfig::default() };
        assert!(matches!(sweep(event, &huge), Err(RelativityError::InvalidSweep(_))));

        let at_limit = SweepConfig { steps: MAX_SWEEP_STEPS, ..SweepConfig::default() };
        assert_eq!(at_limit.validate(), Ok(()));

        let inverted = SweepConfig { beta_min: 0.5, beta_max: -0.5, steps: 3 };
        assert!(matches!(sweep(event, &inverted), Err(RelativityError::InvalidSweep(_))));

        let luminal = SweepConfig { beta_min: -1.0, beta_max: 0.5, steps: 3 };
        assert_eq!(
            sweep(event, &luminal),
            Err(RelativityError::InvalidParameter { beta: -1.0 })
        );
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let config = SweepConfig { beta_min: 0.0, beta_max: 0.6, steps: 3 };
        let samples = sweep(Event::new(0.0, 1.0), &config).unwrap();
        let mut buf = Vec::new();
        write_csv(&samples, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER.join(","));
        assert!(lines[3].starts_with("0.600,1.250000,0.000000,1.000000,-0.750000,1.250000"));
        assert!(lines[3].ends_with(",true"));
    }

    #[test]
    fn plotting_nothing_fails() {
        assert!(plot_results(&[], "unused.png").is_err());
    }
}
