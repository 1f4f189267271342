//! Human-readable summary of a single boost.
//!
//! Everything is computed at full precision in [`Report::new`]; rounding
//! happens only when the report is displayed.

use std::fmt;

use crate::relativity::special::{
    C, Event, IntervalKind, length_contraction, lorentz_factor, time_dilation,
};

pub const DEFAULT_DIGITS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub event: Event,
    pub beta: f64,
    pub gamma: f64,
    pub transformed: Event,
    pub round_trip: Event,
    pub invariant: f64,
    pub invariant_prime: f64,
    pub kind: IntervalKind,
    /// Frame time elapsed while a moving clock ticks one unit.
    pub dilated_time: f64,
    /// Frame length of a moving rod one unit long at rest.
    pub contracted_length: f64,
    pub digits: usize,
}

impl Report {
    pub fn new(event: Event, beta: f64) -> crate::Result<Self> {
        let gamma = lorentz_factor(beta)?;
        let transformed = event.boost(beta)?;
        let round_trip = transformed.unboost(beta)?;
        Ok(Report {
            event,
            beta,
            gamma,
            transformed,
            round_trip,
            invariant: event.invariant(),
            invariant_prime: transformed.invariant(),
            kind: event.interval_kind(),
            dilated_time: time_dilation(1.0, beta)?,
            contracted_length: length_contraction(1.0, beta)?,
            digits: DEFAULT_DIGITS,
        })
    }

    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Coefficient of x in the time transform.
    pub fn beta_over_c(&self) -> f64 {
        self.beta / C
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.digits;
        writeln!(f, "Original event:     (x, t)   = ({:.*}, {:.*})", d, self.event.x, d, self.event.t)?;
        writeln!(
            f,
            "Transformed event:  (x', t') = ({:.*}, {:.*})",
            d, self.transformed.x, d, self.transformed.t
        )?;
        writeln!(
            f,
            "Round trip:         (x, t)   = ({:.*}, {:.*})",
            d, self.round_trip.x, d, self.round_trip.t
        )?;
        writeln!(f, "Lorentz factor γ:   {:.*}", d, self.gamma)?;
        writeln!(f, "β/c:                {:.*}", d, self.beta_over_c())?;
        writeln!(f, "Time dilation:      1 → {:.*}", d, self.dilated_time)?;
        writeln!(f, "Length contraction: 1 → {:.*}", d, self.contracted_length)?;
        writeln!(f, "Invariant (S):      {:.*}", d, self.invariant)?;
        writeln!(f, "Invariant (S'):     {:.*}", d, self.invariant_prime)?;
        write!(
            f,
            "Interval:           {} ({})",
            self.kind.separation(),
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelativityError;

    #[test]
    fn report_for_known_boost() {
        let report = Report::new(Event::new(0.0, 1.0), 0.6).unwrap();
        assert!((report.gamma - 1.25).abs() < 1e-12);
        assert!((report.transformed.x + 0.75).abs() < 1e-12);
        assert!((report.round_trip.t - 1.0).abs() < 1e-12);
        assert_eq!(report.kind, IntervalKind::ProperTime);
        assert!((report.dilated_time - 1.25).abs() < 1e-12);
        assert!((report.contracted_length - 0.8).abs() < 1e-12);

        let text = report.with_digits(2).to_string();
        assert!(text.contains("(x', t') = (-0.75, 1.25)"), "{text}");
        assert!(text.contains("Lorentz factor γ:   1.25"), "{text}");
        assert!(text.contains("timelike (proper time)"), "{text}");
        assert!(text.contains("Time dilation:      1 → 1.25"), "{text}");
        assert!(text.contains("Length contraction: 1 → 0.80"), "{text}");
    }

    #[test]
    fn report_rejects_luminal_beta() {
        assert_eq!(
            Report::new(Event::new(1.0, 1.0), 1.0),
            Err(RelativityError::InvalidParameter { beta: 1.0 })
        );
    }
}
