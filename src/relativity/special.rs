use crate::error::{RelativityError, Result};

/// Speed of light in natural units.
pub const C: f64 = 1.0;

/// Rejects any β outside the open interval (-1, 1). NaN is rejected too.
fn check_beta(beta: f64) -> Result<()> {
    if beta.abs() < 1.0 {
        Ok(())
    } else {
        Err(RelativityError::invalid_parameter(beta))
    }
}

/// Lorentz factor γ = 1 / sqrt(1 - β^2)
pub fn lorentz_factor(beta: f64) -> Result<f64> {
    check_beta(beta)?;
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// Boost an event (x, t) into the frame moving at β:
/// x' = γ(x - βct), t' = γ(t - βx/c)
pub fn transform(x: f64, t: f64, beta: f64) -> Result<(f64, f64)> {
    let gamma = lorentz_factor(beta)?;
    let x_prime = gamma * (x - beta * C * t);
    let t_prime = gamma * (t - (beta / C) * x);
    Ok((x_prime, t_prime))
}

/// Undo [`transform`] by boosting with -β.
pub fn inverse_transform(x_prime: f64, t_prime: f64, beta: f64) -> Result<(f64, f64)> {
    check_beta(beta)?;
    transform(x_prime, t_prime, -beta)
}

/// Interval magnitude s = sqrt(|(ct)^2 - x^2|), the same in every inertial frame.
///
/// Evaluated as 2·sqrt(|ct/2 - x/2|)·sqrt(|ct/2 + x/2|), so no intermediate
/// squares: finite inputs never overflow and null events give exactly 0.
pub fn invariant(x: f64, t: f64) -> f64 {
    let ct = C * t;
    let diff = (0.5 * ct - 0.5 * x).abs();
    let sum = (0.5 * ct + 0.5 * x).abs();
    2.0 * (diff.sqrt() * sum.sqrt())
}

/// Strictly inside the light cone: |x| < |ct|, i.e. x^2 < (ct)^2.
/// Null events, the origin included, are not timelike.
pub fn is_timelike(x: f64, t: f64) -> bool {
    x.abs() < (C * t).abs()
}

/// Time dilation: Δt = γτ
pub fn time_dilation(proper_time: f64, beta: f64) -> Result<f64> {
    Ok(proper_time * lorentz_factor(beta)?)
}

/// Length contraction: L = L0 / γ
pub fn length_contraction(proper_length: f64, beta: f64) -> Result<f64> {
    let gamma = lorentz_factor(beta)?;
    Ok(proper_length / gamma)
}

/// What the invariant of an event measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    ProperTime,
    ProperDistance,
}

impl IntervalKind {
    pub fn label(self) -> &'static str {
        match self {
            IntervalKind::ProperTime => "proper time",
            IntervalKind::ProperDistance => "proper distance",
        }
    }

    pub fn separation(self) -> &'static str {
        match self {
            IntervalKind::ProperTime => "timelike",
            IntervalKind::ProperDistance => "spacelike",
        }
    }
}

impl std::fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn interval_kind(x: f64, t: f64) -> IntervalKind {
    if is_timelike(x, t) {
        IntervalKind::ProperTime
    } else {
        IntervalKind::ProperDistance
    }
}

/// A point (x, t) in 1+1 spacetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub x: f64,
    pub t: f64,
}

impl Event {
    pub const fn new(x: f64, t: f64) -> Self {
        Self { x, t }
    }

    pub fn boost(self, beta: f64) -> Result<Event> {
        let (x, t) = transform(self.x, self.t, beta)?;
        Ok(Event { x, t })
    }

    pub fn unboost(self, beta: f64) -> Result<Event> {
        let (x, t) = inverse_transform(self.x, self.t, beta)?;
        Ok(Event { x, t })
    }

    pub fn invariant(self) -> f64 {
        invariant(self.x, self.t)
    }

    pub fn is_timelike(self) -> bool {
        is_timelike(self.x, self.t)
    }

    pub fn interval_kind(self) -> IntervalKind {
        interval_kind(self.x, self.t)
    }
}

impl From<(f64, f64)> for Event {
    fn from((x, t): (f64, f64)) -> Self {
        Event { x, t }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn transform_known_values() {
        let (xp, tp) = transform(0.0, 1.0, 0.6).unwrap();
        assert!((xp + 0.75).abs() < EPS, "x' = {xp}");
        assert!((tp - 1.25).abs() < EPS, "t' = {tp}");
    }

    #[test]
    fn zero_beta_is_identity() {
        for &(x, t) in &[(3.5, -2.0), (0.0, 0.0), (-1e6, 7.25)] {
            assert_eq!(transform(x, t, 0.0).unwrap(), (x, t));
        }
    }

    #[test]
    fn rejects_superluminal_beta() {
        for &beta in &[1.0, -1.0, 1.5, -2.0] {
            assert_eq!(
                transform(1.0, 2.0, beta),
                Err(RelativityError::InvalidParameter { beta })
            );
            assert_eq!(
                inverse_transform(1.0, 2.0, beta),
                Err(RelativityError::InvalidParameter { beta })
            );
        }
        assert!(lorentz_factor(f64::NAN).is_err());
    }

    #[test]
    fn invariant_is_symmetric_under_swap() {
        assert!((invariant(3.0, 5.0) - 4.0).abs() < EPS);
        assert!((invariant(5.0, 3.0) - 4.0).abs() < EPS);
        assert_eq!(invariant(2.0, 2.0), 0.0);
    }

    #[test]
    fn light_cone_boundary_is_not_timelike() {
        assert!(is_timelike(0.0, 5.0));
        assert!(!is_timelike(5.0, 0.0));
        assert!(!is_timelike(3.0, 3.0));
        assert!(!is_timelike(-3.0, 3.0));
        assert!(!is_timelike(0.0, 0.0));
        assert_eq!(interval_kind(0.0, 0.0), IntervalKind::ProperDistance);
        assert_eq!(interval_kind(1.0, -4.0), IntervalKind::ProperTime);
    }

    #[test]
    fn kinematic_effects() {
        assert!((lorentz_factor(0.6).unwrap() - 1.25).abs() < EPS);
        assert_eq!(lorentz_factor(0.0).unwrap(), 1.0);
        assert!((time_dilation(10.0, 0.6).unwrap() - 12.5).abs() < 1e-9);
        assert!((length_contraction(100.0, 0.6).unwrap() - 80.0).abs() < 1e-9);
        assert!(length_contraction(100.0, 1.0).is_err());
    }

    #[test]
    fn event_methods_delegate() {
        let e = Event::new(2.0, 3.0);
        let boosted = e.boost(-0.3).unwrap();
        let back = boosted.unboost(-0.3).unwrap();
        assert!((back.x - e.x).abs() < 1e-12 && (back.t - e.t).abs() < 1e-12);
        assert!((boosted.invariant() - e.invariant()).abs() < 1e-12);
        assert_eq!(boosted.interval_kind(), IntervalKind::ProperTime);
    }
}
