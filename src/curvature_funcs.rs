//! Curvature corrections that turn the comoving radial distance into the transverse
//! comoving distance and the comoving volume.
//!
//! Both corrections are written as a ratio to their flat-space value, as a function of
//! `x = sqrt(|omega_k|) * DCMR`. Above [`SERIES_THRESHOLD`] the closed hyperbolic (open)
//! or trigonometric (closed) forms are used; below it a Taylor series in `y = ±x^2`
//! avoids the cancellation of the closed forms near `x = 0`.

use libm::{exp, sin};

use crate::constants::SERIES_THRESHOLD;

/// `x^2`, negated for a closed universe.
pub fn signed_square(x: f64, omega_k: f64) -> f64 {
    let y = x * x;
    if omega_k < 0. {
        -y
    } else {
        y
    }
}

/// DCMT / DCMR.
pub fn transverse_ratio(x: f64, omega_k: f64) -> f64 {
    if x > SERIES_THRESHOLD {
        transverse_ratio_closed(x, omega_k)
    } else {
        transverse_ratio_series(signed_square(x, omega_k))
    }
}

/// sinh(x)/x for an open universe, sin(x)/x otherwise.
pub fn transverse_ratio_closed(x: f64, omega_k: f64) -> f64 {
    match omega_k {
        val if val > 0. => 0.5 * (exp(x) - exp(-x)) / x,
        _ => sin(x) / x,
    }
}

pub fn transverse_ratio_series(y: f64) -> f64 {
    1. + y / 6. + y * y / 120.
}

/// Comoving volume over its flat-space value `DCMR^3 / 3`.
pub fn volume_ratio(x: f64, omega_k: f64) -> f64 {
    if x > SERIES_THRESHOLD {
        volume_ratio_closed(x, omega_k)
    } else {
        volume_ratio_series(signed_square(x, omega_k))
    }
}

pub fn volume_ratio_closed(x: f64, omega_k: f64) -> f64 {
    let flat = x * x * x / 3.;
    match omega_k {
        val if val > 0. => (0.125 * (exp(2. * x) - exp(-2. * x)) - x / 2.) / flat,
        _ => (x / 2. - sin(2. * x) / 4.) / flat,
    }
}

pub fn volume_ratio_series(y: f64) -> f64 {
    1. + y / 5. + (2. / 105.) * y * y
}
