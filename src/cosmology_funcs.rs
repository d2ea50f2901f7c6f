use std::fmt;

use crate::constants::{
    DEFAULT_H0, DEFAULT_OMEGA_L, DEFAULT_OMEGA_M, HUBBLE_TIME_GYR, INTEGRATION_STEPS,
    RADIATION_DENSITY_H2, SPEED_OF_LIGHT,
};
use crate::errors::{CosmoError, CosmoResult};
use crate::integration_funcs::midpoint_rule;

/// FLRW cosmology described by the Hubble constant (km/s/Mpc) and the matter and
/// dark energy density fractions. Radiation and curvature are always derived from
/// these three, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosmology {
    pub h0: f64,
    pub omega_m: f64,
    pub omega_l: f64,
}

impl Default for Cosmology {
    fn default() -> Self {
        Cosmology {
            h0: DEFAULT_H0,
            omega_m: DEFAULT_OMEGA_M,
            omega_l: DEFAULT_OMEGA_L,
        }
    }
}

impl Cosmology {
    pub fn new(h0: f64, omega_m: f64, omega_l: f64) -> CosmoResult<Self> {
        let cosmo = Cosmology { h0, omega_m, omega_l };
        cosmo.validate()?;
        Ok(cosmo)
    }

    pub fn validate(&self) -> CosmoResult<()> {
        if !self.h0.is_finite() || self.h0 <= 0. {
            return Err(CosmoError::InvalidParameter {
                name: "H0",
                value: self.h0,
                reason: "must be finite and positive",
            });
        }
        if !self.omega_r().is_finite() {
            return Err(CosmoError::InvalidParameter {
                name: "H0",
                value: self.h0,
                reason: "too small for a finite radiation density",
            });
        }
        for (name, value) in [("Om", self.omega_m), ("Ol", self.omega_l)] {
            if !value.is_finite() {
                return Err(CosmoError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }

    pub fn little_h(&self) -> f64 {
        self.h0 / 100.
    }

    pub fn omega_r(&self) -> f64 {
        let h = self.little_h();
        RADIATION_DENSITY_H2 / (h * h)
    }

    pub fn omega_k(&self) -> f64 {
        1. - self.omega_m - self.omega_r() - self.omega_l
    }

    /// c/H0 in Mpc.
    pub fn hubble_distance(&self) -> f64 {
        SPEED_OF_LIGHT / self.h0
    }

    /// 1/H0 in Gyr.
    pub fn hubble_time(&self) -> f64 {
        HUBBLE_TIME_GYR / self.h0
    }

    /// Dimensionless Hubble rate H(z)/H0.
    pub fn e_func(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        (self.omega_r() * zp1.powi(4)
            + self.omega_m * zp1.powi(3)
            + self.omega_k() * zp1.powi(2)
            + self.omega_l)
            .sqrt()
    }

    /// da/dt in units of H0 at scale factor `a`.
    pub fn adot(&self, a: f64) -> CosmoResult<f64> {
        self.densities().adot(a)
    }

    /// Age of the universe at scale factor `az`, in units of 1/H0.
    pub fn age_at(&self, az: f64) -> CosmoResult<f64> {
        let densities = self.densities();
        let [age] = midpoint_rule(0., az, INTEGRATION_STEPS, |a| {
            Ok([1. / densities.adot(a)?])
        })?;
        Ok(age)
    }

    /// Lookback time and comoving radial distance from `az` to today, in units of 1/H0 and c/H0.
    pub fn lookback_and_comoving(&self, az: f64) -> CosmoResult<(f64, f64)> {
        let densities = self.densities();
        let [lookback, comoving] = midpoint_rule(az, 1., INTEGRATION_STEPS, |a| {
            let adot = densities.adot(a)?;
            Ok([1. / adot, 1. / (a * adot)])
        })?;
        Ok((lookback, comoving))
    }

    fn densities(&self) -> Densities {
        Densities {
            omega_k: self.omega_k(),
            omega_m: self.omega_m,
            omega_r: self.omega_r(),
            omega_l: self.omega_l,
        }
    }
}

// Derived densities resolved once per integral rather than per sample.
struct Densities {
    omega_k: f64,
    omega_m: f64,
    omega_r: f64,
    omega_l: f64,
}

impl Densities {
    // An infinite radicand near a = 0 is fine: the integrands become 1/inf = 0.
    fn adot(&self, a: f64) -> CosmoResult<f64> {
        let adot_squared =
            self.omega_k + (self.omega_m / a) + (self.omega_r / (a * a)) + (self.omega_l * a * a);
        if adot_squared > 0. && !adot_squared.is_nan() {
            Ok(adot_squared.sqrt())
        } else {
            Err(CosmoError::NonPhysicalExpansion {
                scale_factor: a,
                adot_squared,
            })
        }
    }
}

/// Writes the record as `key = value` lines, readable by [`crate::config::parse_config`].
impl fmt::Display for Cosmology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "H0 = {}", self.h0)?;
        writeln!(f, "Om = {}", self.omega_m)?;
        writeln!(f, "Ol = {}", self.omega_l)
    }
}
