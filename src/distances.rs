//! The distance engine: age, lookback time and the distance ladder for one redshift.
//!
//! Every distance is derived from the single dimensionless comoving radial distance
//! `DCMR` (in units of c/H0). Conversion to Mpc goes through [`Cosmology::hubble_distance`]
//! and conversion to Gyr/Gly through [`Cosmology::hubble_time`].
//!
//! #Examples
//! ```
//! use cosmocalc::distances::compute;
//! let result = compute(67.0, 0.3, 0.7, 3.0).unwrap();
//! assert!((result.age_gyr - 14.0645).abs() < 1e-3);
//! assert!((result.comoving_distance_mpc - 6638.915).abs() < 1e-2);
//! ```

use std::f64::consts::PI;

use libm::{log10, pow};
use log::{debug, trace};

use crate::constants::{ARCSEC_PER_RADIAN_KPC, SPEED_OF_LIGHT};
use crate::cosmology_funcs::Cosmology;
use crate::curvature_funcs::{transverse_ratio, volume_ratio};
use crate::errors::{CosmoError, CosmoResult};

/// The twelve derived quantities, in report order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceResult {
    /// Age of the universe today [Gyr].
    pub age_gyr: f64,
    /// Age of the universe at the redshift [Gyr].
    pub age_at_z_gyr: f64,
    /// Light travel time from the redshift [Gyr].
    pub lookback_time_gyr: f64,
    pub comoving_distance_mpc: f64,
    pub comoving_distance_gly: f64,
    pub angular_diameter_distance_mpc: f64,
    pub angular_diameter_distance_gly: f64,
    /// Physical size subtended by one arcsecond [kpc/"].
    pub scale_kpc_per_arcsec: f64,
    /// All-sky comoving volume out to the redshift [Gpc^3].
    pub comoving_volume_gpc3: f64,
    pub luminosity_distance_mpc: f64,
    pub luminosity_distance_gly: f64,
    /// m - M. `None` when the luminosity distance is not positive (e.g. z = 0),
    /// where the logarithm is undefined.
    pub distance_modulus: Option<f64>,
}

impl DistanceResult {
    /// Values in report order; an undefined distance modulus becomes negative infinity.
    pub fn as_array(&self) -> [f64; 12] {
        [
            self.age_gyr,
            self.age_at_z_gyr,
            self.lookback_time_gyr,
            self.comoving_distance_mpc,
            self.comoving_distance_gly,
            self.angular_diameter_distance_mpc,
            self.angular_diameter_distance_gly,
            self.scale_kpc_per_arcsec,
            self.comoving_volume_gpc3,
            self.luminosity_distance_mpc,
            self.luminosity_distance_gly,
            self.distance_modulus.unwrap_or(f64::NEG_INFINITY),
        ]
    }

    fn check_finite(self) -> CosmoResult<Self> {
        let named = [
            ("age", self.age_gyr),
            ("age at z", self.age_at_z_gyr),
            ("lookback time", self.lookback_time_gyr),
            ("comoving distance", self.comoving_distance_mpc),
            ("angular diameter distance", self.angular_diameter_distance_mpc),
            ("comoving volume", self.comoving_volume_gpc3),
            ("luminosity distance", self.luminosity_distance_mpc),
            ("distance modulus", self.distance_modulus.unwrap_or(0.)),
        ];
        match named.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((quantity, value)) => Err(CosmoError::NonFinite { quantity, value }),
            None => Ok(self),
        }
    }
}

/// Scale factor at observation, `1 / (1 + z)`.
pub fn scale_factor(z: f64) -> CosmoResult<f64> {
    if !z.is_finite() || z <= -1. {
        return Err(CosmoError::InvalidRedshift(z));
    }
    Ok(1.0 / (1.0 + z))
}

/// Full table of distances for `(H0, Om, Ol)` at redshift `z`.
pub fn compute(h0: f64, omega_m: f64, omega_l: f64, z: f64) -> CosmoResult<DistanceResult> {
    Cosmology::new(h0, omega_m, omega_l)?.distances(z)
}

impl Cosmology {
    pub fn distances(&self, z: f64) -> CosmoResult<DistanceResult> {
        self.validate()?;
        let az = scale_factor(z)?;
        let omega_k = self.omega_k();
        debug!(
            "z = {z}, az = {az}, Or = {:e}, Ok = {:e} for H0 = {}, Om = {}, Ol = {}",
            self.omega_r(),
            omega_k,
            self.h0,
            self.omega_m,
            self.omega_l
        );

        // Independent integrals; each sum is sequential so the result does not depend on scheduling.
        let (age_at_z, lookback) = rayon::join(|| self.age_at(az), || self.lookback_and_comoving(az));
        let zage = age_at_z?;
        let (dtt, dcmr) = lookback?;
        trace!("zage = {zage}, DTT = {dtt}, DCMR = {dcmr} (Hubble units)");

        let hubble_time = self.hubble_time();
        let hubble_distance = self.hubble_distance();
        let age = dtt + zage;

        let x = omega_k.abs().sqrt() * dcmr;
        let dcmt = transverse_ratio(x, omega_k) * dcmr;
        let da = az * dcmt;
        let da_mpc = hubble_distance * da;
        let dl = da / az / az;
        let dl_mpc = hubble_distance * dl;
        let distance_modulus = (dl_mpc > 0.).then(|| 5.0 * log10(dl_mpc) + 25.0);

        let vcm = volume_ratio(x, omega_k) * dcmr * dcmr * dcmr / 3.0;
        let v_gpc = 4.0 * PI * pow(0.001 * SPEED_OF_LIGHT / self.h0, 3.0) * vcm;

        DistanceResult {
            age_gyr: age * hubble_time,
            age_at_z_gyr: hubble_time * zage,
            lookback_time_gyr: hubble_time * dtt,
            comoving_distance_mpc: hubble_distance * dcmr,
            comoving_distance_gly: hubble_time * dcmr,
            angular_diameter_distance_mpc: da_mpc,
            angular_diameter_distance_gly: hubble_time * da,
            scale_kpc_per_arcsec: da_mpc / ARCSEC_PER_RADIAN_KPC,
            comoving_volume_gpc3: v_gpc,
            luminosity_distance_mpc: dl_mpc,
            luminosity_distance_gly: hubble_time * dl,
            distance_modulus,
        }
        .check_finite()
    }

    /// Line of sight comoving distance in Mpc.
    pub fn comoving_distance(&self, z: f64) -> CosmoResult<f64> {
        Ok(self.distances(z)?.comoving_distance_mpc)
    }

    /// Transverse comoving distance in Mpc, `D_A (1 + z)`.
    pub fn comoving_transverse_distance(&self, z: f64) -> CosmoResult<f64> {
        Ok(self.distances(z)?.angular_diameter_distance_mpc * (1.0 + z))
    }

    pub fn luminosity_distance(&self, z: f64) -> CosmoResult<f64> {
        Ok(self.distances(z)?.luminosity_distance_mpc)
    }

    pub fn distance_modulus(&self, z: f64) -> CosmoResult<Option<f64>> {
        Ok(self.distances(z)?.distance_modulus)
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::HUBBLE_TIME_GYR;

    #[test]
    fn zero_redshift_is_here_and_now() {
        let result = Cosmology::default().distances(0.).unwrap();
        assert_eq!(result.comoving_distance_mpc, 0.);
        assert_eq!(result.angular_diameter_distance_mpc, 0.);
        assert_eq!(result.luminosity_distance_mpc, 0.);
        assert_eq!(result.scale_kpc_per_arcsec, 0.);
        assert_eq!(result.comoving_volume_gpc3, 0.);
        assert_eq!(result.lookback_time_gyr, 0.);
        assert_eq!(result.age_at_z_gyr, result.age_gyr);
        assert_eq!(result.distance_modulus, None);
        assert_eq!(result.as_array()[11], f64::NEG_INFINITY);
    }

    #[test]
    fn default_cosmology_at_redshift_three() {
        let result = compute(67.0, 0.3, 0.7, 3.0).unwrap();
        let answers = [
            14.064516, 2.20329, 11.861226, 6638.915089, 21.653417, 1659.672272, 5.41317,
            8.046318, 1225.63798, 26554.756356, 86.61072, 47.120712,
        ];
        for (res, ans) in zip(result.as_array(), answers) {
            assert!(((res - ans) / ans).abs() < 1e-6, "{res} != {ans}");
        }
    }

    #[test]
    fn open_and_closed_use_the_closed_forms() {
        // Ok ~ +0.1 and -0.1 push x = sqrt(|Ok|) DCMR well above the series threshold.
        let open = compute(70., 0.3, 0.6, 3.).unwrap();
        assert!((open.comoving_distance_mpc - 6129.831021).abs() < 1e-3);
        assert!((open.angular_diameter_distance_mpc - 1585.273473).abs() < 1e-3);
        assert!((open.comoving_volume_gpc3 - 1005.067068).abs() < 1e-3);

        let closed = compute(70., 0.3, 0.8, 3.).unwrap();
        assert!((closed.comoving_distance_mpc - 6609.62592).abs() < 1e-3);
        assert!((closed.angular_diameter_distance_mpc - 1587.533304).abs() < 1e-3);
        assert!((closed.comoving_volume_gpc3 - 1153.162388).abs() < 1e-3);
    }

    #[test]
    fn units_share_one_dimensionless_distance() {
        let result = compute(67.0, 0.3, 0.7, 2.0).unwrap();
        let ratio = HUBBLE_TIME_GYR / SPEED_OF_LIGHT;
        assert_relative_eq!(
            result.comoving_distance_gly / result.comoving_distance_mpc,
            ratio,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            result.angular_diameter_distance_gly / result.angular_diameter_distance_mpc,
            ratio,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            result.luminosity_distance_gly / result.luminosity_distance_mpc,
            ratio,
            max_relative = 1e-14
        );
        // Etherington: D_L = (1 + z)^2 D_A
        assert_relative_eq!(
            result.luminosity_distance_mpc,
            9. * result.angular_diameter_distance_mpc,
            max_relative = 1e-14
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let cosmo = Cosmology { h0: 70., omega_m: 0.3, omega_l: 0.6 };
        let first = cosmo.distances(1.7).unwrap();
        let second = cosmo.distances(1.7).unwrap();
        assert_eq!(first, second);
        for (a, b) in zip(first.as_array(), second.as_array()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn rejects_impossible_redshifts() {
        let cosmo = Cosmology::default();
        assert_eq!(cosmo.distances(-1.), Err(CosmoError::InvalidRedshift(-1.)));
        assert_eq!(cosmo.distances(-2.5), Err(CosmoError::InvalidRedshift(-2.5)));
        assert!(matches!(cosmo.distances(f64::NAN), Err(CosmoError::InvalidRedshift(_))));
        assert!(matches!(cosmo.distances(f64::INFINITY), Err(CosmoError::InvalidRedshift(_))));
    }

    #[test]
    fn non_physical_cosmology_is_reported_not_propagated() {
        let cosmo = Cosmology { h0: 70., omega_m: 0.1, omega_l: 3. };
        assert!(matches!(
            cosmo.distances(3.),
            Err(CosmoError::NonPhysicalExpansion { .. })
        ));
        assert!(matches!(
            compute(-70., 0.3, 0.7, 1.),
            Err(CosmoError::InvalidParameter { name: "H0", .. })
        ));
    }

    #[test]
    fn extreme_redshift_stays_finite() {
        // az * az underflows at z = 1e300; the age integrand must go to zero, not fail.
        let result = compute(70., 0.3, 0.7, 1e300).unwrap();
        let recombination = compute(70., 0.3, 0.7, 1000.).unwrap();
        assert!(result.age_at_z_gyr < 1e-6);
        assert!((result.lookback_time_gyr - result.age_gyr).abs() < 1e-6);
        assert!(result.comoving_distance_mpc.is_finite());
        assert!(result.comoving_distance_mpc >= recombination.comoving_distance_mpc);
        assert!(result.luminosity_distance_mpc.is_finite());
        assert!(result.luminosity_distance_mpc > 1e300);
        let modulus = result.distance_modulus.unwrap();
        assert!(modulus.is_finite() && modulus > 1500.);
    }

    #[test]
    fn vanishing_hubble_constant_is_a_parameter_error() {
        assert!(matches!(
            compute(1e-300, 0.3, 0.7, 1.),
            Err(CosmoError::InvalidParameter { name: "H0", .. })
        ));
    }

    #[test]
    fn testing_flat_cosmo_versus_celestial() {
        // Celestial numbers ignore radiation, which moves things by well under a Mpc here.
        let z = 0.3;
        let cosmo = Cosmology { h0: 70., omega_m: 0.3, omega_l: 0.7 };
        assert!((cosmo.comoving_distance(z).unwrap() - 1194.397).abs() < 0.05);
        assert!((cosmo.comoving_transverse_distance(z).unwrap() - 1194.397).abs() < 0.05);
        assert!((cosmo.distance_modulus(z).unwrap().unwrap() - 40.95546).abs() < 1e-4);
    }

    #[test]
    fn testing_distance_modulus() {
        // Comparing this calculation to celestials distance modulus.
        let cosmo = Cosmology { h0: 100., omega_m: 0.3, omega_l: 0.7 };
        let redshifts = [0.1, 0.2, 0.3, 1., 2., 4.];
        let answers = [37.54069, 39.18177, 40.18095, 43.32573, 45.18269, 46.99805];
        let results: Vec<f64> = redshifts
            .iter()
            .map(|&z| cosmo.distance_modulus(z).unwrap().unwrap())
            .collect();
        for (r, a) in zip(results, answers) {
            assert!((r - a).abs() < 5e-4)
        }
    }

    #[test]
    fn luminosity_distance_accessor() {
        let cosmo = Cosmology::default();
        assert!((cosmo.luminosity_distance(1.).unwrap() - 6902.963787).abs() < 1e-3);
    }
}
