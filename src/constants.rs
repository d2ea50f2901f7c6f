pub const SPEED_OF_LIGHT: f64 = 299_792.458; // km/s
pub const HUBBLE_TIME_GYR: f64 = 977.8; // Gyr km/s/Mpc, 1/H0 in Gyr is HUBBLE_TIME_GYR/H0
pub const RADIATION_DENSITY_H2: f64 = 4.165e-5; // Omega_r h^2, 3 massless neutrino species, T0 = 2.72528 K
pub const ARCSEC_PER_RADIAN_KPC: f64 = 206.264806; // Mpc/rad -> kpc/arcsec

pub const INTEGRATION_STEPS: usize = 1000;
pub const SERIES_THRESHOLD: f64 = 0.1;

pub const DEFAULT_H0: f64 = 67.0; // km/s/Mpc
pub const DEFAULT_OMEGA_M: f64 = 0.3;
pub const DEFAULT_OMEGA_L: f64 = 0.7;
