//! `key = value` configuration for the cosmology.
//!
//! Recognised keys are `H0`, `Om` and `Ol`. Keys missing from the input keep their
//! defaults (67.0, 0.3, 0.7), unknown keys are skipped with a warning, and the last
//! occurrence of a repeated key wins.
//!
//! #Examples
//! ```
//! use cosmocalc::config::parse_config;
//! let cosmo = parse_config("H0 = 70\nOm = 0.25\n").unwrap();
//! assert_eq!((cosmo.h0, cosmo.omega_m, cosmo.omega_l), (70., 0.25, 0.7));
//! ```

use std::io::BufRead;

use log::warn;

use crate::cosmology_funcs::Cosmology;
use crate::errors::ConfigError;

pub fn parse_config(input: &str) -> Result<Cosmology, ConfigError> {
    read_config(input.as_bytes())
}

pub fn read_config<R: BufRead>(reader: R) -> Result<Cosmology, ConfigError> {
    let mut cosmo = Cosmology::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = trimmed
            .split_once('=')
            .ok_or_else(|| ConfigError::MissingSeparator {
                line: line_number,
                content: line.clone(),
            })?;
        let (key, value) = (key.trim(), value.trim());

        let slot = match key {
            "H0" => &mut cosmo.h0,
            "Om" => &mut cosmo.omega_m,
            "Ol" => &mut cosmo.omega_l,
            _ => {
                warn!("Ignoring unknown configuration key {key:?} on line {line_number}");
                continue;
            }
        };
        *slot = value.parse::<f64>().map_err(|source| ConfigError::InvalidValue {
            line: line_number,
            key: key.to_string(),
            source,
        })?;
    }

    cosmo.validate()?;
    Ok(cosmo)
}
