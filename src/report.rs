use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::distances::DistanceResult;
use crate::errors::ReportError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `key = value  # description [unit]`, one quantity per line.
    #[default]
    Commented,
    /// Tab separated `variable value units` with a header.
    Table,
}

struct Field {
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    comment: &'static str,
}

const FIELDS: [Field; 12] = [
    Field { key: "t0", label: "t(0)", unit: "Gyr", comment: "age of the Universe [Gyr]" },
    Field { key: "tz", label: "t(z)", unit: "Gyr", comment: "time at redshift z [Gyr]" },
    Field { key: "DLTT", label: "DLTT", unit: "Gyr", comment: "time from redshift z [Gyr]" },
    Field { key: "DCMR", label: "DCMR", unit: "Mpc", comment: "comoving radial distance [Mpc]" },
    Field { key: "DCMR", label: "DCMR", unit: "Gly", comment: "comoving radial distance [Gly]" },
    Field { key: "DA", label: "DA", unit: "Mpc", comment: "angular size distance [Mpc]" },
    Field { key: "DA", label: "DA", unit: "Gly", comment: "angular size distance [Gly]" },
    Field { key: "scale", label: "scale", unit: "kpc/\"", comment: "scale [kpc/\"]" },
    Field { key: "V", label: "V", unit: "Gpc3", comment: "volume [Gpc^3]" },
    Field { key: "DL", label: "DL", unit: "Mpc", comment: "luminosity distance [Mpc]" },
    Field { key: "DL", label: "DL", unit: "Gly", comment: "luminosity distance [Gly]" },
    Field { key: "mM", label: "mM", unit: "-", comment: "distance modulus m-M" },
];

pub fn write_report<W: Write>(
    writer: W,
    result: &DistanceResult,
    format: ReportFormat,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Commented => write_commented(writer, result),
        ReportFormat::Table => write_table(writer, result),
    }
}

fn write_commented<W: Write>(mut writer: W, result: &DistanceResult) -> Result<(), ReportError> {
    for (field, value) in FIELDS.iter().zip(result.as_array()) {
        writeln!(writer, "{:<6}= {:12.3}  # {}", field.key, value, field.comment)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(writer: W, result: &DistanceResult) -> Result<(), ReportError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(["variable", "value", "units"])?;
    wtr.write_record(["--------", "-----", "-----"])?;
    for (field, value) in FIELDS.iter().zip(result.as_array()) {
        let value = format!("{value:13.3}");
        wtr.write_record([field.label, value.as_str(), field.unit])?;
    }
    wtr.flush()?;
    Ok(())
}
