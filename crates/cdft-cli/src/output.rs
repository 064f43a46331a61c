use crate::error::{CliError, Result};
use cdft::core::value::ModelValue;
use cdft::models::descriptors::GlobalDescriptors;
use nalgebra::DVector;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// `E(N)` and `dE/dN` at one requested electron count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub electrons: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative: Option<f64>,
}

impl Evaluation {
    pub fn new(electrons: f64, energy: ModelValue, derivative: ModelValue) -> Self {
        Self {
            electrons,
            energy: energy.value(),
            derivative: derivative.value(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GlobalReport<'a> {
    descriptors: &'a GlobalDescriptors,
    #[serde(rename = "evaluation", skip_serializing_if = "no_evaluations")]
    evaluations: &'a [Evaluation],
}

fn no_evaluations(evaluations: &&[Evaluation]) -> bool {
    evaluations.is_empty()
}

/// Opens `path` for writing, or standard output when no path is given.
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

fn format_value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => ModelValue::Undefined.to_string(),
    }
}

pub fn write_global_pretty(
    writer: &mut impl Write,
    descriptors: &GlobalDescriptors,
    evaluations: &[Evaluation],
    precision: usize,
) -> Result<()> {
    let p = &descriptors.parameters;
    writeln!(writer, "Linear energy model")?;
    writeln!(writer, "{:-<48}", "")?;
    writeln!(
        writer,
        "{:<26} E(N) = {:.prec$} + {:.prec$} N",
        "N <= N0",
        p.a,
        p.b,
        prec = precision
    )?;
    writeln!(
        writer,
        "{:<26} E(N) = {:.prec$} + {:.prec$} N",
        "N >= N0",
        p.a_prime,
        p.b_prime,
        prec = precision
    )?;
    writeln!(writer)?;
    writeln!(writer, "Global descriptors")?;
    writeln!(writer, "{:-<48}", "")?;
    for (name, value) in descriptors.rows() {
        writeln!(writer, "{:<26} {:>20}", name, format_value(value, precision))?;
    }

    if !evaluations.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{:<12} {:>20} {:>20}", "N", "E(N)", "dE/dN")?;
        writeln!(writer, "{:-<54}", "")?;
        for eval in evaluations {
            writeln!(
                writer,
                "{:<12} {:>20} {:>20}",
                eval.electrons,
                format_value(eval.energy, precision),
                format_value(eval.derivative, precision)
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_global_toml(
    writer: &mut impl Write,
    descriptors: &GlobalDescriptors,
    evaluations: &[Evaluation],
) -> Result<()> {
    let report = GlobalReport {
        descriptors,
        evaluations,
    };
    let content = toml::to_string(&report)?;
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes one `index,value` row per sample point.
pub fn write_field_csv(writer: impl Write, field: &DVector<f64>) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["index", "value"])?;
    for (index, value) in field.iter().enumerate() {
        csv_writer.serialize((index, value))?;
    }
    csv_writer.flush()?;
    Ok(())
}
