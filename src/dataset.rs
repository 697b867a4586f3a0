//! Wine dataset records and loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// Raw dataset field that may arrive from JSON as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// One row of the wine dataset.
///
/// The class label lives in the `Alcohol` column of the reference dataset,
/// and every numeric column may legally be encoded as a number or as a
/// string. `Gamma` is absent on load and filled in by the derivation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Alcohol")]
    class_label: RawValue,

    #[serde(rename = "Flavanoids")]
    flavanoids: Option<RawValue>,

    #[serde(rename = "Ash")]
    ash: Option<RawValue>,

    #[serde(rename = "Hue")]
    hue: Option<RawValue>,

    #[serde(rename = "Magnesium")]
    magnesium: Option<RawValue>,

    #[serde(rename = "Gamma", skip_serializing_if = "Option::is_none")]
    gamma: Option<f64>,
}

impl Record {
    /// Get the class label as text, whatever its raw encoding.
    pub fn class_label(&self) -> String {
        match &self.class_label {
            RawValue::Text(text) => text.clone(),
            RawValue::Number(num) if num.fract() == 0.0 => format!("{num:.0}"),
            RawValue::Number(num) => num.to_string(),
        }
    }

    pub fn flavanoids(&self) -> f64 {
        normalize(self.flavanoids.as_ref())
    }

    pub fn ash(&self) -> f64 {
        normalize(self.ash.as_ref())
    }

    pub fn hue(&self) -> f64 {
        normalize(self.hue.as_ref())
    }

    pub fn magnesium(&self) -> f64 {
        normalize(self.magnesium.as_ref())
    }

    /// Get the derived gamma feature, or `0.0` if it was never attached.
    pub fn gamma(&self) -> f64 {
        self.gamma.unwrap_or(0.0)
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }
}

/// Coerce a raw field into a number.
///
/// Total and pure: numbers pass through unchanged, text is parsed as a
/// float, and unparseable or missing input becomes `0.0`. Malformed data
/// silently turning into zeros can bias the statistics; the policy lives in
/// this one function so it can be swapped without touching grouping or
/// aggregation.
pub fn normalize(raw: Option<&RawValue>) -> f64 {
    match raw {
        Some(RawValue::Number(num)) => *num,
        Some(RawValue::Text(text)) => text.trim().parse().unwrap_or(0.0),
        None => 0.0,
    }
}

/// Load the dataset from a JSON file.
///
/// Any retrieval failure (missing file, unreadable, malformed payload) is
/// recovered by returning an empty collection: the pipeline treats an empty
/// dataset as valid degenerate input and produces empty tables, not an error.
pub fn load_records<P: AsRef<Path>>(file: P) -> Vec<Record> {
    match read_records(file.as_ref()) {
        Ok(records) => records,
        Err(error) => {
            log::warn!("failed to load dataset: {error:#}");
            Vec::new()
        }
    }
}

fn read_records(file: &Path) -> Result<Vec<Record>> {
    let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader).context("failed to deserialize records")?;
    Ok(records)
}
