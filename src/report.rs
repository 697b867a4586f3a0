//! Class-wise statistics pipeline.
//!
//! One generic engine serves both attribute domains: the value extractor
//! decides how a number is pulled out of a record, so the directly-stored
//! and the derived attribute share the exact same grouping and aggregation
//! path.

use crate::dataset::Record;
use crate::grouping::group_by;
use crate::stats::{Aggregate, aggregate};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};

/// Statistics of one attribute for one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStats {
    pub class: String,

    #[serde(flatten)]
    pub aggregate: Aggregate,
}

/// Per-class statistics of one attribute, in class first-occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClassWiseStats {
    pub classes: Vec<ClassStats>,
}

/// Group records by class label and aggregate each bucket.
pub fn class_wise_stats<R, K, V>(records: &[R], key_fn: K, value_fn: V) -> ClassWiseStats
where
    K: Fn(&R) -> String,
    V: Fn(&R) -> f64,
{
    let classes = group_by(records, key_fn, value_fn)
        .into_iter()
        .map(|(class, values)| ClassStats {
            class,
            aggregate: aggregate(&values),
        })
        .collect();

    ClassWiseStats { classes }
}

/// Statistics of the directly-stored flavanoids attribute.
pub fn flavanoid_stats(records: &[Record]) -> ClassWiseStats {
    class_wise_stats(records, Record::class_label, Record::flavanoids)
}

/// Statistics of the derived gamma attribute.
///
/// Expects records that already went through
/// [`attach_gamma`](crate::gamma::attach_gamma).
pub fn gamma_stats(records: &[Record]) -> ClassWiseStats {
    class_wise_stats(records, Record::class_label, Record::gamma)
}

#[derive(Debug, Serialize)]
struct StatsDocument<'a> {
    #[serde(rename = "Flavanoids")]
    flavanoids: &'a ClassWiseStats,

    #[serde(rename = "Gamma")]
    gamma: &'a ClassWiseStats,
}

/// Save the statistics of both attribute domains to a JSON file.
pub fn save_stats<P: AsRef<Path>>(
    file: P,
    flavanoids: &ClassWiseStats,
    gamma: &ClassWiseStats,
) -> Result<()> {
    let file = file.as_ref();
    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &StatsDocument { flavanoids, gamma })
        .context("failed to serialize statistics")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamma::attach_gamma;
    use serde_json::json;

    fn sample_records() -> Vec<Record> {
        serde_json::from_value(json!([
            { "Alcohol": "1", "Flavanoids": "3.00" },
            { "Alcohol": "1", "Flavanoids": 2 },
            { "Alcohol": "2", "Flavanoids": 5 },
        ]))
        .expect("records should deserialize")
    }

    #[test]
    fn flavanoid_stats_end_to_end() {
        let stats = flavanoid_stats(&sample_records());

        assert_eq!(stats.classes.len(), 2);

        let first = &stats.classes[0];
        assert_eq!(first.class, "1");
        assert_eq!(first.aggregate.mean, 2.5);
        assert_eq!(first.aggregate.median, 2.5);
        assert_eq!(first.aggregate.mode, [2.0, 3.0]);

        let second = &stats.classes[1];
        assert_eq!(second.class, "2");
        assert_eq!(second.aggregate.mean, 5.0);
        assert_eq!(second.aggregate.median, 5.0);
        assert_eq!(second.aggregate.mode, [5.0]);
    }

    #[test]
    fn gamma_stats_use_the_derived_feature() {
        let records: Vec<Record> = serde_json::from_value(json!([
            { "Alcohol": "1", "Ash": 2, "Hue": 3, "Magnesium": 4 },
            { "Alcohol": "1", "Ash": "2", "Hue": "3", "Magnesium": "4" },
            { "Alcohol": "2", "Ash": 2, "Hue": 3, "Magnesium": 0 },
        ]))
        .expect("records should deserialize");

        let records = attach_gamma(records);
        let stats = gamma_stats(&records);

        assert_eq!(stats.classes[0].class, "1");
        assert_eq!(stats.classes[0].aggregate.mean, 1.5);
        assert_eq!(stats.classes[0].aggregate.median, 1.5);
        assert_eq!(stats.classes[0].aggregate.mode, [1.5]);

        // Zero magnesium guarded to a zero gamma.
        assert_eq!(stats.classes[1].class, "2");
        assert_eq!(stats.classes[1].aggregate.mean, 0.0);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let records = sample_records();
        assert_eq!(flavanoid_stats(&records), flavanoid_stats(&records));
    }

    #[test]
    fn empty_dataset_yields_empty_stats() {
        let stats = flavanoid_stats(&[]);
        assert!(stats.classes.is_empty());
    }

    #[test]
    fn stats_serialize_with_dataset_field_names() {
        let stats = flavanoid_stats(&sample_records());
        let value = serde_json::to_value(&stats).expect("stats should serialize");

        assert_eq!(value[0]["class"], "1");
        assert_eq!(value[0]["mean"], 2.5);
        assert_eq!(value[0]["mode"][0], 2.0);
    }
}
