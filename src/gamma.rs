//! Derived composite ratio feature.

use crate::dataset::Record;
use crate::stats::round3;

/// Compute the gamma ratio `(ash * hue) / magnesium` from pre-normalized
/// inputs, rounded to 3 decimals.
///
/// A zero magnesium yields `0.0` instead of a division error.
pub fn derive_gamma(ash: f64, hue: f64, magnesium: f64) -> f64 {
    if magnesium == 0.0 {
        return 0.0;
    }
    round3((ash * hue) / magnesium)
}

/// Attach the gamma feature to every record.
///
/// Runs over the entire collection before any grouping happens, so the
/// derived attribute is aggregated exactly like a directly-stored one.
pub fn attach_gamma(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|record| {
            let gamma = derive_gamma(record.ash(), record.hue(), record.magnesium());
            record.with_gamma(gamma)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_magnesium_guards_division() {
        assert_eq!(derive_gamma(2.0, 3.0, 0.0), 0.0);
        assert_eq!(derive_gamma(1000.0, 1000.0, 0.0), 0.0);
    }

    #[test]
    fn gamma_is_rounded_ratio() {
        assert_eq!(derive_gamma(2.0, 3.0, 4.0), 1.5);
        assert_eq!(derive_gamma(2.14, 1.05, 127.0), 0.018);
    }

    #[test]
    fn attaches_gamma_to_every_record() {
        let records: Vec<Record> = serde_json::from_value(json!([
            { "Alcohol": "1", "Ash": 2, "Hue": 3, "Magnesium": "4" },
            { "Alcohol": "2", "Ash": 2, "Hue": 3, "Magnesium": 0 },
        ]))
        .expect("records should deserialize");

        let records = attach_gamma(records);
        assert_eq!(records[0].gamma(), 1.5);
        assert_eq!(records[1].gamma(), 0.0);
    }
}
