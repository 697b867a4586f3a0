//! Text table presentation of class-wise statistics.

use crate::report::ClassWiseStats;
use crate::stats::Aggregate;
use std::fmt::Write;

/// Render one attribute's statistics as a fixed-precision text table.
///
/// One column per class, in first-occurrence order, with a measure label in
/// the first column. Numbers always display with 3 decimals, whatever the
/// aggregator already rounded. The mode row shows only the first (smallest)
/// element of the mode sequence.
pub fn render_table(attribute: &str, stats: &ClassWiseStats) -> String {
    let mut header = vec!["Measure".to_string()];
    header.extend(stats.classes.iter().map(|cls| format!("Class {}", cls.class)));

    let rows = [
        header,
        measure_row(format!("{attribute} Mean"), stats, |agg| agg.mean),
        measure_row(format!("{attribute} Median"), stats, |agg| agg.median),
        measure_row(format!("{attribute} Mode"), stats, |agg| agg.mode[0]),
    ];

    layout(&rows)
}

fn measure_row(
    label: String,
    stats: &ClassWiseStats,
    measure: impl Fn(&Aggregate) -> f64,
) -> Vec<String> {
    let mut row = vec![label];
    row.extend(
        stats
            .classes
            .iter()
            .map(|cls| format!("{:.3}", measure(&cls.aggregate))),
    );
    row
}

fn layout(rows: &[Vec<String>]) -> String {
    let n_cols = rows[0].len();
    let widths: Vec<usize> = (0..n_cols)
        .map(|col| rows.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                line.push_str("  ");
            }
            let _ = write!(line, "{cell:<width$}", width = widths[col]);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
