//! Per-axis summary statistics over the combined dataset.
//!
//! Pure aggregation recomputed on demand; it is cheap next to the grid
//! evaluation and needs no caching.

/// Summary of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSummary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// 75th minus 25th percentile.
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
}

/// Axis summaries plus the point count they were computed over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSummary {
    pub x: AxisSummary,
    pub y: AxisSummary,
    pub count: usize,
}

/// Summarize both axes of a point set. Returns `None` for an empty input.
pub fn summarize(points: &[[f64; 2]]) -> Option<DatasetSummary> {
    if points.is_empty() {
        return None;
    }
    let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
    let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
    Some(DatasetSummary {
        x: summarize_axis(&xs),
        y: summarize_axis(&ys),
        count: points.len(),
    })
}

fn summarize_axis(values: &[f64]) -> AxisSummary {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);

    AxisSummary {
        mean,
        median: percentile(&sorted, 50.0),
        std_dev: variance.sqrt(),
        iqr: q3 - q1,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

/// Linearly interpolated percentile of an ascending-sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn single_point_collapses_all_statistics() {
        let summary = summarize(&[[2.0, -3.0]]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.x.mean, 2.0);
        assert_eq!(summary.x.median, 2.0);
        assert_eq!(summary.x.std_dev, 0.0);
        assert_eq!(summary.x.iqr, 0.0);
        assert_eq!(summary.y.min, -3.0);
        assert_eq!(summary.y.max, -3.0);
    }

    #[test]
    fn matches_hand_computed_values() {
        let points: Vec<[f64; 2]> = (1..=5).map(|i| [i as f64, 10.0 * i as f64]).collect();
        let summary = summarize(&points).unwrap();
        assert_eq!(summary.x.mean, 3.0);
        assert_eq!(summary.x.median, 3.0);
        assert!((summary.x.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        // Quartiles of 1..=5 interpolate to 2 and 4.
        assert_eq!(summary.x.iqr, 2.0);
        assert_eq!(summary.y.min, 10.0);
        assert_eq!(summary.y.max, 50.0);
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 50.0), 2.5);
        assert_eq!(percentile(&sorted, 25.0), 1.75);
        assert_eq!(percentile(&sorted, 100.0), 4.0);
    }
}
