use common::SalesPoint;
use serde::{Deserialize, Serialize};

/// Chart-ready view of the sales series.
///
/// `labels` and `series` are index-aligned with the sales points they were
/// derived from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub series: Vec<f64>,
}

impl ChartDataset {
    /// Number of points on the chart
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, value)` pairs in x-axis order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.series.iter().copied())
    }
}

/// Maps a sales series into a chart dataset.
///
/// Pure and infallible: an empty series gives an empty dataset.
pub fn derive_chart_dataset(sales: &[SalesPoint]) -> ChartDataset {
    let (labels, series) = sales
        .iter()
        .map(|point| (point.time.clone(), point.value))
        .unzip();

    ChartDataset { labels, series }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(&str, f64)]) -> Vec<SalesPoint> {
        points
            .iter()
            .map(|(time, value)| SalesPoint::new(*time, *value))
            .collect()
    }

    #[test]
    fn test_derive_keeps_index_alignment() {
        let sales = series(&[("09:00 AM", 30.0), ("12:00 PM", 120.0), ("04:00 PM", 230.0)]);

        let dataset = derive_chart_dataset(&sales);

        assert_eq!(dataset.len(), sales.len());
        assert_eq!(dataset.series.len(), sales.len());
        for (idx, point) in sales.iter().enumerate() {
            assert_eq!(dataset.labels[idx], point.time);
            assert_eq!(dataset.series[idx], point.value);
        }
    }

    #[test]
    fn test_derive_empty_series() {
        let dataset = derive_chart_dataset(&[]);

        assert!(dataset.is_empty());
        assert_eq!(dataset, ChartDataset { labels: vec![], series: vec![] });
    }

    #[test]
    fn test_duplicate_labels_are_kept_in_order() {
        // The sample series has "12:00 PM" twice; both points must survive.
        let sales = series(&[("12:00 PM", 120.0), ("08:00 PM", 110.0), ("12:00 PM", 135.0)]);

        let dataset = derive_chart_dataset(&sales);

        assert_eq!(dataset.labels, vec!["12:00 PM", "08:00 PM", "12:00 PM"]);
        assert_eq!(dataset.series, vec![120.0, 110.0, 135.0]);
    }

    #[test]
    fn test_points_iterates_pairs() {
        let dataset = derive_chart_dataset(&series(&[("a", 1.0), ("b", 2.5)]));

        let points: Vec<_> = dataset.points().collect();
        assert_eq!(points, vec![("a", 1.0), ("b", 2.5)]);
    }
}
