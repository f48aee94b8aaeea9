use serde::{Deserialize, Serialize};

/// One `[timestamp_ms, price]` sample of the provider's `prices` array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp_ms: u64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp_ms: u64, price: f64) -> Self {
        Self { timestamp_ms, price }
    }
}

impl From<(u64, f64)> for PricePoint {
    fn from((timestamp_ms, price): (u64, f64)) -> Self {
        Self { timestamp_ms, price }
    }
}

/// Ordered price history for one selection. Lives for a single render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Project into parallel label/value arrays, labels produced by `labeler`.
    pub fn labels_and_values<F>(&self, labeler: F) -> (Vec<String>, Vec<f64>)
    where
        F: Fn(u64) -> String,
    {
        self.points
            .iter()
            .map(|p| (labeler(p.timestamp_ms), p.price))
            .unzip()
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_order() {
        let series: PriceSeries = [(3u64, 1.5), (1, 2.5), (2, 3.5)]
            .into_iter()
            .map(PricePoint::from)
            .collect();
        let (labels, values) = series.labels_and_values(|ts| format!("t{ts}"));
        assert_eq!(labels, vec!["t3", "t1", "t2"]);
        assert_eq!(values, vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn empty_series_projects_to_empty_arrays() {
        let (labels, values) = PriceSeries::default().labels_and_values(|_| unreachable!());
        assert!(labels.is_empty());
        assert!(values.is_empty());
    }
}
