use crate::domain::chart::value_objects::{
    AxisOptions, ChartConfiguration, ChartData, ChartKind, ChartOptions, ChartStyle, Dataset, Scales,
};
use crate::domain::market_data::{PriceSeries, Selection};

/// Domain service that turns a fetched series into a chart description
pub struct ChartConfigService;

impl ChartConfigService {
    /// Single-series line chart: y axis follows the data, responsive sizing,
    /// legend names the coin and currency of `selection`.
    pub fn line_chart<F>(selection: &Selection, series: &PriceSeries, style: &ChartStyle, labeler: F) -> ChartConfiguration
    where
        F: Fn(u64) -> String,
    {
        let (labels, values) = series.labels_and_values(labeler);

        ChartConfiguration {
            kind: ChartKind::Line,
            data: ChartData {
                labels,
                datasets: vec![Dataset {
                    label: selection.series_label(),
                    data: values,
                    border_color: style.border_color.clone(),
                    fill: false,
                    tension: style.tension,
                }],
            },
            options: ChartOptions {
                responsive: true,
                aspect_ratio: style.aspect_ratio,
                scales: Scales { y: AxisOptions { begin_at_zero: false } },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::PricePoint;

    #[test]
    fn builds_fixed_line_configuration() {
        let selection = Selection::new("ethereum", "eur", "30");
        let series = PriceSeries::new(vec![PricePoint::new(10, 1.0), PricePoint::new(20, 2.0)]);
        let config = ChartConfigService::line_chart(&selection, &series, &ChartStyle::default(), |ts| ts.to_string());

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.labels, vec!["10", "20"]);
        assert_eq!(config.data.datasets.len(), 1);
        let dataset = &config.data.datasets[0];
        assert_eq!(dataset.label, "ethereum price (eur)");
        assert_eq!(dataset.border_color, "rgb(75, 192, 192)");
        assert!(!dataset.fill);
        assert_eq!(dataset.tension, 0.1);
        assert!(config.options.responsive);
        assert!(!config.options.scales.y.begin_at_zero);
    }

    #[test]
    fn serialises_in_chartjs_shape() {
        let config = ChartConfigService::line_chart(
            &Selection::default(),
            &PriceSeries::default(),
            &ChartStyle::default(),
            |ts| ts.to_string(),
        );
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "rgb(75, 192, 192)");
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
    }
}
