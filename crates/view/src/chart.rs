//! Price chart specification.
//!
//! A [`ChartSpec`] is everything a charting primitive needs to build a chart
//! from scratch: the data, the labels and the fixed visual configuration.
//! Charts are rebuilt on every render, so the configuration travels with the
//! data instead of living on a long-lived chart object.

use types::format_money;

/// Series name shown in the legend.
pub const SERIES_LABEL: &str = "Crypto Price";
/// Title of the x axis.
pub const X_AXIS_TITLE: &str = "Simulation Cycle";
/// Title of the y axis.
pub const Y_AXIS_TITLE: &str = "Price ($)";

/// How a numeric value is turned into text on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `$` with two decimals.
    Currency,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Currency => format_money(value),
        }
    }
}

/// Axis used to resolve hover hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    X,
}

/// Hover interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMode {
    /// Snap to the nearest point along `axis`; the cursor need not touch it.
    Nearest { axis: AxisMode, intersect: bool },
}

/// Fixed, data-independent chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub series_label: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub begin_at_zero: bool,
    pub tooltip_format: ValueFormat,
    pub y_tick_format: ValueFormat,
    pub hover: HoverMode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_label: SERIES_LABEL,
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: Y_AXIS_TITLE,
            begin_at_zero: false,
            tooltip_format: ValueFormat::Currency,
            y_tick_format: ValueFormat::Currency,
            hover: HoverMode::Nearest {
                axis: AxisMode::X,
                intersect: false,
            },
        }
    }
}

/// Complete description of one price chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// `"Cycle 0"`, `"Cycle 1"`, ... one per point.
    pub labels: Vec<String>,
    /// `(index, price)` pairs.
    pub points: Vec<(f64, f64)>,
    pub config: ChartConfig,
}

impl ChartSpec {
    /// Build a spec from a price series. An empty series yields an empty chart.
    pub fn from_history(prices: &[f64]) -> Self {
        Self {
            labels: (0..prices.len()).map(|i| format!("Cycle {}", i)).collect(),
            points: prices
                .iter()
                .enumerate()
                .map(|(i, &p)| (i as f64, p))
                .collect(),
            config: ChartConfig::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Right edge of the x axis (at least 1 so a single point is visible).
    pub fn x_max(&self) -> f64 {
        (self.points.len().saturating_sub(1) as f64).max(1.0)
    }

    /// Y axis bounds with padding.
    ///
    /// Flat series get a minimum range of 2% of the mid price or 2.0,
    /// whichever is larger; otherwise the range is padded by 10% on each side.
    /// Returns `None` for an empty chart.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min_price = self.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_price = self
            .points
            .iter()
            .map(|p| p.1)
            .fold(f64::NEG_INFINITY, f64::max);

        let mid_price = (min_price + max_price) / 2.0;
        let min_range = (mid_price.abs() * 0.02).max(2.0);
        let actual_range = max_price - min_price;

        let (mut lo, hi) = if actual_range < min_range {
            let half_range = min_range / 2.0;
            (mid_price - half_range, mid_price + half_range)
        } else {
            let y_padding = actual_range * 0.1;
            (min_price - y_padding, max_price + y_padding)
        };
        if self.config.begin_at_zero {
            lo = lo.min(0.0);
        }
        Some((lo, hi))
    }

    /// Index of the point nearest to `x` along the x axis.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        if self.points.is_empty() || !x.is_finite() {
            return None;
        }
        let last = self.points.len() - 1;
        Some((x.round().max(0.0) as usize).min(last))
    }

    /// Tooltip text for the point at `index` (`"Price: $104.20"`).
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.points
            .get(index)
            .map(|&(_, y)| format!("Price: {}", self.config.tooltip_format.format(y)))
    }

    /// Tick label for a y axis value.
    pub fn y_tick(&self, value: f64) -> String {
        self.config.y_tick_format.format(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_index_based() {
        let spec = ChartSpec::from_history(&[100.0, 101.5, 99.0]);
        assert_eq!(spec.labels, vec!["Cycle 0", "Cycle 1", "Cycle 2"]);
        assert_eq!(spec.points[1], (1.0, 101.5));
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn test_empty_history_is_valid() {
        let spec = ChartSpec::from_history(&[]);
        assert!(spec.is_empty());
        assert!(spec.labels.is_empty());
        assert!(spec.y_bounds().is_none());
        assert!(spec.nearest_index(0.0).is_none());
        assert_eq!(spec.config, ChartConfig::default());
    }

    #[test]
    fn test_config_is_fixed() {
        let a = ChartSpec::from_history(&[1.0]);
        let b = ChartSpec::from_history(&[5.0, 6.0, 7.0]);
        assert_eq!(a.config, b.config);
        assert!(!a.config.begin_at_zero);
        assert_eq!(
            a.config.hover,
            HoverMode::Nearest {
                axis: AxisMode::X,
                intersect: false
            }
        );
    }

    #[test]
    fn test_flat_series_gets_minimum_range() {
        let spec = ChartSpec::from_history(&[100.0, 100.0, 100.0]);
        let (lo, hi) = spec.y_bounds().unwrap();
        assert!((lo - 99.0).abs() < 1e-9);
        assert!((hi - 101.0).abs() < 1e-9);
    }

    #[test]
    fn test_wide_series_is_padded() {
        let spec = ChartSpec::from_history(&[90.0, 110.0]);
        let (lo, hi) = spec.y_bounds().unwrap();
        assert!((lo - 88.0).abs() < 1e-9);
        assert!((hi - 112.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_point_tooltip() {
        let spec = ChartSpec::from_history(&[100.0, 104.2, 110.5]);
        assert_eq!(spec.nearest_index(1.4), Some(1));
        assert_eq!(spec.nearest_index(7.0), Some(2));
        assert_eq!(spec.nearest_index(-3.0), Some(0));
        assert_eq!(spec.tooltip(1).as_deref(), Some("Price: $104.20"));
        assert_eq!(spec.y_tick(98.0), "$98.00");
    }
}
