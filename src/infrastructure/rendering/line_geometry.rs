//! Pure layout math for the canvas line chart. No DOM access here.

/// Screen-space point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Rectangle the series is drawn into, after axes and legend are reserved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const PADDING_LEFT: f64 = 72.0;
    pub const PADDING_RIGHT: f64 = 16.0;
    pub const PADDING_TOP: f64 = 40.0;
    pub const PADDING_BOTTOM: f64 = 36.0;

    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: Self::PADDING_LEFT,
            top: Self::PADDING_TOP,
            width: (width - Self::PADDING_LEFT - Self::PADDING_RIGHT).max(1.0),
            height: (height - Self::PADDING_TOP - Self::PADDING_BOTTOM).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Value range of the y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Range covering `values` with 5% headroom on both sides. With
    /// `begin_at_zero` the lower bound is pulled down to zero.
    pub fn from_values(values: &[f64], begin_at_zero: bool) -> Option<Self> {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let (min, max) = finite.fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

        let span = max - min;
        let pad = if span > 0.0 { span * 0.05 } else { (max.abs() * 0.05).max(1.0) };
        let mut range = Self { min: min - pad, max: max + pad };
        if begin_at_zero {
            range.min = range.min.min(0.0);
        }
        Some(range)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Evenly spaced tick values on a 1/2/5 step, inside the range
    pub fn ticks(&self, max_ticks: usize) -> Vec<f64> {
        let span = self.span();
        if span <= 0.0 || max_ticks < 2 {
            return vec![self.min];
        }
        let step = nice_step(span / (max_ticks - 1) as f64);
        let first = (self.min / step).ceil() * step;
        // Counted up front: at large magnitudes `value += step` can stall.
        let count = (((self.max + step * 1e-9 - first) / step).floor() as usize + 1).min(max_ticks * 2);
        let mut ticks: Vec<f64> = (0..count)
            .map(|i| first + i as f64 * step)
            .filter(|v| *v <= self.max + step * 1e-9)
            .collect();
        ticks.dedup();
        ticks
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Decimal places for tick labels so adjacent ticks stay distinguishable
pub fn tick_precision(ticks: &[f64]) -> usize {
    match ticks {
        [a, b, ..] => {
            let step = (b - a).abs();
            if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize }
        }
        _ => 2,
    }
}

/// Map values onto the plot area, evenly spaced along x. A single value is
/// centred horizontally.
pub fn project(values: &[f64], area: &PlotArea, range: &ValueRange) -> Vec<Point> {
    let n = values.len();
    let span = if range.span() > 0.0 { range.span() } else { 1.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n > 1 {
                area.left + area.width * i as f64 / (n - 1) as f64
            } else {
                area.left + area.width / 2.0
            };
            let y = area.bottom() - (v - range.min) / span * area.height;
            Point::new(x, y)
        })
        .collect()
}

/// Bezier control points (before, after) for every point of a monotone-x
/// polyline, weighted by neighbour distance. `tension == 0` yields the
/// points themselves, i.e. straight segments.
pub fn control_points(points: &[Point], tension: f64) -> Vec<(Point, Point)> {
    (0..points.len())
        .map(|i| {
            let current = points[i];
            let prev = if i == 0 { current } else { points[i - 1] };
            let next = points.get(i + 1).copied().unwrap_or(current);

            let d01 = prev.distance(current);
            let d12 = current.distance(next);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };

            let fa = tension * s01;
            let fb = tension * s12;
            let dx = next.x - prev.x;
            let dy = next.y - prev.y;

            (
                Point::new(current.x - fa * dx, current.y - fa * dy),
                Point::new(current.x + fb * dx, current.y + fb * dy),
            )
        })
        .collect()
}

/// Show every n-th x label so that labels of `label_width` px don't overlap
pub fn label_stride(label_count: usize, available_width: f64, label_width: f64) -> usize {
    if label_count == 0 || available_width <= 0.0 {
        return 1;
    }
    let fits = (available_width / label_width.max(1.0)).floor().max(1.0) as usize;
    label_count.div_ceil(fits).max(1)
}

/// Canvas pixel size for a container width at the given aspect ratio
pub fn fit_size(container_width: f64, aspect_ratio: f64) -> (u32, u32) {
    let width = container_width.max(1.0);
    let ratio = if aspect_ratio > 0.0 { aspect_ratio } else { 2.0 };
    (width.round() as u32, (width / ratio).round().max(1.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_not_zero_based_unless_asked() {
        let r = ValueRange::from_values(&[42000.0, 43000.0], false).unwrap();
        assert!((r.min - 41950.0).abs() < 1e-9);
        assert!((r.max - 43050.0).abs() < 1e-9);

        let zero = ValueRange::from_values(&[42000.0, 43000.0], true).unwrap();
        assert_eq!(zero.min, 0.0);
    }

    #[test]
    fn flat_series_gets_headroom() {
        let r = ValueRange::from_values(&[5.0, 5.0], false).unwrap();
        assert!(r.min < 5.0 && r.max > 5.0);
        assert!(ValueRange::from_values(&[], false).is_none());
        assert!(ValueRange::from_values(&[f64::NAN], false).is_none());
    }

    #[test]
    fn ticks_use_round_steps() {
        let r = ValueRange { min: 41950.0, max: 43050.0 };
        let ticks = r.ticks(6);
        assert_eq!(ticks, vec![42000.0, 42500.0, 43000.0]);
        assert_eq!(tick_precision(&ticks), 0);
        assert_eq!(tick_precision(&[0.1, 0.15]), 2);
    }

    #[test]
    fn ticks_stay_bounded_for_large_narrow_ranges() {
        let r = ValueRange::from_values(&[1e16, 1e16 + 4.0], false).unwrap();
        let ticks = r.ticks(6);
        assert!(!ticks.is_empty() && ticks.len() <= 12);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn projection_spans_plot_area() {
        let area = PlotArea { left: 10.0, top: 0.0, width: 100.0, height: 50.0 };
        let range = ValueRange { min: 0.0, max: 10.0 };
        let pts = project(&[0.0, 10.0], &area, &range);
        assert_eq!(pts, vec![Point::new(10.0, 50.0), Point::new(110.0, 0.0)]);

        let single = project(&[5.0], &area, &range);
        assert_eq!(single, vec![Point::new(60.0, 25.0)]);
    }

    #[test]
    fn zero_tension_keeps_control_points_on_the_line() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        for ((before, after), p) in control_points(&pts, 0.0).into_iter().zip(pts) {
            assert_eq!(before, p);
            assert_eq!(after, p);
        }
    }

    #[test]
    fn tension_pulls_control_points_along_neighbours() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let cps = control_points(&pts, 0.1);
        assert!((cps[1].0.x - 0.9).abs() < 1e-12);
        assert!((cps[1].1.x - 1.1).abs() < 1e-12);
        assert_eq!(cps[0].0, pts[0]);
        assert_eq!(cps[2].1, pts[2]);
    }

    #[test]
    fn labels_are_thinned_to_fit() {
        assert_eq!(label_stride(10, 1000.0, 80.0), 1);
        assert_eq!(label_stride(168, 800.0, 80.0), 17);
        assert_eq!(label_stride(0, 800.0, 80.0), 1);
    }

    #[test]
    fn fit_size_keeps_aspect() {
        assert_eq!(fit_size(800.0, 2.0), (800, 400));
        assert_eq!(fit_size(0.0, 0.0), (1, 1));
    }
}
