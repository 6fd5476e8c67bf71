pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Visible world extents in meters. The origin stays in view; the window
/// only reaches below zero when the content does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Screen-space rectangle a window is mapped onto. `top < bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Extents within this distance of zero count as zero.
const ZERO_SNAP: f64 = 1e-9;

/// Padded `[min, max]` for one axis, always containing 0.
fn padded_axis(raw_min: f64, raw_max: f64, padding_ratio: f64) -> (f64, f64) {
    let raw_min = if raw_min < -ZERO_SNAP { raw_min } else { 0.0 };
    let raw_max = if raw_max > ZERO_SNAP { raw_max } else { 0.0 };
    let pad = (raw_max - raw_min).max(1.0) * padding_ratio;
    let min = if raw_min < 0.0 { raw_min - pad } else { 0.0 };
    let max = if raw_max > 0.0 || raw_min == 0.0 {
        raw_max + pad
    } else {
        0.0
    };
    (min, max)
}

impl AxisWindow {
    /// Window for content in the positive quadrant.
    pub fn fit(raw_max_x: f64, raw_max_y: f64) -> Self {
        Self::fit_extents((0.0, raw_max_x), (0.0, raw_max_y))
    }

    /// Pads the raw `(min, max)` extents and widens one axis on its positive
    /// side so the window keeps `DISTANCE_TO_HEIGHT_RATIO`.
    pub fn fit_extents(raw_x: (f64, f64), raw_y: (f64, f64)) -> Self {
        let (min_x, max_x) = padded_axis(raw_x.0, raw_x.1, X_PADDING_RATIO);
        let (min_y, max_y) = padded_axis(raw_y.0, raw_y.1, Y_PADDING_RATIO);

        let mut x_span = (max_x - min_x).max(1.0);
        let mut y_span = (max_y - min_y).max(1.0);

        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self {
            min_x,
            max_x: min_x + x_span,
            min_y,
            max_y: min_y + y_span,
        }
    }

    pub fn x_span(self) -> f64 {
        (self.max_x - self.min_x).max(1.0)
    }

    pub fn y_span(self) -> f64 {
        (self.max_y - self.min_y).max(1.0)
    }

    pub fn contains(self, world: (f64, f64)) -> bool {
        (self.min_x..=self.max_x).contains(&world.0)
            && (self.min_y..=self.max_y).contains(&world.1)
    }

    /// World point to plot coordinates, y growing downward.
    pub fn to_plot(self, world: (f64, f64), rect: PlotRect) -> (f64, f64) {
        let plot_w = (rect.right - rect.left).max(1.0);
        let plot_h = (rect.bottom - rect.top).max(1.0);
        let x = rect.left + ((world.0 - self.min_x) / self.x_span()) * plot_w;
        let y = rect.bottom - ((world.1 - self.min_y) / self.y_span()) * plot_h;
        (x, y)
    }

    /// Pixels per meter, taking the tighter of the two axes.
    pub fn scale(self, rect: PlotRect) -> f64 {
        let per_x = (rect.right - rect.left) / self.x_span();
        let per_y = (rect.bottom - rect.top) / self.y_span();
        per_x.min(per_y)
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn lerp_point(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    (lerp(a.0, b.0, t), lerp(a.1, b.1, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_extents_grow_height() {
        let window = AxisWindow::fit(100.0, 10.0);
        assert!((window.max_x - 106.0).abs() < 1e-9);
        assert!((window.max_y - 53.0).abs() < 1e-9);
    }

    #[test]
    fn tall_extents_grow_width() {
        let window = AxisWindow::fit(8.0, 10.0);
        assert!((window.max_y - 11.0).abs() < 1e-9);
        assert!((window.max_x / window.max_y - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-12);
    }

    #[test]
    fn degenerate_extents_keep_minimum_span() {
        let window = AxisWindow::fit(0.0, 0.0);
        assert_eq!(window.max_y, 1.0);
        assert_eq!(window.max_x, 2.0);
    }

    #[test]
    fn negative_extents_stay_in_view() {
        let window = AxisWindow::fit_extents((-77.3, 0.0), (-2.0, 20.0));
        assert!(window.min_x < -77.3);
        assert!(window.min_y < -2.0);
        assert!(window.contains((-77.3, -2.0)));
        assert!(window.contains((0.0, 20.0)));
        assert!((window.x_span() / window.y_span() - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-12);

        let forward = AxisWindow::fit_extents((0.0, 100.0), (-1e-15, 10.0));
        assert_eq!((forward.min_x, forward.min_y), (0.0, 0.0));
    }

    #[test]
    fn maps_offset_window_onto_plot() {
        let window = AxisWindow {
            min_x: -10.0,
            max_x: 10.0,
            min_y: -5.0,
            max_y: 5.0,
        };
        let rect = PlotRect {
            left: 0.0,
            right: 400.0,
            top: 0.0,
            bottom: 200.0,
        };
        assert_eq!(window.to_plot((0.0, 0.0), rect), (200.0, 100.0));
        assert_eq!(window.to_plot((-10.0, 5.0), rect), (0.0, 0.0));
    }

    #[test]
    fn maps_corners_of_plot() {
        let window = AxisWindow {
            min_x: 0.0,
            max_x: 20.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let rect = PlotRect {
            left: 100.0,
            right: 500.0,
            top: 50.0,
            bottom: 250.0,
        };
        assert_eq!(window.to_plot((0.0, 0.0), rect), (100.0, 250.0));
        assert_eq!(window.to_plot((20.0, 10.0), rect), (500.0, 50.0));
        assert_eq!(window.scale(rect), 20.0);
    }

    #[test]
    fn interpolates_between_points() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp_point((0.0, 1.75), (5.6, 7.35), 0.0), (0.0, 1.75));
        assert_eq!(lerp_point((0.0, 0.0), (4.0, -2.0), 0.25), (1.0, -0.5));
    }
}
