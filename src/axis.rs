// Axis scaling, tick placement and data-to-canvas mapping for the chart.

use glam::DVec2;

/// Closed numeric interval shown along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAxis {
    pub min: f64,
    pub max: f64,
}

impl LinearAxis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` as a fraction of the axis, 0 at `min` and 1 at `max`.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.span() > 0.0 {
            (v - self.min) / self.span()
        } else {
            0.0
        }
    }

    /// Tick values `min, min + step, ... <= max`, computed by index.
    pub fn ticks_every(&self, step: f64) -> Vec<f64> {
        if !(step > 0.0) || self.span() < 0.0 {
            return Vec::new();
        }
        let count = (self.span() / step + 1e-9).floor() as usize + 1;
        (0..count).map(|i| self.min + i as f64 * step).collect()
    }
}

/// Whole numbers print bare, everything else with one decimal (`2`, `2.5`).
pub fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

/// Label for a value on an axis ticked every `step`, with just enough
/// decimals to tell neighbouring ticks apart.
pub fn format_value(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || !(step > 0.0) {
        0
    } else {
        (-step.log10() - 1e-9).ceil() as usize
    };
    format!("{v:.decimals$}")
}

/// Round `x` to 1, 2, 5 or 10 times a power of ten.
///
/// With `round` the nearest such value is chosen, otherwise the next one up.
pub fn nice_num(x: f64, round: bool) -> f64 {
    if !(x > 0.0) || !x.is_finite() {
        return 1.0;
    }
    let exp = x.log10().floor();
    let f = x / 10f64.powf(exp);
    let nf = if round {
        if f < 1.5 {
            1.0
        } else if f < 3.0 {
            2.0
        } else if f < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nf * 10f64.powf(exp)
}

/// Time axis starting at zero whose top is a whole number of nice steps
/// at or above `max_value`. An empty chart gets `0..1`.
pub fn zero_based_axis(max_value: Option<f64>, max_ticks: usize) -> (LinearAxis, f64) {
    let top = max_value
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(1.0);
    let intervals = max_ticks.max(2) - 1;
    let step = nice_num(nice_num(top, false) / intervals as f64, true);
    let max = (top / step - 1e-9).ceil() * step;
    (LinearAxis::new(0.0, max.max(step)), step)
}

/// Pixel rectangle the data is drawn into, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub top_left: DVec2,
    pub size: DVec2,
}

impl PlotArea {
    /// Canvas size minus padding on each side; never negative.
    pub fn inset(canvas: DVec2, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let size = (canvas - DVec2::new(left + right, top + bottom)).max(DVec2::ZERO);
        Self {
            top_left: DVec2::new(left, top),
            size,
        }
    }

    pub fn bottom_right(&self) -> DVec2 {
        self.top_left + self.size
    }

    /// Map a data point to canvas coordinates; y grows downwards on canvas.
    pub fn to_canvas(&self, x_axis: &LinearAxis, y_axis: &LinearAxis, x: f64, y: f64) -> DVec2 {
        let fx = x_axis.fraction(x);
        let fy = y_axis.fraction(y);
        DVec2::new(
            self.top_left.x + fx * self.size.x,
            self.top_left.y + (1.0 - fy) * self.size.y,
        )
    }
}
