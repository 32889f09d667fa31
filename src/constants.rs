// Chart layout and styling constants for the web front-end.

// Host page elements
pub const CHART_CANVAS_ID: &str = "relayChart";

// Series styling, indexed like relay slots A, B, C
pub const SERIES_COLORS: [&str; 3] = ["red", "blue", "green"];
pub const SERIES_LINE_WIDTH: f64 = 2.0;
pub const SERIES_POINT_RADIUS: f64 = 3.0;
pub const SERIES_TENSION: f64 = 0.3; // 0 draws straight segments

// X axis: fixed multiple-of-pickup window, one tick per sample step
pub const X_AXIS_MIN: f64 = 1.0;
pub const X_AXIS_MAX: f64 = 15.0;
pub const X_TICK_STEP: f64 = 0.5;
pub const X_AXIS_TITLE: &str = "Multiple of Pickup Current (I/Is)";

// Y axis: starts at zero, top rounded to a nice step
pub const Y_MAX_TICKS: usize = 11;
pub const Y_AXIS_TITLE: &str = "Operating Time (s)";

// Text and grid
pub const AXIS_TEXT_COLOR: &str = "black";
pub const GRID_COLOR: &str = "rgba(0,0,0,0.1)";
pub const TITLE_FONT: &str = "bold 14px sans-serif";
pub const TICK_FONT: &str = "12px sans-serif";
pub const LEGEND_FONT: &str = "12px sans-serif";
pub const TICK_LENGTH: f64 = 6.0;

// Plot padding in CSS pixels (room for tick labels, titles and legend)
pub const PADDING_LEFT: f64 = 64.0;
pub const PADDING_RIGHT: f64 = 20.0;
pub const PADDING_TOP: f64 = 16.0;
pub const PADDING_BOTTOM: f64 = 88.0;

// Legend, centred below the x axis title
pub const LEGEND_BOX_WIDTH: f64 = 40.0;
pub const LEGEND_BOX_HEIGHT: f64 = 12.0;
pub const LEGEND_TEXT_GAP: f64 = 8.0;
pub const LEGEND_ITEM_GAP: f64 = 20.0;
pub const LEGEND_OFFSET_FROM_BOTTOM: f64 = 18.0;
