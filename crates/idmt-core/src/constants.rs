// Shared curve and start-up constants used by every front-end.

// IEC 60255 Standard Inverse characteristic: t = K / ((I/Is)^ALPHA - 1) * TMS
pub const IEC_SI_K: f64 = 0.14;
pub const IEC_SI_ALPHA: f64 = 0.02;

// Default sampling grid over the multiple-of-pickup axis. Must match the chart x axis.
pub const DEFAULT_RANGE_START: f64 = 1.0;
pub const DEFAULT_RANGE_END: f64 = 15.0;
pub const DEFAULT_RANGE_STEP: f64 = 0.5;

// Upper bound on grid points per curve
pub const MAX_RANGE_POINTS: usize = 10_000;

// Slack when counting grid points so that `end` survives float rounding
pub const RANGE_EPSILON: f64 = 1e-9;

// Seed settings written into the inputs on start-up: (pickup current, TMS) per relay
pub const DEFAULT_SETTINGS: [(f64, f64); 3] = [
    (100.0, 0.2), // Rate A
    (120.0, 0.3), // Rate B
    (150.0, 0.4), // Rate C
];
