//! Calculator constants and defaults

/// Maintenance margin rate assumed by the liquidation model (0.5%)
pub const MAINTENANCE_MARGIN_RATE: f64 = 0.005;

/// Risk per trade above this percentage draws a validation error
pub const MAX_RECOMMENDED_RISK_PERCENTAGE: f64 = 10.0;

/// Leverage above this multiple draws a validation error
pub const MAX_SAFE_LEVERAGE: f64 = 100.0;

/// Risk/reward ratio at or above this is considered excellent
pub const EXCELLENT_RATIO: f64 = 2.0;

/// Risk/reward ratio at or above this is considered good
pub const GOOD_RATIO: f64 = 1.5;

/// Default position size for ratio-only risk/reward calculations
pub const DEFAULT_POSITION_SIZE: f64 = 1.0;

/// Relative price moves of the fixed scenario ladder, with display labels
pub const SCENARIO_LADDER: [(&str, f64); 7] = [
    ("-20%", -0.20),
    ("-10%", -0.10),
    ("-5%", -0.05),
    ("Entry", 0.0),
    ("+5%", 0.05),
    ("+10%", 0.10),
    ("+20%", 0.20),
];

/// Maximum number of retained history entries
pub const MAX_HISTORY_ENTRIES: usize = 20;
