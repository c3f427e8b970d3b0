//! Engine-wide constants.
//!
//! Centralizes limits and presentation values so the parser, projectors and
//! settings layer agree on the same defaults.

// ============================================================================
// Upload Limits
// ============================================================================

/// Maximum accepted upload size in bytes (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Suffix appended to the base name of exported files
pub const EXPORT_SUFFIX: &str = "_processed";

// ============================================================================
// Chart Limits
// ============================================================================

/// Maximum number of pie slices
pub const PIE_MAX_SLICES: usize = 8;

/// Maximum number of bar groups
pub const BAR_MAX_GROUPS: usize = 10;

/// Maximum number of points in line/area sequences
pub const SEQUENCE_MAX_POINTS: usize = 20;

// ============================================================================
// Chart Styling
// ============================================================================

/// Hue distance in degrees between consecutive numeric series
pub const SERIES_HUE_STEP: u32 = 60;

/// Saturation (percent) shared by every series color
pub const SERIES_SATURATION: u8 = 70;

/// Lightness (percent) shared by every series color
pub const SERIES_LIGHTNESS: u8 = 50;

/// Stack id carried by stacked area series
pub const AREA_STACK_ID: &str = "1";

/// Fixed pie slice palette, assigned by slice index
pub const PIE_COLORS: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D", "#FFC658", "#FF7C7C",
];

// ============================================================================
// Performance
// ============================================================================

/// Operations slower than this are logged as warnings
pub const SLOW_OPERATION_MS: f64 = 250.0;
