//! Fixed names, thresholds and colours shared by the chart modules

use plotters::style::RGBColor;

/// Largest vertex count still considered a small graph
pub const SMALL_MAX_VERTICES: u32 = 30;

/// Largest vertex count still considered a medium graph
pub const MEDIUM_MAX_VERTICES: u32 = 300;

/// Largest vertex count still considered a large graph
pub const LARGE_MAX_VERTICES: u32 = 1000;

pub const EXECUTION_TIME_FILE: &str = "execution_time_comparison.png";
pub const OPERATION_COUNT_FILE: &str = "operation_count_comparison.png";
pub const TIME_BY_CATEGORY_FILE: &str = "time_by_category.png";
pub const PERFORMANCE_ADVANTAGE_FILE: &str = "performance_advantage.png";
pub const TIME_VS_EDGES_FILE: &str = "time_vs_edges.png";
pub const COST_VERIFICATION_FILE: &str = "cost_verification.png";

/// Every chart written by a run, in generation order
pub const CHART_FILES: [&str; 6] = [
    EXECUTION_TIME_FILE,
    OPERATION_COUNT_FILE,
    TIME_BY_CATEGORY_FILE,
    PERFORMANCE_ADVANTAGE_FILE,
    TIME_VS_EDGES_FILE,
    COST_VERIFICATION_FILE,
];

/// Series colour for Prim's algorithm (#2E86AB)
pub const PRIM_COLOR: RGBColor = RGBColor(0x2E, 0x86, 0xAB);

/// Series colour for Kruskal's algorithm (#A23B72)
pub const KRUSKAL_COLOR: RGBColor = RGBColor(0xA2, 0x3B, 0x72);

/// Affirmative colour, used for "Prim Faster" bars and the matching-cost status (#27AE60)
pub const AFFIRMATIVE_COLOR: RGBColor = RGBColor(0x27, 0xAE, 0x60);

/// Warning colour, used for "Kruskal Faster" bars and the cost-mismatch status (#E74C3C)
pub const WARNING_COLOR: RGBColor = RGBColor(0xE7, 0x4C, 0x3C);
