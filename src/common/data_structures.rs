use crate::analysis::constants::{LARGE_MAX_VERTICES, MEDIUM_MAX_VERTICES, SMALL_MAX_VERTICES};
use serde::Deserialize;

/// Precomputed equality flag between the Prim and Kruskal MST costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CostMatch {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

/// Benchmark results for a single graph, one per line of `output.csv`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultRow {
    /// Identifier assigned by the benchmark runner (not present in all exports)
    #[serde(rename = "Graph_ID", default)]
    pub graph_id: Option<u64>,
    /// Number of vertices in the graph
    #[serde(rename = "Vertices")]
    pub vertices: u32,
    /// Number of edges in the graph
    #[serde(rename = "Edges")]
    pub edges: u64,
    /// Execution time of Prim's algorithm in milliseconds
    #[serde(rename = "Prim_Time_ms")]
    pub prim_time_ms: f64,
    /// Execution time of Kruskal's algorithm in milliseconds
    #[serde(rename = "Kruskal_Time_ms")]
    pub kruskal_time_ms: f64,
    /// Operation counter reported by Prim's algorithm
    #[serde(rename = "Prim_Operations")]
    pub prim_operations: u64,
    /// Operation counter reported by Kruskal's algorithm
    #[serde(rename = "Kruskal_Operations")]
    pub kruskal_operations: u64,
    /// Total MST weight found by Prim's algorithm
    #[serde(rename = "Prim_Cost")]
    pub prim_cost: f64,
    /// Total MST weight found by Kruskal's algorithm
    #[serde(rename = "Kruskal_Cost")]
    pub kruskal_cost: f64,
    /// Whether both costs were equal when the benchmark ran
    #[serde(rename = "Cost_Match")]
    pub cost_match: CostMatch,
}

impl ResultRow {
    /// Size category of the benchmarked graph
    pub fn category(&self) -> Category {
        Category::from_vertices(self.vertices)
    }

    /// Kruskal time minus Prim time, in milliseconds
    pub fn time_difference_ms(&self) -> f64 {
        self.kruskal_time_ms - self.prim_time_ms
    }

    /// Returns the first column holding a value no chart can plot, with that value
    ///
    /// Times must be finite and non-negative; costs must be finite.
    pub fn out_of_range_value(&self) -> Option<(&'static str, f64)> {
        let times = [
            ("Prim_Time_ms", self.prim_time_ms),
            ("Kruskal_Time_ms", self.kruskal_time_ms),
        ];
        let costs = [
            ("Prim_Cost", self.prim_cost),
            ("Kruskal_Cost", self.kruskal_cost),
        ];

        times
            .into_iter()
            .find(|&(_, ms)| !ms.is_finite() || ms < 0.0)
            .or_else(|| costs.into_iter().find(|&(_, cost)| !cost.is_finite()))
    }
}

/// Coarse graph size bucket derived from the vertex count
///
/// Upper bounds are inclusive, so a graph with exactly 30 vertices is [`Category::Small`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Category {
    /// All categories, in the order they are plotted
    pub const ALL: [Category; 4] = [
        Category::Small,
        Category::Medium,
        Category::Large,
        Category::ExtraLarge,
    ];

    pub fn from_vertices(vertices: u32) -> Self {
        if vertices <= SMALL_MAX_VERTICES {
            Category::Small
        } else if vertices <= MEDIUM_MAX_VERTICES {
            Category::Medium
        } else if vertices <= LARGE_MAX_VERTICES {
            Category::Large
        } else {
            Category::ExtraLarge
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Small => "Small",
            Category::Medium => "Medium",
            Category::Large => "Large",
            Category::ExtraLarge => "Extra Large",
        }
    }

    /// Human-readable vertex range covered by this category (e.g. "31-300")
    pub fn range_label(self) -> String {
        match self {
            Category::Small => format!("1-{}", SMALL_MAX_VERTICES),
            Category::Medium => format!("{}-{}", SMALL_MAX_VERTICES + 1, MEDIUM_MAX_VERTICES),
            Category::Large => format!("{}-{}", MEDIUM_MAX_VERTICES + 1, LARGE_MAX_VERTICES),
            Category::ExtraLarge => format!(">{}", LARGE_MAX_VERTICES),
        }
    }
}
