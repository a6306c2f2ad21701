pub mod constants;
pub mod cost_verification;
pub mod execution_time;
pub mod operation_count;
pub mod performance_advantage;
pub mod time_by_category;
pub mod time_vs_edges;

pub use cost_verification::generate_cost_verification_plot;
pub use execution_time::generate_execution_time_plot;
pub use operation_count::generate_operation_count_plot;
pub use performance_advantage::generate_performance_advantage_plot;
pub use time_by_category::generate_time_by_category_plot;
pub use time_vs_edges::generate_time_vs_edges_plot;
