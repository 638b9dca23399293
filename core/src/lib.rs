pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod graph;
pub mod search;
pub mod stats;

// Re-export commonly used items
pub use config::{GridConfig, LatticeConfig, PipelineConfig};
pub use driver::{CancelToken, Pacing, RunOutcome, SearchTask, run};
pub use error::{ConfigError, DriverError, MazeParseError, SearchError};
pub use events::{EventBus, EventSink, FnSink, SearchEvent, TracingSink};
pub use graph::{AdjacencyGraph, Cell, Graph, Grid, Lattice, Pipeline, Voxel};
pub use search::{BidirectionalSearch, Direction, Path, SearchPhase, SearchState, reconstruct_path};
pub use stats::SearchStats;
