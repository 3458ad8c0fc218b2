pub mod assembler;
pub mod report;

pub use assembler::{assemble, ChartAssembler};
pub use report::{NatalChartReport, PlacedBody, UNKNOWN_SIGN};
