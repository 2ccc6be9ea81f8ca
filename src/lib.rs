pub mod error;
pub mod io;
pub mod physics;
pub mod coverage;
pub mod analysis;
pub mod geo;
pub mod render;


pub use analysis::{AnalysisResult, run_analysis};
pub use error::DomainError;
pub use io::NetworkParameters;
