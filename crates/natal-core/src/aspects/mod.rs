pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, AspectCalculator};
pub use types::{
    AspectBody, AspectBodyRef, AspectDefinition, AspectSeverity, DetectedAspect,
    ASPECT_DEFINITIONS,
};
