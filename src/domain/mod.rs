// Domain layer: value types and the port the engine is configured through.

pub mod model;
pub mod ports;
pub mod report;
