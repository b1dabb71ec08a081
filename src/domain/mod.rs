// Domain layer: source/review document models, ports, and review statistics.

pub mod model;
pub mod ports;
pub mod stats;
