// Domain layer: records, request shapes and the ports the core depends on.

pub mod model;
pub mod ports;
