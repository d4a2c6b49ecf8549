// Domain layer: value types and ports. The core works only against these.

pub mod model;
pub mod ports;
