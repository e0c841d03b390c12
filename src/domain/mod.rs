// Domain layer: classifier values, walkthrough nodes, and ports. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
