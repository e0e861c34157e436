// Domain layer: models, wire documents and ports. No I/O here.

pub mod artifact;
pub mod documents;
pub mod model;
pub mod ports;
