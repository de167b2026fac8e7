// Domain layer: project model and ports. Concrete adapters live in core/ and config/.

pub mod model;
pub mod ports;
