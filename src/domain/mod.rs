// Domain layer: records, table model and the ports the live search talks through.

pub mod model;
pub mod ports;
