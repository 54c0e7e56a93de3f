// Domain layer: core models, ports and the pure arena rules.

pub mod model;
pub mod ports;

pub mod services;
