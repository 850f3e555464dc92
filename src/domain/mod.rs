// Domain layer: the item model and the ports (comparator, catalog source) the core is written against.

pub mod model;
pub mod ports;
