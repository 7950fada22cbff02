// Domain layer: the tier/vehicle model. No dependencies beyond std/serde.

pub mod model;
