//! Domain model types

pub mod id_sequence;
pub mod registration;
pub mod vehicle;

pub use id_sequence::IdSequence;
pub use vehicle::{VehicleBuilder, VehicleRecord};
