//! Quote math: fuel consumption cost and final bhada assembly.

pub mod fuel;
pub mod quote;
