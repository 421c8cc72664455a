pub mod admission;
pub mod roster;
