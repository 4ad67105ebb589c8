//! Step definitions for task descriptor BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
