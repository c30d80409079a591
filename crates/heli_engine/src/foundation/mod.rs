//! Foundation utilities shared by every subsystem: nalgebra aliases and the
//! degree-based matrix constructors, the fixed-step clock, and logger setup.

pub mod logging;
pub mod math;
pub mod time;
