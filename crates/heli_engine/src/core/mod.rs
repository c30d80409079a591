//! Simulation-wide settings

pub mod config;
