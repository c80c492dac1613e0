//! Step definitions for task board scenarios.

pub mod world;
