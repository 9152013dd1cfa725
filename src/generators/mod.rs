// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{generate, GeneratorError};
pub use strength::{assess, assess_strength, calculate_entropy};
