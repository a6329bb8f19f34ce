//! Post-generation tooling
//!
//! This module provides:
//! - Java runtime detection
//! - A Gradle runner that streams build output line by line

pub mod check;
pub mod gradle;

pub use check::{check_java, RuntimeInfo};
pub use gradle::GradleRunner;
