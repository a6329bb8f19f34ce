//! Generator configuration read from the environment

pub mod generator;

pub use generator::{detect_android_sdk, GeneratorConfig};
