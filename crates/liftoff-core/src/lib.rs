//! Liftoff Core - headless generator for multi-module libGDX Gradle projects
//!
//! A generation request flows through these layers:
//!
//! - **Selection**: `ProjectSelection` (from a preset or a YAML file) names the
//!   platforms, languages, extensions and template to use
//! - **Registry**: compiled-in tables of platforms, JVM languages, extensions
//!   and templates, each able to `initiate` itself against a `Project`
//! - **Project**: the mutable context every initiate call writes into; owns the
//!   module build files, registered files and the property bag
//! - **Generator**: runs the fixed pipeline and saves everything to disk
//!
//! Library versions are looked up ahead of time through a `VersionSource` and
//! kept in a `VersionCache`; generation itself never touches the network.
//!
//! # Example Usage
//!
//! ```ignore
//! use liftoff_core::{generate, GeneratorConfig, Preset, Project, VersionCache};
//! use std::sync::Arc;
//!
//! let config = GeneratorConfig::from_env()?;
//! let selection = Preset::Default.selection(&config.output_root, config.android_sdk.clone());
//! let mut project = Project::new(&selection, Arc::new(VersionCache::new()))?;
//! generate(&mut project, &config.resources_dir, &mut |line| println!("{line}"))?;
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod generator;
pub mod gradle;
pub mod project;
pub mod registry;
pub mod runtime;
pub mod selection;
pub mod templates;
pub mod versions;

pub use config::GeneratorConfig;
pub use error::{GenerationError, GradleError, Result, VersionError};
pub use generator::{generate, save, versioned_artifacts};
pub use project::Project;
pub use registry::{Extension, JvmLanguage, Platform};
pub use runtime::{check_java, GradleRunner, RuntimeInfo};
pub use selection::{AdvancedOptions, Preset, ProjectSelection};
pub use versions::{MavenCentralSource, VersionCache, VersionSource};
