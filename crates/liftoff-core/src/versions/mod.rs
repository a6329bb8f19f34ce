//! Library version lookup
//!
//! This module provides:
//! - Artifact coordinates and the repository each one is published to
//! - A `VersionSource` abstraction over the remote package index
//! - A concurrent cache warmed in the background before generation
//! - Lenient version comparison for picking the latest stable release

pub mod cache;
pub mod compare;
pub mod fetcher;

use std::fmt;

pub use cache::VersionCache;
pub use compare::{compare_versions, is_stable};
pub use fetcher::{MavenCentralSource, VersionSource, FETCH_TIMEOUT};

/// Where an artifact is published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repository {
    MavenCentral,
    /// Built on demand by JitPack; there is no index to query for the latest release
    JitPack,
}

/// A `group:name` pair identifying a library on its repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Artifact {
    pub group: &'static str,
    pub name: &'static str,
    pub repository: Repository,
}

impl Artifact {
    pub const fn maven(group: &'static str, name: &'static str) -> Self {
        Self {
            group,
            name,
            repository: Repository::MavenCentral,
        }
    }

    pub const fn jitpack(group: &'static str, name: &'static str) -> Self {
        Self {
            group,
            name,
            repository: Repository::JitPack,
        }
    }

    /// Cache key
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    pub fn is_searchable(&self) -> bool {
        self.repository == Repository::MavenCentral
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}
