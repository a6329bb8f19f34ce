//! Static registry of platforms, JVM languages and extensions
//!
//! The candidate set is closed, so every component is a compiled-in table
//! entry looked up by id. Extensions may require other extensions; those are
//! resolved depth-first, each at most once per project, and a cycle in the
//! requirement graph is reported instead of recursing forever.

pub mod extension;
pub mod ktx;
pub mod languages;
mod launchers;
pub mod official;
pub mod platforms;
pub mod third_party;

use crate::error::{GenerationError, Result};
use crate::project::Project;
use std::collections::{BTreeSet, HashSet};

pub use extension::{Dependency, Extension, ExtensionKind, Versioning};
pub use languages::JvmLanguage;
pub use platforms::Platform;

/// Every extension, official ones first
pub fn extensions() -> impl Iterator<Item = &'static Extension> {
    official::OFFICIAL
        .iter()
        .chain(third_party::THIRD_PARTY.iter())
        .chain(ktx::KTX.iter())
}

pub fn extension(id: &str) -> Option<&'static Extension> {
    extensions().find(|e| e.id == id)
}

/// Languages required by the given extensions or anything they pull in
pub fn required_languages<'a, I>(ids: I) -> Result<BTreeSet<JvmLanguage>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut languages = BTreeSet::new();
    let mut seen = HashSet::new();
    let mut pending: Vec<&str> = ids.into_iter().collect();
    while let Some(id) = pending.pop() {
        if !seen.insert(id) {
            continue;
        }
        let extension =
            extension(id).ok_or_else(|| GenerationError::UnknownExtension(id.to_string()))?;
        languages.extend(extension.language);
        pending.extend(extension.requires.iter().copied());
    }
    Ok(languages)
}

/// Bookkeeping for extension resolution within one project
#[derive(Debug, Default)]
pub struct Resolution {
    satisfied: HashSet<&'static str>,
    /// Extensions currently being resolved, outermost first
    stack: Vec<&'static str>,
}

impl Resolution {
    pub fn is_satisfied(&self, id: &str) -> bool {
        self.satisfied.contains(id)
    }

    pub fn satisfied(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.satisfied.iter().copied()
    }

    fn enter(&mut self, id: &'static str) -> Result<()> {
        if let Some(start) = self.stack.iter().position(|s| *s == id) {
            let mut chain: Vec<String> = self.stack[start..].iter().map(|s| s.to_string()).collect();
            chain.push(id.to_string());
            return Err(GenerationError::CyclicDependency(chain));
        }
        self.stack.push(id);
        Ok(())
    }

    fn leave(&mut self, id: &'static str) {
        self.stack.retain(|s| *s != id);
        self.satisfied.insert(id);
    }
}

/// Initiate an extension by id, after everything it requires
pub fn initiate_extension(project: &mut Project, id: &str) -> Result<()> {
    initiate_with(project, id, &extension)
}

/// Resolution against an arbitrary lookup table
pub(crate) fn initiate_with(
    project: &mut Project,
    id: &str,
    lookup: &dyn Fn(&str) -> Option<&'static Extension>,
) -> Result<()> {
    let extension = lookup(id).ok_or_else(|| GenerationError::UnknownExtension(id.to_string()))?;
    if project.resolution.is_satisfied(extension.id) {
        return Ok(());
    }

    project.resolution.enter(extension.id)?;
    for required in extension.requires {
        initiate_with(project, required, lookup)?;
    }
    tracing::debug!(extension = extension.id, "initiating extension");
    extension.initiate(project)?;
    project.resolution.leave(extension.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Preset;
    use crate::versions::{Artifact, VersionCache};
    use std::path::Path;
    use std::sync::Arc;

    fn project(platforms: &[&str]) -> Project {
        let mut selection = Preset::Default.selection(Path::new("/tmp/liftoff"), None);
        selection.platforms = platforms.iter().map(|s| s.to_string()).collect();
        Project::new(&selection, Arc::new(VersionCache::new())).unwrap()
    }

    const ALL_PLATFORMS: &[&str] = &[
        "core", "lwjgl3", "android", "ios", "html", "headless", "server", "shared", "teavm",
    ];

    static CYCLE: [Extension; 3] = [
        Extension::third_party("a", "A", "", "").requires(&["b"]),
        Extension::third_party("b", "B", "", "").requires(&["c"]),
        Extension::third_party("c", "C", "", "").requires(&["a"]),
    ];

    static COUNTED: [Extension; 2] = [
        Extension::third_party("base", "Base", "", "")
            .versioned(Artifact::maven("com.example", "base"), "baseVersion", "1.0")
            .dependencies(&[Dependency::Library(Platform::Core, "com.example:base")]),
        Extension::third_party("top", "Top", "", "").requires(&["base", "base"]),
    ];

    fn cycle_lookup(id: &str) -> Option<&'static Extension> {
        CYCLE.iter().find(|e| e.id == id)
    }

    fn counted_lookup(id: &str) -> Option<&'static Extension> {
        COUNTED.iter().find(|e| e.id == id)
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for extension in extensions() {
            assert!(seen.insert(extension.id), "duplicate id {}", extension.id);
        }
    }

    #[test]
    fn test_requirements_exist_and_are_acyclic() {
        for extension in extensions() {
            for required in extension.requires {
                assert!(
                    super::extension(required).is_some(),
                    "{} requires unknown {}",
                    extension.id,
                    required
                );
            }
            let mut project = project(&["core"]);
            initiate_extension(&mut project, extension.id).unwrap();
        }
    }

    #[test]
    fn test_every_extension_initiates_on_every_platform() {
        for extension in extensions() {
            let mut project = project(ALL_PLATFORMS);
            initiate_extension(&mut project, extension.id).unwrap();
            for file in project.gradle_files() {
                let unique: HashSet<_> = file.dependencies().iter().collect();
                assert_eq!(unique.len(), file.dependencies().len());
            }
        }
    }

    #[test]
    fn test_transitive_requirement_reaches_core() {
        let mut project = project(&["core", "lwjgl3"]);
        initiate_extension(&mut project, "box2dlights").unwrap();

        let core = project.gradle_file(Platform::Core).unwrap();
        assert!(core
            .dependencies()
            .contains("\"com.badlogicgames.gdx:gdx-box2d:$gdxVersion\""));
        assert!(project.resolution.is_satisfied("box2d"));
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut project = project(&["core"]);
        let err = initiate_with(&mut project, "a", &cycle_lookup).unwrap_err();
        match err {
            GenerationError::CyclicDependency(chain) => {
                assert_eq!(chain, vec!["a", "b", "c", "a"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolution_is_memoized() {
        let mut project = project(&["core"]);
        initiate_with(&mut project, "top", &counted_lookup).unwrap();
        initiate_with(&mut project, "base", &counted_lookup).unwrap();

        let satisfied: BTreeSet<_> = project.resolution.satisfied().collect();
        assert_eq!(satisfied, BTreeSet::from(["base", "top"]));
        let core = project.gradle_file(Platform::Core).unwrap();
        assert_eq!(core.dependencies().len(), 1);
    }

    #[test]
    fn test_required_languages_follow_requirements() {
        let languages = required_languages(["ktxVis"]).unwrap();
        assert!(languages.contains(&JvmLanguage::Kotlin));
        assert!(required_languages(["box2dlights"]).unwrap().is_empty());
        assert!(required_languages(["missing"]).is_err());
    }
}
