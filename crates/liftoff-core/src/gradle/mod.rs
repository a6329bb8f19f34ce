//! Gradle build descriptors
//!
//! Each module accumulates dependencies and plugin ids while the registry
//! initiates; the text is only rendered when the project is saved. All
//! collections are sets, so re-adding anything is a no-op and the rendered
//! output is sorted.

mod modules;
mod root;

use crate::project::Project;
use crate::registry::Platform;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub use root::RootGradleFile;

/// `build.gradle` of a single module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleFile {
    platform: Platform,
    dependencies: BTreeSet<String>,
    special_dependencies: BTreeSet<String>,
    plugins: BTreeSet<String>,
}

impl GradleFile {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            dependencies: BTreeSet::new(),
            special_dependencies: BTreeSet::new(),
            plugins: BTreeSet::new(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Add a `group:name:version[:classifier]` coordinate. The coordinate is
    /// quoted but otherwise passed through untouched.
    pub fn add_dependency(&mut self, coordinate: &str) {
        self.dependencies.insert(format!("\"{coordinate}\""));
    }

    /// Add a complete dependency line, e.g. one with exclusions or a
    /// non-standard configuration
    pub fn add_special_dependency(&mut self, line: impl Into<String>) {
        self.special_dependencies.insert(line.into());
    }

    pub fn add_plugin(&mut self, plugin: impl Into<String>) {
        self.plugins.insert(plugin.into());
    }

    /// Quoted coordinates
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    pub fn special_dependencies(&self) -> &BTreeSet<String> {
        &self.special_dependencies
    }

    pub fn plugins(&self) -> &BTreeSet<String> {
        &self.plugins
    }

    /// Core exposes its dependencies to every launcher
    pub fn dependency_type(&self) -> &'static str {
        match self.platform {
            Platform::Core | Platform::Shared => "api",
            _ => "implementation",
        }
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.platform.id()).join("build.gradle")
    }

    /// The `dependencies { }` block, sorted
    pub fn dependencies_block(&self) -> String {
        let mut block = String::from("dependencies {\n");
        for dependency in &self.dependencies {
            block.push_str(&format!("  {} {}\n", self.dependency_type(), dependency));
        }
        for line in &self.special_dependencies {
            block.push_str(&format!("  {line}\n"));
        }
        block.push_str("}\n");
        block
    }

    pub(crate) fn plugins_block(&self) -> String {
        self.plugins
            .iter()
            .map(|p| format!("apply plugin: '{p}'\n"))
            .collect()
    }

    /// Full text of the build script
    pub fn content(&self, project: &Project) -> String {
        modules::render(self, project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_dependencies_collapse() {
        let mut file = GradleFile::new(Platform::Core);
        file.add_dependency("com.badlogicgames.gdx:gdx:$gdxVersion");
        file.add_dependency("com.badlogicgames.gdx:gdx:$gdxVersion");
        assert_eq!(file.dependencies().len(), 1);
        assert!(file
            .dependencies()
            .contains("\"com.badlogicgames.gdx:gdx:$gdxVersion\""));
    }

    #[test]
    fn test_malformed_coordinates_pass_through() {
        let mut file = GradleFile::new(Platform::Lwjgl3);
        file.add_dependency("not a coordinate");
        assert!(file.dependencies_block().contains("implementation \"not a coordinate\""));
    }

    #[test]
    fn test_dependencies_block_is_sorted() {
        let mut file = GradleFile::new(Platform::Core);
        file.add_dependency("z.group:z:1");
        file.add_dependency("a.group:a:1");
        file.add_special_dependency("api project(':shared')");

        assert_eq!(
            file.dependencies_block(),
            "dependencies {\n  api \"a.group:a:1\"\n  api \"z.group:z:1\"\n  api project(':shared')\n}\n"
        );
    }

    #[test]
    fn test_path_uses_module_id() {
        assert_eq!(
            GradleFile::new(Platform::Android).path(),
            PathBuf::from("android/build.gradle")
        );
    }
}
