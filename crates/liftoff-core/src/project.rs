//! The project aggregate threaded through every initiate call

use crate::error::{GenerationError, Result};
use crate::files::{Properties, ProjectFile};
use crate::gradle::{GradleFile, RootGradleFile};
use crate::registry::{self, Extension, JvmLanguage, Platform, Resolution};
use crate::selection::{AdvancedOptions, ProjectSelection};
use crate::templates::{self, Template};
use crate::versions::{Artifact, VersionCache};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Mutable state for one generation request.
///
/// Every module's build file is created up front, so extensions can always
/// look one up for any selected platform. Everything extensions write into
/// is a set or an ordered map with replace semantics, which makes repeated
/// initiation harmless.
#[derive(Debug)]
pub struct Project {
    pub name: String,
    pub root_package: String,
    pub main_class: String,
    pub destination: PathBuf,
    pub android_sdk: Option<PathBuf>,
    pub advanced: AdvancedOptions,

    platforms: Vec<Platform>,
    languages: BTreeSet<JvmLanguage>,
    official_extensions: Vec<&'static Extension>,
    third_party_extensions: Vec<&'static Extension>,
    template: &'static Template,

    /// Flushed to `gradle.properties`
    pub properties: Properties,
    files: BTreeMap<PathBuf, ProjectFile>,
    gradle_files: BTreeMap<Platform, GradleFile>,
    pub root_gradle: RootGradleFile,

    pub gwt_inherits: BTreeSet<String>,
    pub android_permissions: BTreeSet<String>,
    pub reflected_classes: BTreeSet<String>,
    pub reflected_packages: BTreeSet<String>,
    /// `task` -> description, listed in the README
    pub gradle_tasks: BTreeMap<String, String>,

    versions: Arc<VersionCache>,
    pub(crate) resolution: Resolution,
}

impl Project {
    /// Resolve a selection against the registry and create every module's
    /// build file
    pub fn new(selection: &ProjectSelection, versions: Arc<VersionCache>) -> Result<Self> {
        let mut platforms = vec![Platform::Core];
        for id in &selection.platforms {
            let platform =
                Platform::from_id(id).ok_or_else(|| GenerationError::UnknownPlatform(id.clone()))?;
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }

        let template = templates::find(&selection.template)
            .ok_or_else(|| GenerationError::UnknownTemplate(selection.template.clone()))?;

        let mut official_extensions = Vec::new();
        let mut third_party_extensions = Vec::new();
        for id in &selection.extensions {
            let extension = registry::extension(id)
                .ok_or_else(|| GenerationError::UnknownExtension(id.clone()))?;
            let list = if extension.is_official() {
                &mut official_extensions
            } else {
                &mut third_party_extensions
            };
            if !list.iter().any(|e: &&Extension| e.id == extension.id) {
                list.push(extension);
            }
        }
        official_extensions.sort_by_key(|e| e.id);
        third_party_extensions.sort_by_key(|e| e.id);

        let mut languages = BTreeSet::from([JvmLanguage::Java, template.language]);
        for id in &selection.languages {
            let language = JvmLanguage::from_id(id)
                .ok_or_else(|| GenerationError::UnknownLanguage(id.clone()))?;
            languages.insert(language);
        }
        let requested = template
            .extensions
            .iter()
            .copied()
            .chain(selection.extensions.iter().map(String::as_str));
        languages.extend(registry::required_languages(requested)?);

        let gradle_files = platforms
            .iter()
            .map(|p| (*p, GradleFile::new(*p)))
            .collect();

        let mut properties = Properties::new();
        properties.insert("org.gradle.daemon", "true");
        properties.insert(
            "org.gradle.jvmargs",
            "-Xms512M -Xmx1G -Dfile.encoding=UTF-8 -Dconsole.encoding=UTF-8",
        );
        properties.insert("org.gradle.configureondemand", "false");
        properties.insert("gdxVersion", selection.advanced.gdx_version.clone());
        properties.insert("projectVersion", selection.advanced.app_version.clone());

        Ok(Self {
            name: selection.name.clone(),
            root_package: selection.root_package.clone(),
            main_class: selection.main_class.clone(),
            destination: selection.destination.clone(),
            android_sdk: selection.android_sdk.clone(),
            advanced: selection.advanced.clone(),
            platforms,
            languages,
            official_extensions,
            third_party_extensions,
            template,
            properties,
            files: BTreeMap::new(),
            gradle_files,
            root_gradle: RootGradleFile::new(),
            gwt_inherits: BTreeSet::new(),
            android_permissions: BTreeSet::new(),
            reflected_classes: BTreeSet::new(),
            reflected_packages: BTreeSet::new(),
            gradle_tasks: BTreeMap::new(),
            versions,
            resolution: Resolution::default(),
        })
    }

    /// Selected platforms, `core` first, then in selection order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    pub fn languages(&self) -> impl Iterator<Item = JvmLanguage> + '_ {
        self.languages.iter().copied()
    }

    pub fn has_language(&self, language: JvmLanguage) -> bool {
        self.languages.contains(&language)
    }

    pub fn official_extensions(&self) -> &[&'static Extension] {
        &self.official_extensions
    }

    pub fn third_party_extensions(&self) -> &[&'static Extension] {
        &self.third_party_extensions
    }

    pub fn template(&self) -> &'static Template {
        self.template
    }

    pub fn app_name(&self) -> &str {
        &self.name
    }

    /// `root_package` as a directory path
    pub fn package_path(&self) -> String {
        self.root_package.replace('.', "/")
    }

    /// Fails fast for platforms that were not selected
    pub fn gradle_file(&self, platform: Platform) -> Result<&GradleFile> {
        self.gradle_files
            .get(&platform)
            .ok_or_else(|| GenerationError::MissingModule(platform.id().to_string()))
    }

    pub fn gradle_file_mut(&mut self, platform: Platform) -> Result<&mut GradleFile> {
        self.gradle_files
            .get_mut(&platform)
            .ok_or_else(|| GenerationError::MissingModule(platform.id().to_string()))
    }

    pub fn gradle_files(&self) -> impl Iterator<Item = &GradleFile> {
        self.gradle_files.values()
    }

    /// Add a coordinate to a module's build file; a no-op when the platform
    /// is not part of this project
    pub fn add_dependency(&mut self, platform: Platform, coordinate: &str) {
        if let Some(file) = self.gradle_files.get_mut(&platform) {
            file.add_dependency(coordinate);
        }
    }

    /// Add a raw dependency line; a no-op when the platform is absent
    pub fn add_special_dependency(&mut self, platform: Platform, line: impl Into<String>) {
        if let Some(file) = self.gradle_files.get_mut(&platform) {
            file.add_special_dependency(line);
        }
    }

    /// Register a file. A later file at the same path replaces the earlier one.
    pub fn add_file(&mut self, file: ProjectFile) {
        self.files.insert(file.path().to_path_buf(), file);
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&ProjectFile> {
        self.files.get(path.as_ref())
    }

    pub fn files(&self) -> impl Iterator<Item = &ProjectFile> {
        self.files.values()
    }

    pub fn describe_task(&mut self, task: impl Into<String>, description: impl Into<String>) {
        self.gradle_tasks.insert(task.into(), description.into());
    }

    /// Latest known version of an artifact, or `fallback`
    pub fn version_of(&self, artifact: &Artifact, fallback: &str) -> String {
        self.versions.resolve(artifact, fallback)
    }

    pub fn versions(&self) -> &Arc<VersionCache> {
        &self.versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Preset;

    fn selection(platforms: &[&str]) -> ProjectSelection {
        let mut selection = Preset::Default.selection(Path::new("/tmp/liftoff"), None);
        selection.platforms = platforms.iter().map(|s| s.to_string()).collect();
        selection
    }

    fn project(platforms: &[&str]) -> Project {
        Project::new(&selection(platforms), Arc::new(VersionCache::new())).unwrap()
    }

    #[test]
    fn test_core_is_always_first() {
        let project = project(&["lwjgl3", "android"]);
        assert_eq!(
            project.platforms(),
            &[Platform::Core, Platform::Lwjgl3, Platform::Android]
        );
    }

    #[test]
    fn test_every_platform_gets_a_gradle_file() {
        let project = project(&["core", "lwjgl3", "html"]);
        for platform in project.platforms() {
            assert!(project.gradle_file(*platform).is_ok());
        }
        assert!(matches!(
            project.gradle_file(Platform::Android),
            Err(GenerationError::MissingModule(_))
        ));
    }

    #[test]
    fn test_add_dependency_to_absent_platform_is_noop() {
        let mut project = project(&["core", "lwjgl3"]);
        project.add_dependency(Platform::Android, "com.example:lib:1.0");
        project.add_special_dependency(Platform::Android, "natives \"com.example:lib:1.0\"");
        assert!(project.gradle_file(Platform::Android).is_err());
        assert!(project.gradle_files().all(|f| f.dependencies().is_empty()));
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut bad = selection(&["core", "nintendo"]);
        let err = Project::new(&bad, Arc::new(VersionCache::new())).unwrap_err();
        assert!(matches!(err, GenerationError::UnknownPlatform(id) if id == "nintendo"));

        bad = selection(&["core"]);
        bad.extensions = vec!["notAnExtension".to_string()];
        let err = Project::new(&bad, Arc::new(VersionCache::new())).unwrap_err();
        assert!(matches!(err, GenerationError::UnknownExtension(_)));

        bad = selection(&["core"]);
        bad.template = "nope".to_string();
        let err = Project::new(&bad, Arc::new(VersionCache::new())).unwrap_err();
        assert!(matches!(err, GenerationError::UnknownTemplate(_)));
    }

    #[test]
    fn test_extensions_are_split_and_sorted() {
        let mut selection = selection(&["core"]);
        selection.extensions = vec![
            "visUi".to_string(),
            "box2d".to_string(),
            "anim8".to_string(),
            "ai".to_string(),
            "box2d".to_string(),
        ];
        let project = Project::new(&selection, Arc::new(VersionCache::new())).unwrap();

        let official: Vec<_> = project.official_extensions().iter().map(|e| e.id).collect();
        let third_party: Vec<_> = project
            .third_party_extensions()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(official, vec!["ai", "box2d"]);
        assert_eq!(third_party, vec!["anim8", "visUi"]);
    }

    #[test]
    fn test_ktx_extension_pulls_in_kotlin() {
        let mut selection = selection(&["core"]);
        selection.extensions = vec!["ktxVis".to_string()];
        let project = Project::new(&selection, Arc::new(VersionCache::new())).unwrap();
        assert!(project.has_language(JvmLanguage::Java));
        assert!(project.has_language(JvmLanguage::Kotlin));
    }

    #[test]
    fn test_default_properties_are_seeded() {
        let project = project(&["core"]);
        assert_eq!(project.properties.get("gdxVersion"), Some("1.12.1"));
        assert_eq!(project.properties.get("org.gradle.daemon"), Some("true"));
    }

    #[test]
    fn test_later_file_replaces_earlier_at_same_path() {
        let mut project = project(&["core"]);
        project.add_file(ProjectFile::source("README.md", "one"));
        project.add_file(ProjectFile::source("README.md", "two"));
        assert_eq!(project.files().count(), 1);
        assert_eq!(
            project.file("README.md").and_then(ProjectFile::text).as_deref(),
            Some("two")
        );
    }
}
