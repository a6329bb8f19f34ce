//! Declarative description of an optional library

use super::{JvmLanguage, Platform};
use crate::error::Result;
use crate::project::Project;
use crate::versions::Artifact;

/// Android ABIs that get their own `natives` line
const ANDROID_ABIS: &[&str] = &["armeabi-v7a", "arm64-v8a", "x86", "x86_64"];

/// Desktop-style platforms that load `natives-desktop` jars
const DESKTOP_NATIVES: &[Platform] = &[Platform::Lwjgl3, Platform::Headless];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    /// Maintained by the libGDX team
    Official,
    ThirdParty,
}

/// How an extension's version is resolved and exposed to Gradle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Versioning {
    pub artifact: Artifact,
    /// `gradle.properties` key, referenced as `$property` in coordinates
    pub property: &'static str,
    /// Used when the package index is unreachable
    pub fallback: &'static str,
}

/// A single dependency an extension contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// `group:name`, completed with the extension's version property
    Library(Platform, &'static str),
    /// `group:name` with the `sources` classifier, for GWT compilation
    Sources(Platform, &'static str),
    /// A fully specified coordinate
    Raw(Platform, &'static str),
    /// A complete dependency line
    Special(Platform, &'static str),
    /// Platform natives of a libGDX artifact, e.g. `gdx-box2d-platform`
    Natives(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Extension {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub kind: ExtensionKind,
    /// None for extensions released together with libGDX itself
    pub version: Option<Versioning>,
    /// Ids of extensions that must be initiated first
    pub requires: &'static [&'static str],
    pub language: Option<JvmLanguage>,
    pub dependencies: &'static [Dependency],
    pub gwt_inherits: &'static [&'static str],
    pub android_permissions: &'static [&'static str],
    /// Packages TeaVM must keep reflection metadata for
    pub reflected_packages: &'static [&'static str],
    /// Classes the web backends must keep reflection metadata for
    pub reflected_classes: &'static [&'static str],
}

impl Extension {
    pub const fn official(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        url: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            url,
            kind: ExtensionKind::Official,
            version: None,
            requires: &[],
            language: None,
            dependencies: &[],
            gwt_inherits: &[],
            android_permissions: &[],
            reflected_packages: &[],
            reflected_classes: &[],
        }
    }

    pub const fn third_party(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        url: &'static str,
    ) -> Self {
        Self {
            kind: ExtensionKind::ThirdParty,
            ..Self::official(id, name, description, url)
        }
    }

    pub const fn versioned(
        self,
        artifact: Artifact,
        property: &'static str,
        fallback: &'static str,
    ) -> Self {
        Self {
            version: Some(Versioning {
                artifact,
                property,
                fallback,
            }),
            ..self
        }
    }

    pub const fn requires(self, requires: &'static [&'static str]) -> Self {
        Self { requires, ..self }
    }

    pub const fn language(self, language: JvmLanguage) -> Self {
        Self {
            language: Some(language),
            ..self
        }
    }

    pub const fn dependencies(self, dependencies: &'static [Dependency]) -> Self {
        Self {
            dependencies,
            ..self
        }
    }

    pub const fn gwt(self, gwt_inherits: &'static [&'static str]) -> Self {
        Self {
            gwt_inherits,
            ..self
        }
    }

    pub const fn permissions(self, android_permissions: &'static [&'static str]) -> Self {
        Self {
            android_permissions,
            ..self
        }
    }

    pub const fn reflected(self, reflected_packages: &'static [&'static str]) -> Self {
        Self {
            reflected_packages,
            ..self
        }
    }

    pub const fn reflected_classes(self, reflected_classes: &'static [&'static str]) -> Self {
        Self {
            reflected_classes,
            ..self
        }
    }

    pub fn is_official(&self) -> bool {
        self.kind == ExtensionKind::Official
    }

    /// Gradle reference to this extension's version
    pub fn version_reference(&self) -> String {
        match &self.version {
            Some(v) => format!("${}", v.property),
            None => "$gdxVersion".to_string(),
        }
    }

    fn versioned_coordinate(&self, coordinate: &str) -> String {
        format!("{coordinate}:{}", self.version_reference())
    }

    /// Apply this extension's own effects. Required extensions are not
    /// touched here; `registry::initiate_extension` handles those.
    pub fn initiate(&self, project: &mut Project) -> Result<()> {
        if let Some(v) = &self.version {
            let version = project.version_of(&v.artifact, v.fallback);
            project.properties.insert(v.property, version);
        }

        for dependency in self.dependencies {
            self.add_dependency(project, *dependency);
        }

        if project.has_platform(Platform::Html) {
            project
                .gwt_inherits
                .extend(self.gwt_inherits.iter().map(|s| s.to_string()));
        }
        if project.has_platform(Platform::Android) {
            project
                .android_permissions
                .extend(self.android_permissions.iter().map(|s| s.to_string()));
        }
        if project.has_platform(Platform::TeaVM) {
            project
                .reflected_packages
                .extend(self.reflected_packages.iter().map(|s| s.to_string()));
        }
        if project.has_platform(Platform::Html) || project.has_platform(Platform::TeaVM) {
            project
                .reflected_classes
                .extend(self.reflected_classes.iter().map(|s| s.to_string()));
        }
        Ok(())
    }

    fn add_dependency(&self, project: &mut Project, dependency: Dependency) {
        match dependency {
            Dependency::Library(platform, coordinate) => {
                project.add_dependency(platform, &self.versioned_coordinate(coordinate));
            }
            Dependency::Sources(platform, coordinate) => {
                let versioned = self.versioned_coordinate(coordinate);
                project.add_dependency(platform, &format!("{versioned}:sources"));
            }
            Dependency::Raw(platform, coordinate) => project.add_dependency(platform, coordinate),
            Dependency::Special(platform, line) => project.add_special_dependency(platform, line),
            Dependency::Natives(artifact) => {
                let coordinate = format!("com.badlogicgames.gdx:{artifact}:$gdxVersion");
                for platform in DESKTOP_NATIVES {
                    project.add_dependency(*platform, &format!("{coordinate}:natives-desktop"));
                }
                for abi in ANDROID_ABIS {
                    project.add_special_dependency(
                        Platform::Android,
                        format!("natives \"{coordinate}:natives-{abi}\""),
                    );
                }
                project.add_dependency(Platform::Ios, &format!("{coordinate}:natives-ios"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Preset;
    use crate::versions::VersionCache;
    use std::path::Path;
    use std::sync::Arc;

    static SAMPLE: Extension = Extension::third_party(
        "sample",
        "Sample",
        "A library used in tests.",
        "https://example.com",
    )
    .versioned(
        Artifact::maven("com.example", "sample"),
        "sampleVersion",
        "1.0.0",
    )
    .dependencies(&[
        Dependency::Library(Platform::Core, "com.example:sample"),
        Dependency::Sources(Platform::Html, "com.example:sample"),
        Dependency::Natives("gdx-sample-platform"),
    ])
    .gwt(&["com.example.Sample"])
    .permissions(&["android.permission.INTERNET"])
    .reflected_classes(&["com.example.sample.Component"]);

    fn project(platforms: &[&str]) -> Project {
        let mut selection = Preset::Default.selection(Path::new("/tmp/liftoff"), None);
        selection.platforms = platforms.iter().map(|s| s.to_string()).collect();
        Project::new(&selection, Arc::new(VersionCache::new())).unwrap()
    }

    #[test]
    fn test_library_dependency_uses_version_property() {
        let mut project = project(&["core"]);
        SAMPLE.initiate(&mut project).unwrap();

        let core = project.gradle_file(Platform::Core).unwrap();
        assert!(core
            .dependencies()
            .contains("\"com.example:sample:$sampleVersion\""));
        assert_eq!(project.properties.get("sampleVersion"), Some("1.0.0"));
    }

    #[test]
    fn test_cached_version_wins_over_fallback() {
        let mut project = project(&["core"]);
        project
            .versions()
            .insert(&Artifact::maven("com.example", "sample"), "2.0.0");
        SAMPLE.initiate(&mut project).unwrap();
        assert_eq!(project.properties.get("sampleVersion"), Some("2.0.0"));
    }

    #[test]
    fn test_platform_specific_effects_need_the_platform() {
        let mut project = project(&["core", "lwjgl3"]);
        SAMPLE.initiate(&mut project).unwrap();
        assert!(project.gwt_inherits.is_empty());
        assert!(project.android_permissions.is_empty());
        assert!(project.reflected_classes.is_empty());

        let mut project = self::project(&["core", "html", "android"]);
        SAMPLE.initiate(&mut project).unwrap();
        assert!(project.gwt_inherits.contains("com.example.Sample"));
        assert!(project
            .reflected_classes
            .contains("com.example.sample.Component"));
        assert!(project
            .android_permissions
            .contains("android.permission.INTERNET"));
        let html = project.gradle_file(Platform::Html).unwrap();
        assert!(html
            .dependencies()
            .contains("\"com.example:sample:$sampleVersion:sources\""));
    }

    #[test]
    fn test_natives_cover_each_platform() {
        let mut project = project(&["core", "lwjgl3", "android", "ios"]);
        SAMPLE.initiate(&mut project).unwrap();

        let desktop = project.gradle_file(Platform::Lwjgl3).unwrap();
        assert!(desktop.dependencies().contains(
            "\"com.badlogicgames.gdx:gdx-sample-platform:$gdxVersion:natives-desktop\""
        ));
        let android = project.gradle_file(Platform::Android).unwrap();
        assert_eq!(android.special_dependencies().len(), ANDROID_ABIS.len());
        let ios = project.gradle_file(Platform::Ios).unwrap();
        assert!(ios
            .dependencies()
            .contains("\"com.badlogicgames.gdx:gdx-sample-platform:$gdxVersion:natives-ios\""));
    }

    #[test]
    fn test_server_never_gets_desktop_natives() {
        let mut project = project(&["core", "lwjgl3", "headless", "server"]);
        SAMPLE.initiate(&mut project).unwrap();

        let natives = "\"com.badlogicgames.gdx:gdx-sample-platform:$gdxVersion:natives-desktop\"";
        assert!(project.gradle_file(Platform::Headless).unwrap().dependencies().contains(natives));
        assert!(project.gradle_file(Platform::Server).unwrap().dependencies().is_empty());
    }

    #[test]
    fn test_initiate_twice_matches_once() {
        let mut once = project(&["core", "lwjgl3", "android", "html"]);
        SAMPLE.initiate(&mut once).unwrap();

        let mut twice = project(&["core", "lwjgl3", "android", "html"]);
        SAMPLE.initiate(&mut twice).unwrap();
        SAMPLE.initiate(&mut twice).unwrap();

        for platform in once.platforms() {
            assert_eq!(
                once.gradle_file(*platform).unwrap(),
                twice.gradle_file(*platform).unwrap()
            );
        }
        assert_eq!(once.properties, twice.properties);
        assert_eq!(once.gwt_inherits, twice.gwt_inherits);
    }
}
