//! JVM languages a project can be written in

use super::Platform;
use crate::error::Result;
use crate::files::ProjectFile;
use crate::project::Project;
use std::fmt;

const KOTLIN_VERSION: &str = "1.9.22";
const GROOVY_VERSION: &str = "4.0.15";
const SCALA_VERSION: &str = "2.13.12";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JvmLanguage {
    Java,
    Kotlin,
    Groovy,
    Scala,
}

impl JvmLanguage {
    pub const ALL: [JvmLanguage; 4] = [
        JvmLanguage::Java,
        JvmLanguage::Kotlin,
        JvmLanguage::Groovy,
        JvmLanguage::Scala,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            JvmLanguage::Java => "java",
            JvmLanguage::Kotlin => "kotlin",
            JvmLanguage::Groovy => "groovy",
            JvmLanguage::Scala => "scala",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.id().eq_ignore_ascii_case(id.trim()))
    }

    /// `gradle.properties` key and default for the language's runtime
    fn version(&self) -> Option<(&'static str, &'static str)> {
        match self {
            JvmLanguage::Java => None,
            JvmLanguage::Kotlin => Some(("kotlinVersion", KOTLIN_VERSION)),
            JvmLanguage::Groovy => Some(("groovyVersion", GROOVY_VERSION)),
            JvmLanguage::Scala => Some(("scalaVersion", SCALA_VERSION)),
        }
    }

    /// Gradle plugin applied to a module, if the module can host this language
    fn plugin(&self, platform: Platform) -> Option<&'static str> {
        match (self, platform) {
            (JvmLanguage::Java, _) => None,
            // GWT only compiles Java sources
            (_, Platform::Html) => None,
            (JvmLanguage::Kotlin, Platform::Android) => Some("kotlin-android"),
            (JvmLanguage::Kotlin, _) => Some("kotlin"),
            (JvmLanguage::Groovy, Platform::Android) => None,
            (JvmLanguage::Groovy, _) => Some("groovy"),
            (JvmLanguage::Scala, Platform::Android) => None,
            (JvmLanguage::Scala, _) => Some("scala"),
        }
    }

    fn runtime_library(&self) -> Option<&'static str> {
        match self {
            JvmLanguage::Java => None,
            JvmLanguage::Kotlin => Some("org.jetbrains.kotlin:kotlin-stdlib:$kotlinVersion"),
            JvmLanguage::Groovy => Some("org.apache.groovy:groovy:$groovyVersion"),
            JvmLanguage::Scala => Some("org.scala-lang:scala-library:$scalaVersion"),
        }
    }

    /// Register source directories, plugins and the runtime library
    pub fn initiate(&self, project: &mut Project) -> Result<()> {
        tracing::debug!(language = self.id(), "initiating language");
        if let Some((property, version)) = self.version() {
            project.properties.insert(property, version);
        }
        if *self == JvmLanguage::Kotlin {
            project
                .root_gradle
                .add_buildscript_dependency("org.jetbrains.kotlin:kotlin-gradle-plugin:$kotlinVersion");
        }
        if let Some(library) = self.runtime_library() {
            project.add_dependency(Platform::Core, library);
        }

        for platform in project.platforms().to_vec() {
            if let Some(plugin) = self.plugin(platform) {
                project.gradle_file_mut(platform)?.add_plugin(plugin);
            }
            if *self == JvmLanguage::Java || self.plugin(platform).is_some() {
                project.add_file(ProjectFile::directory(format!(
                    "{}/src/main/{}",
                    platform.id(),
                    self.id()
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for JvmLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Preset;
    use crate::versions::VersionCache;
    use std::path::Path;
    use std::sync::Arc;

    fn project(platforms: &[&str]) -> Project {
        let mut selection = Preset::Default.selection(Path::new("/tmp/liftoff"), None);
        selection.platforms = platforms.iter().map(|s| s.to_string()).collect();
        Project::new(&selection, Arc::new(VersionCache::new())).unwrap()
    }

    #[test]
    fn test_from_id_is_case_insensitive() {
        assert_eq!(JvmLanguage::from_id("Kotlin"), Some(JvmLanguage::Kotlin));
        assert_eq!(JvmLanguage::from_id("clojure"), None);
    }

    #[test]
    fn test_kotlin_plugins_per_module() {
        let mut project = project(&["core", "android", "html"]);
        JvmLanguage::Kotlin.initiate(&mut project).unwrap();

        let core = project.gradle_file(Platform::Core).unwrap();
        assert!(core.plugins().contains("kotlin"));
        assert!(core
            .dependencies()
            .contains("\"org.jetbrains.kotlin:kotlin-stdlib:$kotlinVersion\""));
        let android = project.gradle_file(Platform::Android).unwrap();
        assert!(android.plugins().contains("kotlin-android"));
        assert!(project.gradle_file(Platform::Html).unwrap().plugins().is_empty());
        assert_eq!(project.properties.get("kotlinVersion"), Some(KOTLIN_VERSION));
        assert!(project.file("core/src/main/kotlin").is_some());
        assert!(project.file("html/src/main/kotlin").is_none());
    }

    #[test]
    fn test_java_only_adds_directories() {
        let mut project = project(&["core", "lwjgl3"]);
        JvmLanguage::Java.initiate(&mut project).unwrap();
        assert!(project.file("core/src/main/java").is_some());
        assert!(project.file("lwjgl3/src/main/java").is_some());
        assert!(project.gradle_files().all(|f| f.plugins().is_empty()));
        assert!(project.root_gradle.buildscript_dependencies().is_empty());
    }

    #[test]
    fn test_groovy_and_scala_skip_android_and_html() {
        for language in [JvmLanguage::Groovy, JvmLanguage::Scala] {
            let mut project = project(&["core", "lwjgl3", "android", "html"]);
            language.initiate(&mut project).unwrap();

            let lwjgl3 = project.gradle_file(Platform::Lwjgl3).unwrap();
            assert!(lwjgl3.plugins().contains(language.id()));
            assert!(project.gradle_file(Platform::Android).unwrap().plugins().is_empty());
            assert!(project.gradle_file(Platform::Html).unwrap().plugins().is_empty());
            assert!(project
                .file(format!("core/src/main/{}", language.id()))
                .is_some());
            assert!(project
                .file(format!("android/src/main/{}", language.id()))
                .is_none());
            assert!(project.root_gradle.buildscript_dependencies().is_empty());
        }
    }

    #[test]
    fn test_every_language_on_every_platform_is_idempotent() {
        let all: Vec<&str> = Platform::ALL.iter().map(|p| p.id()).collect();
        for language in JvmLanguage::ALL {
            let mut once = project(&all);
            language.initiate(&mut once).unwrap();

            let mut twice = project(&all);
            language.initiate(&mut twice).unwrap();
            language.initiate(&mut twice).unwrap();

            for platform in Platform::ALL {
                assert_eq!(
                    once.gradle_file(platform).unwrap(),
                    twice.gradle_file(platform).unwrap(),
                    "{language} on {platform}"
                );
            }
            assert_eq!(once.properties, twice.properties, "{language}");
            assert_eq!(once.root_gradle, twice.root_gradle, "{language}");
            assert_eq!(
                once.files().collect::<Vec<_>>(),
                twice.files().collect::<Vec<_>>(),
                "{language}"
            );

            for platform in Platform::ALL {
                platform.initiate(&mut twice).unwrap();
            }
        }
    }
}
