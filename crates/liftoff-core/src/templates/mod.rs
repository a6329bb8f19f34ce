//! Starter source code for the `core` module

mod java;
mod kotlin;

use crate::error::Result;
use crate::files::ProjectFile;
use crate::project::Project;
use crate::registry::{self, JvmLanguage};

/// A file generated by a template: name relative to the root package
/// directory, and its content
pub type TemplateSource = (String, String);

#[derive(Debug)]
pub struct Template {
    pub id: &'static str,
    pub description: &'static str,
    /// Language of the generated sources
    pub language: JvmLanguage,
    /// Extensions the generated sources rely on
    pub extensions: &'static [&'static str],
    /// Copies the libGDX logo into `assets/`
    pub uses_logo: bool,
    sources: fn(&Project) -> Vec<TemplateSource>,
}

impl Template {
    pub fn sources(&self, project: &Project) -> Vec<TemplateSource> {
        (self.sources)(project)
    }

    /// Write the sources into `core`, then initiate the extensions they need
    pub fn apply(&self, project: &mut Project) -> Result<()> {
        tracing::debug!(template = self.id, "applying template");
        let directory = format!(
            "core/src/main/{}/{}",
            self.language.id(),
            project.package_path()
        );
        for (name, content) in self.sources(project) {
            project.add_file(ProjectFile::source(format!("{directory}/{name}"), content));
        }
        if self.uses_logo {
            project.add_file(ProjectFile::copied("assets/libgdx.png", "libgdx.png"));
        }
        for id in self.extensions {
            registry::initiate_extension(project, id)?;
        }
        Ok(())
    }
}

pub static TEMPLATES: &[Template] = &[
    Template {
        id: "classic",
        description: "A simple ApplicationAdapter drawing the libGDX logo, similar to the official setup tool.",
        language: JvmLanguage::Java,
        extensions: &[],
        uses_logo: true,
        sources: java::classic,
    },
    Template {
        id: "applicationAdapter",
        description: "An empty ApplicationAdapter implementation.",
        language: JvmLanguage::Java,
        extensions: &[],
        uses_logo: false,
        sources: java::application_adapter,
    },
    Template {
        id: "applicationListener",
        description: "An empty ApplicationListener implementation with every method stubbed out.",
        language: JvmLanguage::Java,
        extensions: &[],
        uses_logo: false,
        sources: java::application_listener,
    },
    Template {
        id: "game",
        description: "A Game extension that sets the first Screen.",
        language: JvmLanguage::Java,
        extensions: &[],
        uses_logo: false,
        sources: java::game,
    },
    Template {
        id: "inputProcessor",
        description: "An ApplicationListener that also implements InputProcessor.",
        language: JvmLanguage::Java,
        extensions: &[],
        uses_logo: false,
        sources: java::input_processor,
    },
    Template {
        id: "scene2d",
        description: "Creates a Stage and draws the libGDX logo as an Image actor.",
        language: JvmLanguage::Java,
        extensions: &[],
        uses_logo: true,
        sources: java::scene2d,
    },
    Template {
        id: "kotlinClassic",
        description: "The classic logo-drawing ApplicationAdapter, written in Kotlin.",
        language: JvmLanguage::Kotlin,
        extensions: &[],
        uses_logo: true,
        sources: kotlin::classic,
    },
    Template {
        id: "ktx",
        description: "A KtxGame with a first screen, using KTX assets, graphics and logging.",
        language: JvmLanguage::Kotlin,
        extensions: &["ktxApp", "ktxAssets", "ktxAsync", "ktxGraphics", "ktxLog"],
        uses_logo: true,
        sources: kotlin::ktx,
    },
];

pub fn all() -> &'static [Template] {
    TEMPLATES
}

pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id.eq_ignore_ascii_case(id.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Platform;
    use crate::selection::Preset;
    use crate::versions::VersionCache;
    use std::path::Path;
    use std::sync::Arc;

    fn project(template: &str) -> Project {
        let mut selection = Preset::Default.selection(Path::new("/tmp/liftoff"), None);
        selection.template = template.to_string();
        Project::new(&selection, Arc::new(VersionCache::new())).unwrap()
    }

    #[test]
    fn test_template_ids_resolve() {
        for template in all() {
            assert_eq!(find(template.id).map(|t| t.id), Some(template.id));
        }
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_every_template_applies() {
        for template in all() {
            let mut project = project(template.id);
            template.apply(&mut project).unwrap();
            assert!(project.files().count() > 0, "{} wrote nothing", template.id);
        }
    }

    #[test]
    fn test_classic_writes_main_class() {
        let mut project = project("classic");
        project.template().apply(&mut project).unwrap();

        let main = project
            .file("core/src/main/java/io/github/liftoff/sample/Main.java")
            .and_then(ProjectFile::text)
            .unwrap();
        assert!(main.starts_with("package io.github.liftoff.sample;"));
        assert!(main.contains("public class Main extends ApplicationAdapter"));
        assert!(project.file("assets/libgdx.png").is_some());
    }

    #[test]
    fn test_ktx_template_pulls_in_its_extensions() {
        let mut project = project("ktx");
        assert!(project.has_language(JvmLanguage::Kotlin));
        project.template().apply(&mut project).unwrap();

        let core = project.gradle_file(Platform::Core).unwrap();
        assert!(core
            .dependencies()
            .contains("\"io.github.libktx:ktx-app:$ktxVersion\""));
        assert!(core
            .dependencies()
            .contains("\"org.jetbrains.kotlinx:kotlinx-coroutines-core:$kotlinxCoroutinesVersion\""));
        assert!(project
            .file("core/src/main/kotlin/io/github/liftoff/sample/Main.kt")
            .is_some());
    }
}
