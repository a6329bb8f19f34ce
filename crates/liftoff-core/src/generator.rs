//! The generation pipeline
//!
//! Steps run strictly in order against one `Project`:
//! base files, template, languages, extensions, platforms, skin,
//! README / editor config, properties and settings, then saving.
//! There is no rollback; an I/O failure leaves a partial tree behind.

use crate::error::Result;
use crate::files::{collect_resources, ProjectFile};
use crate::project::Project;
use crate::registry::{self, JvmLanguage, Platform};
use crate::versions::Artifact;
use std::collections::HashSet;
use std::path::Path;

const GRADLE_VERSION: &str = "8.5";

const GITIGNORE: &str = "\
## Gradle:
.gradle/
gradle-app.setting
/build/
/android/build/
/core/build/
/lwjgl3/build/
/html/build/
/teavm/build/
/ios/build/
/headless/build/
/server/build/
/shared/build/

## Java:
*.class
*.war
*.ear
hs_err_pid*
.attach_pid*

## Android:
/android/libs/armeabi-v7a/
/android/libs/arm64-v8a/
/android/libs/x86/
/android/libs/x86_64/
/android/gen/
/android/out/
local.properties
com_crashlytics_export_strings.xml

## Robovm:
/ios/robovm-build/

## GWT:
/html/war/
/html/gwt-unitCache/
.apt_generated/
/html/WEB-INF/deploy/
/html/WEB-INF/classes/
.gwt/
gwt-unitCache/
www-test/
.gwt-tmp/

## IntelliJ, Android Studio:
.idea/
*.ipr
*.iws
*.iml

## Eclipse:
.classpath
.project
.metadata/
/android/bin/
/core/bin/
/lwjgl3/bin/
/html/bin/
/ios/bin/
*.tmp
*.bak
*.swp
*~.nib
.settings/
.loadpath
.externalToolBuilders/
*.launch

## NetBeans:
/nbproject/private/
/build/
/dist/
/nbbuild/
/nbdist/
/nbactions.xml

## OS-specific:
.DS_Store
Thumbs.db

## Assets list, regenerated on every build
assets/assets.txt
";

const GITATTRIBUTES: &str = "\
* text=auto eol=lf
*.bat text=auto eol=crlf
*.png binary
*.jpg binary
*.jar binary
";

const EDITORCONFIG: &str = "\
root = true

[*]
indent_style = space
indent_size = 2
end_of_line = lf
charset = utf-8
trim_trailing_whitespace = true
insert_final_newline = true

[*.{java,scala,groovy,kt,kts}]
indent_size = 4

[*.md]
trim_trailing_whitespace = false
";

/// Tasks every generated project supports, whatever its platforms
const COMMON_TASKS: &[(&str, &str)] = &[
    ("--continue", "when using this flag, errors will not stop the tasks from running."),
    ("--daemon", "thanks to this flag, Gradle daemon will be used to run chosen tasks."),
    ("--offline", "when using this flag, cached dependency archives will be used."),
    ("--refresh-dependencies", "this flag forces validation of all dependencies. Useful for snapshot versions."),
    ("build", "builds sources and archives of every project."),
    ("cleanEclipse", "removes Eclipse project data."),
    ("cleanIdea", "removes IntelliJ project data."),
    ("clean", "removes `build` folders, which store compiled classes and built archives."),
    ("eclipse", "generates Eclipse project data."),
    ("idea", "generates IntelliJ project data."),
    ("test", "runs unit tests (if any)."),
];

/// Artifacts whose latest version is worth looking up for this project:
/// the versioned extensions it selects or pulls in, including those its
/// template needs
pub fn versioned_artifacts(project: &Project) -> Vec<Artifact> {
    let mut pending: Vec<&str> = project
        .template()
        .extensions
        .iter()
        .copied()
        .chain(project.official_extensions().iter().map(|e| e.id))
        .chain(project.third_party_extensions().iter().map(|e| e.id))
        .collect();
    let mut seen = HashSet::new();
    let mut artifacts = Vec::new();

    while let Some(id) = pending.pop() {
        if !seen.insert(id) {
            continue;
        }
        let Some(extension) = registry::extension(id) else {
            continue;
        };
        if let Some(versioning) = &extension.version {
            if !artifacts.contains(&versioning.artifact) {
                artifacts.push(versioning.artifact);
            }
        }
        pending.extend(extension.requires.iter().copied());
    }
    artifacts
}

/// Run every generation step and write the result under
/// `project.destination`. Status lines go to `log`.
pub fn generate(project: &mut Project, resources: &Path, log: &mut dyn FnMut(&str)) -> Result<()> {
    tracing::info!(
        name = %project.name,
        destination = %project.destination.display(),
        "generating project"
    );
    log(&format!("Generating {}...", project.name));

    add_base_files(project);

    let template = project.template();
    log(&format!("Applying template {}", template.id));
    template.apply(project)?;

    for language in project.languages().collect::<Vec<_>>() {
        language.initiate(project)?;
    }

    let extensions: Vec<&str> = project
        .official_extensions()
        .iter()
        .chain(project.third_party_extensions())
        .map(|e| e.id)
        .collect();
    for id in extensions {
        registry::initiate_extension(project, id)?;
    }

    for platform in project.platforms().to_vec() {
        platform.initiate(project)?;
    }

    if project.advanced.generate_skin {
        log("Copying the default skin");
        add_skin(project, resources)?;
    }
    if project.advanced.generate_readme {
        let readme = readme(project);
        project.add_file(ProjectFile::source("README.md", readme));
    }
    if project.advanced.generate_editorconfig {
        project.add_file(ProjectFile::source(".editorconfig", EDITORCONFIG));
    }

    project.add_file(ProjectFile::properties(
        "gradle.properties",
        project.properties.clone(),
    ));
    let modules = project.platforms().iter().map(|p| p.id().to_string()).collect();
    project.add_file(ProjectFile::settings(modules));

    let written = save(project, resources)?;
    log(&format!(
        "Project generated in {} ({written} files)",
        project.destination.display()
    ));
    Ok(())
}

fn add_base_files(project: &mut Project) {
    project.add_file(ProjectFile::directory("assets"));
    project.add_file(ProjectFile::source(".gitignore", GITIGNORE));
    project.add_file(ProjectFile::source(".gitattributes", GITATTRIBUTES));
    project.add_file(ProjectFile::source(
        "gradle/wrapper/gradle-wrapper.properties",
        format!(
            "distributionBase=GRADLE_USER_HOME\n\
             distributionPath=wrapper/dists\n\
             distributionUrl=https\\://services.gradle.org/distributions/gradle-{GRADLE_VERSION}-bin.zip\n\
             networkTimeout=10000\n\
             validateDistributionUrl=true\n\
             zipStoreBase=GRADLE_USER_HOME\n\
             zipStorePath=wrapper/dists\n"
        ),
    ));
}

/// Skin files land in `assets/ui/`
fn add_skin(project: &mut Project, resources: &Path) -> Result<()> {
    for resource in collect_resources(resources, "skin")? {
        let target = match resource.strip_prefix("skin") {
            Ok(relative) => Path::new("assets/ui").join(relative),
            Err(_) => continue,
        };
        project.add_file(ProjectFile::copied(target, resource));
    }
    Ok(())
}

fn readme(project: &mut Project) -> String {
    for (task, description) in COMMON_TASKS {
        project.describe_task(*task, *description);
    }

    let mut out = format!(
        "# {}\n\nA [libGDX](https://libgdx.com/) project generated with \
         [gdx-liftoff](https://github.com/libGDX/gdx-liftoff).\n\n",
        project.name
    );
    out.push_str(&format!("{}\n\n", project.template().description));

    out.push_str("## Platforms\n\n");
    for platform in project.platforms() {
        out.push_str(&format!("- `{}`: {}\n", platform.id(), platform.description()));
    }

    out.push_str(
        "\n## Gradle\n\n\
         This project uses [Gradle](https://gradle.org/) to manage dependencies.\n\
         The Gradle wrapper was included, so you can run Gradle tasks using `gradlew.bat` or `./gradlew` commands.\n\
         Useful Gradle tasks and flags:\n\n",
    );
    for (task, description) in &project.gradle_tasks {
        out.push_str(&format!("- `{task}`: {description}\n"));
    }
    out.push_str(
        "\nNote that most tasks that are not specific to a single project can be run with `name:` prefix, \
         where the `name` should be replaced with the ID of a specific project.\n\
         For example, `core:clean` removes `build` folder only from the `core` project.\n",
    );
    if project.has_platform(Platform::Html) && project.languages().any(|l| l != JvmLanguage::Java) {
        out.push_str("\nThe `html` platform only compiles Java sources; code in other JVM languages is skipped there.\n");
    }
    out
}

/// Write every registered file, the root build script and each module's
/// build script. Returns how many were written.
pub fn save(project: &Project, resources: &Path) -> Result<usize> {
    let destination = &project.destination;
    let mut written = 0;

    for file in project.files() {
        tracing::debug!(path = %file.path().display(), "writing file");
        file.save(destination, resources)?;
        written += 1;
    }

    ProjectFile::source("build.gradle", project.root_gradle.content(project))
        .save(destination, resources)?;
    written += 1;

    for gradle in project.gradle_files() {
        ProjectFile::source(gradle.path(), gradle.content(project)).save(destination, resources)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Preset;
    use crate::versions::VersionCache;
    use std::sync::Arc;

    fn project(preset: Preset) -> Project {
        let selection = preset.selection(Path::new("/tmp/liftoff"), None);
        Project::new(&selection, Arc::new(VersionCache::new())).unwrap()
    }

    #[test]
    fn test_versioned_artifacts_follow_requirements() {
        let project = project(Preset::AndroidDev);
        let artifacts = versioned_artifacts(&project);
        let keys: Vec<String> = artifacts.iter().map(Artifact::key).collect();

        assert!(keys.contains(&"com.badlogicgames.box2dlights:box2dlights".to_string()));
        assert!(keys.contains(&"com.badlogicgames.gdx-controllers:gdx-controllers-core".to_string()));
        // box2d and freetype follow gdxVersion
        assert_eq!(artifacts.len(), 2);
    }

    #[test]
    fn test_ktx_family_is_looked_up_once() {
        let project = project(Preset::Ktx);
        let artifacts = versioned_artifacts(&project);
        let ktx = artifacts.iter().filter(|a| a.group == "io.github.libktx").count();
        assert_eq!(ktx, 1);
    }

    #[test]
    fn test_readme_lists_platforms_and_sorted_tasks() {
        let mut project = project(Preset::Default);
        project.describe_task("lwjgl3:run", "starts the application.");
        let readme = readme(&mut project);

        assert!(readme.starts_with("# Liftoff Sample\n"));
        assert!(readme.contains(&format!("- `android`: {}", Platform::Android.description())));
        let build = readme.find("- `build`:").unwrap();
        let lwjgl3 = readme.find("- `lwjgl3:run`:").unwrap();
        assert!(build < lwjgl3);
    }
}
