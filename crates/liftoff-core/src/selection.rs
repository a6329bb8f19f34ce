//! User selections and the named sample presets

use crate::error::{GenerationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_GDX_VERSION: &str = "1.12.1";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_JAVA_VERSION: u8 = 8;
pub const DEFAULT_TEMPLATE: &str = "classic";

/// Everything the user picked, before it is resolved against the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSelection {
    /// Application name, used for window titles and artifact names
    pub name: String,

    /// Package of the generated sources
    pub root_package: String,

    /// Simple name of the main application class
    pub main_class: String,

    /// Directory the project is written into
    pub destination: PathBuf,

    /// SDK path for `local.properties`; Android projects need one to build
    #[serde(default)]
    pub android_sdk: Option<PathBuf>,

    /// Module ids, in the order they appear in `settings.gradle`
    pub platforms: Vec<String>,

    /// Extra JVM languages; Java is always included
    #[serde(default)]
    pub languages: Vec<String>,

    /// Official and third-party extension ids
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default)]
    pub advanced: AdvancedOptions,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// Options most users never touch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedOptions {
    pub gdx_version: String,
    pub java_version: u8,
    pub app_version: String,

    /// Copy the default uiskin into `assets/`
    pub generate_skin: bool,

    pub generate_readme: bool,
    pub generate_editorconfig: bool,

    /// Gradle tasks to run once the files are written
    pub gradle_tasks: Vec<String>,
}

impl Default for AdvancedOptions {
    fn default() -> Self {
        Self {
            gdx_version: DEFAULT_GDX_VERSION.to_string(),
            java_version: DEFAULT_JAVA_VERSION,
            app_version: DEFAULT_APP_VERSION.to_string(),
            generate_skin: false,
            generate_readme: true,
            generate_editorconfig: false,
            gradle_tasks: Vec::new(),
        }
    }
}

impl ProjectSelection {
    /// Load a selection from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GenerationError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| GenerationError::InvalidSelection {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Named selections used by the headless entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Default,
    Kotlin,
    Ktx,
    KtxWeb,
    AndroidDev,
    GwtDev,
    TeaDev,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Default,
        Preset::Kotlin,
        Preset::Ktx,
        Preset::KtxWeb,
        Preset::AndroidDev,
        Preset::GwtDev,
        Preset::TeaDev,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "DEFAULT",
            Preset::Kotlin => "KOTLIN",
            Preset::Ktx => "KTX",
            Preset::KtxWeb => "KTX_WEB",
            Preset::AndroidDev => "ANDROID_DEV",
            Preset::GwtDev => "GWT_DEV",
            Preset::TeaDev => "TEA_DEV",
        }
    }

    /// Case-insensitive lookup; anything unrecognized is `DEFAULT`
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Preset::Default)
    }

    /// Build the selection, writing into `<output_root>/<preset name>`
    pub fn selection(&self, output_root: &Path, android_sdk: Option<PathBuf>) -> ProjectSelection {
        let (platforms, languages, extensions, template): (&[&str], &[&str], &[&str], &str) =
            match self {
                Preset::Default => (
                    &["core", "lwjgl3", "android", "ios", "html"],
                    &[],
                    &[],
                    "classic",
                ),
                Preset::Kotlin => (
                    &["core", "lwjgl3", "android"],
                    &["kotlin"],
                    &[],
                    "kotlinClassic",
                ),
                Preset::Ktx => (
                    &["core", "lwjgl3", "android", "ios"],
                    &["kotlin"],
                    &["ktxActors", "ktxScene2d", "ktxVis", "ktxFreetype"],
                    "ktx",
                ),
                Preset::KtxWeb => (
                    &["core", "lwjgl3", "teavm"],
                    &["kotlin"],
                    &["ktxActors", "ktxCollections", "ktxMath"],
                    "ktx",
                ),
                Preset::AndroidDev => (
                    &["core", "lwjgl3", "android"],
                    &[],
                    &["controllers", "freetype", "box2dlights"],
                    "game",
                ),
                Preset::GwtDev => (
                    &["core", "lwjgl3", "html"],
                    &[],
                    &["ai", "box2dlights", "shapeDrawer", "textraTypist", "visUi"],
                    "scene2d",
                ),
                Preset::TeaDev => (
                    &["core", "lwjgl3", "teavm"],
                    &[],
                    &["box2d", "anim8", "digital"],
                    "applicationAdapter",
                ),
            };

        let to_owned = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let generate_skin = matches!(self, Preset::Ktx | Preset::GwtDev);

        ProjectSelection {
            name: "Liftoff Sample".to_string(),
            root_package: "io.github.liftoff.sample".to_string(),
            main_class: "Main".to_string(),
            destination: output_root.join(self.name().to_ascii_lowercase()),
            android_sdk,
            platforms: to_owned(platforms),
            languages: to_owned(languages),
            extensions: to_owned(extensions),
            template: template.to_string(),
            advanced: AdvancedOptions {
                generate_skin,
                generate_editorconfig: true,
                ..AdvancedOptions::default()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Preset::from_name("ktx_web"), Preset::KtxWeb);
        assert_eq!(Preset::from_name("GWT_DEV"), Preset::GwtDev);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_default() {
        assert_eq!(Preset::from_name("NOPE"), Preset::Default);
        assert_eq!(Preset::from_name(""), Preset::Default);
    }

    #[test]
    fn test_preset_destination_uses_lowercase_name() {
        let selection = Preset::AndroidDev.selection(Path::new("/tmp/out"), None);
        assert_eq!(selection.destination, PathBuf::from("/tmp/out/android_dev"));
        assert_eq!(selection.platforms[0], "core");
    }

    #[test]
    fn test_yaml_defaults_fill_missing_fields() {
        let yaml = r#"
name: Demo
root_package: com.example.demo
main_class: DemoGame
destination: /tmp/demo
platforms: [core, lwjgl3]
"#;
        let selection: ProjectSelection = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(selection.template, DEFAULT_TEMPLATE);
        assert!(selection.extensions.is_empty());
        assert_eq!(selection.advanced.gdx_version, DEFAULT_GDX_VERSION);
        assert!(selection.advanced.generate_readme);
    }

    #[test]
    fn test_yaml_partial_advanced_options() {
        let yaml = r#"
name: Demo
root_package: com.example.demo
main_class: DemoGame
destination: /tmp/demo
platforms: [core]
advanced:
  java_version: 17
  generate_skin: true
"#;
        let selection: ProjectSelection = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(selection.advanced.java_version, 17);
        assert!(selection.advanced.generate_skin);
        assert_eq!(selection.advanced.app_version, DEFAULT_APP_VERSION);
    }
}
