//! Buildable modules of the generated project

use super::launchers;
use crate::error::Result;
use crate::files::{Properties, ProjectFile};
use crate::project::Project;
use std::fmt;

const ANDROID_GRADLE_PLUGIN: &str = "com.android.tools.build:gradle:8.1.4";
const ANDROID_DESUGARING: &str =
    "coreLibraryDesugaring \"com.android.tools:desugar_jdk_libs:2.0.4\"";
const GWT_FRAMEWORK_VERSION: &str = "2.10.0";
const GWT_PLUGIN_VERSION: &str = "1.1.29";
const ROBOVM_VERSION: &str = "2.3.21";
const TEAVM_BACKEND_VERSION: &str = "1.0.0";

/// A module in the output tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    Core,
    Lwjgl3,
    Android,
    Ios,
    Html,
    Headless,
    Server,
    Shared,
    TeaVM,
}

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::Core,
        Platform::Lwjgl3,
        Platform::Android,
        Platform::Ios,
        Platform::Html,
        Platform::Headless,
        Platform::Server,
        Platform::Shared,
        Platform::TeaVM,
    ];

    /// Module directory and Gradle project name
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Core => "core",
            Platform::Lwjgl3 => "lwjgl3",
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Html => "html",
            Platform::Headless => "headless",
            Platform::Server => "server",
            Platform::Shared => "shared",
            Platform::TeaVM => "teavm",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(id.trim()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Platform::Core => "Main module with the application logic shared by all platforms.",
            Platform::Lwjgl3 => "Primary desktop platform using LWJGL3; was called 'desktop' in older docs.",
            Platform::Android => "Android mobile platform. Needs Android SDK.",
            Platform::Ios => "iOS mobile platform using RoboVM.",
            Platform::Html => "Web platform using GWT and WebGL. Supports only Java projects.",
            Platform::Headless => "Desktop platform without a graphical interface.",
            Platform::Server => "A separate application without access to the `core` module.",
            Platform::Shared => "A common module shared by `core` and `server` platforms.",
            Platform::TeaVM => "Experimental web platform using TeaVM and WebGL.",
        }
    }

    /// Shown among the main platform choices rather than the extra ones
    pub fn is_standard(&self) -> bool {
        matches!(
            self,
            Platform::Core | Platform::Lwjgl3 | Platform::Android | Platform::Ios | Platform::Html
        )
    }

    /// Whether this module depends on `core`
    fn uses_core(&self) -> bool {
        !matches!(self, Platform::Core | Platform::Server | Platform::Shared)
    }

    /// Add this module's dependencies, launchers and configuration files.
    /// Runs after every extension, so accumulated GWT inherits, Android
    /// permissions and reflected packages are complete.
    pub fn initiate(&self, project: &mut Project) -> Result<()> {
        tracing::debug!(platform = self.id(), "initiating platform");
        if self.uses_core() {
            project.add_special_dependency(*self, "implementation project(':core')");
        }
        let package = project.package_path();

        match self {
            Platform::Core => {
                project.add_dependency(Platform::Core, "com.badlogicgames.gdx:gdx:$gdxVersion");
                if project.has_platform(Platform::Shared) {
                    project.add_special_dependency(Platform::Core, "api project(':shared')");
                }
            }
            Platform::Lwjgl3 => {
                project.add_dependency(
                    *self,
                    "com.badlogicgames.gdx:gdx-backend-lwjgl3:$gdxVersion",
                );
                project.add_dependency(
                    *self,
                    "com.badlogicgames.gdx:gdx-platform:$gdxVersion:natives-desktop",
                );
                project.add_file(ProjectFile::source(
                    format!("lwjgl3/src/main/java/{package}/lwjgl3/Lwjgl3Launcher.java"),
                    launchers::lwjgl3_launcher(project),
                ));
                for size in [128, 64, 32, 16] {
                    project.add_file(ProjectFile::copied(
                        format!("lwjgl3/src/main/resources/libgdx{size}.png"),
                        format!("icons/libgdx{size}.png"),
                    ));
                }
                project.describe_task("lwjgl3:run", "starts the application.");
                project.describe_task(
                    "lwjgl3:jar",
                    "builds application's runnable jar, which can be found at `lwjgl3/build/libs`.",
                );
            }
            Platform::Android => {
                project.add_dependency(*self, "com.badlogicgames.gdx:gdx-backend-android:$gdxVersion");
                for abi in ["armeabi-v7a", "arm64-v8a", "x86", "x86_64"] {
                    project.add_special_dependency(
                        *self,
                        format!("natives \"com.badlogicgames.gdx:gdx-platform:$gdxVersion:natives-{abi}\""),
                    );
                }
                project.add_special_dependency(*self, ANDROID_DESUGARING);
                project.root_gradle.add_buildscript_dependency(ANDROID_GRADLE_PLUGIN);
                project.properties.insert("android.useAndroidX", "true");
                project.properties.insert("android.enableR8.fullMode", "false");

                project.add_file(ProjectFile::source(
                    "android/AndroidManifest.xml",
                    launchers::android_manifest(project),
                ));
                project.add_file(ProjectFile::source(
                    "android/res/values/strings.xml",
                    launchers::android_strings(project),
                ));
                project.add_file(ProjectFile::source(
                    "android/res/values/styles.xml",
                    launchers::ANDROID_STYLES,
                ));
                project.add_file(ProjectFile::copied(
                    "android/res/drawable/ic_launcher.png",
                    "icons/libgdx128.png",
                ));
                project.add_file(ProjectFile::source(
                    "android/proguard-rules.pro",
                    launchers::ANDROID_PROGUARD,
                ));
                project.add_file(ProjectFile::source(
                    format!("android/src/main/java/{package}/android/AndroidLauncher.java"),
                    launchers::android_launcher(project),
                ));
                // Without a known SDK the Android plugin falls back to ANDROID_HOME
                if let Some(sdk) = &project.android_sdk {
                    let sdk = sdk.display().to_string().replace('\\', "/");
                    let local: Properties = [("sdk.dir", sdk)].into_iter().collect();
                    project.add_file(ProjectFile::properties("local.properties", local));
                }
                project.describe_task("android:lint", "performs Android project validation.");
            }
            Platform::Ios => {
                project.add_dependency(*self, "com.mobidevelop.robovm:robovm-rt:$robovmVersion");
                project.add_dependency(
                    *self,
                    "com.mobidevelop.robovm:robovm-cocoatouch:$robovmVersion",
                );
                project.add_dependency(*self, "com.badlogicgames.gdx:gdx-backend-robovm:$gdxVersion");
                project.add_dependency(
                    *self,
                    "com.badlogicgames.gdx:gdx-platform:$gdxVersion:natives-ios",
                );
                project.properties.insert("robovmVersion", ROBOVM_VERSION);
                project
                    .root_gradle
                    .add_buildscript_dependency("com.mobidevelop.robovm:robovm-gradle-plugin:$robovmVersion");
                project.gradle_file_mut(*self)?.add_plugin("robovm");

                project.add_file(ProjectFile::source(
                    "ios/robovm.properties",
                    launchers::robovm_properties(project),
                ));
                project.add_file(ProjectFile::source("ios/robovm.xml", launchers::ROBOVM_XML));
                project.add_file(ProjectFile::source("ios/Info.plist.xml", launchers::INFO_PLIST));
                project.add_file(ProjectFile::directory("ios/data"));
                project.add_file(ProjectFile::source(
                    format!("ios/src/main/java/{package}/IOSLauncher.java"),
                    launchers::ios_launcher(project),
                ));
                project.describe_task(
                    "ios:launchIPhoneSimulator",
                    "builds and runs the application in an iPhone simulator.",
                );
            }
            Platform::Html => {
                project.add_dependency(*self, "com.badlogicgames.gdx:gdx-backend-gwt:$gdxVersion");
                project.add_dependency(
                    *self,
                    "com.badlogicgames.gdx:gdx-backend-gwt:$gdxVersion:sources",
                );
                project.add_dependency(*self, "com.badlogicgames.gdx:gdx:$gdxVersion:sources");
                project.properties.insert("gwtFrameworkVersion", GWT_FRAMEWORK_VERSION);
                project.properties.insert("gwtPluginVersion", GWT_PLUGIN_VERSION);
                project
                    .root_gradle
                    .add_buildscript_dependency("org.docstr:gwt-gradle-plugin:$gwtPluginVersion");
                project
                    .root_gradle
                    .add_buildscript_dependency("org.gretty:gretty:3.1.0");
                let html = project.gradle_file_mut(*self)?;
                html.add_plugin("gwt");
                html.add_plugin("war");
                html.add_plugin("org.gretty");

                project.add_file(ProjectFile::source(
                    format!("core/src/main/java/{}.gwt.xml", project.main_class),
                    launchers::core_gwt_module(project),
                ));
                project.add_file(ProjectFile::source(
                    format!("html/src/main/java/{package}/GdxDefinition.gwt.xml"),
                    launchers::gwt_definition(project, false),
                ));
                project.add_file(ProjectFile::source(
                    format!("html/src/main/java/{package}/GdxDefinitionSuperdev.gwt.xml"),
                    launchers::gwt_definition(project, true),
                ));
                project.add_file(ProjectFile::source(
                    format!("html/src/main/java/{package}/gwt/GwtLauncher.java"),
                    launchers::gwt_launcher(project),
                ));
                project.add_file(ProjectFile::source(
                    "html/webapp/index.html",
                    launchers::html_index(project),
                ));
                project.add_file(ProjectFile::source(
                    "html/webapp/styles.css",
                    launchers::HTML_STYLES,
                ));
                project.describe_task(
                    "html:dist",
                    "compiles GWT sources. The compiled application can be found at `html/build/dist`: you can use any HTTP server to deploy it.",
                );
                project.describe_task(
                    "html:superDev",
                    "compiles GWT sources and runs the application in SuperDev mode. It will be available at [localhost:8080/html](http://localhost:8080/html). Use only during development.",
                );
            }
            Platform::Headless => {
                project.add_dependency(
                    *self,
                    "com.badlogicgames.gdx:gdx-backend-headless:$gdxVersion",
                );
                project.add_dependency(
                    *self,
                    "com.badlogicgames.gdx:gdx-platform:$gdxVersion:natives-desktop",
                );
                project.add_file(ProjectFile::source(
                    format!("headless/src/main/java/{package}/headless/HeadlessLauncher.java"),
                    launchers::headless_launcher(project),
                ));
                project.describe_task("headless:run", "starts the application without a window.");
            }
            Platform::Server => {
                if project.has_platform(Platform::Shared) {
                    project.add_special_dependency(*self, "implementation project(':shared')");
                }
                project.add_file(ProjectFile::source(
                    format!("server/src/main/java/{package}/server/ServerLauncher.java"),
                    launchers::server_launcher(project),
                ));
                project.describe_task("server:run", "runs the server application.");
            }
            Platform::Shared => {
                project.add_file(ProjectFile::directory(format!(
                    "shared/src/main/java/{package}"
                )));
            }
            Platform::TeaVM => {
                project.properties.insert("gdxTeaVMVersion", TEAVM_BACKEND_VERSION);
                project.add_dependency(
                    *self,
                    "com.github.xpenatan.gdx-teavm:backend-teavm:$gdxTeaVMVersion",
                );
                project.reflected_packages.insert(project.root_package.clone());
                project.add_file(ProjectFile::source(
                    format!("teavm/src/main/java/{package}/teavm/TeaVMBuilder.java"),
                    launchers::teavm_builder(project),
                ));
                project.add_file(ProjectFile::source(
                    format!("teavm/src/main/java/{package}/teavm/TeaVMLauncher.java"),
                    launchers::teavm_launcher(project),
                ));
                project.describe_task(
                    "teavm:build",
                    "builds the JavaScript application into the build/dist/webapp folder.",
                );
                project.describe_task(
                    "teavm:run",
                    "serves the JavaScript application at http://localhost:8080 via a local Jetty server.",
                );
            }
        }
        Ok(())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
