use crate::project::Project;
use crate::registry::Platform;
use std::collections::BTreeSet;

/// Repositories every module resolves against
const REPOSITORIES: &[&str] = &[
    "mavenCentral()",
    "maven { url 'https://s01.oss.sonatype.org' }",
    "mavenLocal()",
    "gradlePluginPortal()",
    "maven { url 'https://oss.sonatype.org/content/repositories/snapshots/' }",
    "maven { url 'https://jitpack.io' }",
];

/// The top-level `build.gradle`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootGradleFile {
    buildscript_dependencies: BTreeSet<String>,
}

impl RootGradleFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `classpath` entry to the buildscript block
    pub fn add_buildscript_dependency(&mut self, coordinate: &str) {
        self.buildscript_dependencies
            .insert(format!("\"{coordinate}\""));
    }

    pub fn buildscript_dependencies(&self) -> &BTreeSet<String> {
        &self.buildscript_dependencies
    }

    pub fn content(&self, project: &Project) -> String {
        let mut out = String::from("buildscript {\n  repositories {\n");
        for repository in ["mavenCentral()", "gradlePluginPortal()", "mavenLocal()", "google()"] {
            out.push_str(&format!("    {repository}\n"));
        }
        out.push_str("  }\n  dependencies {\n");
        for dependency in &self.buildscript_dependencies {
            out.push_str(&format!("    classpath {dependency}\n"));
        }
        out.push_str("  }\n}\n\n");

        out.push_str("allprojects {\n  apply plugin: 'eclipse'\n  apply plugin: 'idea'\n\n");
        out.push_str("  // This allows you to \"Build and run using IntelliJ IDEA\", an option in IDEA's Settings.\n");
        out.push_str("  idea {\n    module {\n      outputDir file('build/classes/java/main')\n");
        out.push_str("      testOutputDir file('build/classes/java/test')\n    }\n  }\n}\n\n");

        // Android applies its own plugin set
        let jvm_modules: Vec<String> = project
            .platforms()
            .iter()
            .filter(|p| **p != Platform::Android)
            .map(|p| format!("project(':{}')", p.id()))
            .collect();
        out.push_str(&format!("configure({}) {{\n", list_literal(&jvm_modules)));
        out.push_str("  apply plugin: 'java-library'\n");
        let java = project.advanced.java_version;
        out.push_str(&format!(
            "  java.sourceCompatibility = {java}\n\n  // From https://lyze.dev/2021/04/29/libGDX-Internal-Assets-List/\n"
        ));
        out.push_str("  // The article can be helpful when using assets.txt in your project.\n");
        out.push_str("  tasks.register('generateAssetList') {\n");
        out.push_str("    inputs.dir(\"${project.rootDir}/assets/\")\n");
        out.push_str("    File assetsFolder = new File(\"${project.rootDir}/assets/\")\n");
        out.push_str("    File assetsFile = new File(assetsFolder, \"assets.txt\")\n");
        out.push_str("    assetsFile.delete()\n\n");
        out.push_str("    fileTree(assetsFolder).collect { assetsFolder.relativePath(it) }.sort().each {\n");
        out.push_str("      assetsFile.append(it + \"\\n\")\n    }\n  }\n");
        out.push_str("  processResources.dependsOn 'generateAssetList'\n\n");
        out.push_str("  compileJava {\n    options.incremental = true\n  }\n}\n\n");

        out.push_str("subprojects {\n  version = \"$projectVersion\"\n");
        out.push_str(&format!("  ext.appName = '{}'\n", project.app_name()));
        out.push_str("  repositories {\n");
        for repository in REPOSITORIES {
            out.push_str(&format!("    {repository}\n"));
        }
        out.push_str("  }\n}\n\n");
        out.push_str(&format!(
            "eclipse.project.name = '{}' + '-parent'\n",
            project.app_name()
        ));
        out
    }
}

fn list_literal(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
