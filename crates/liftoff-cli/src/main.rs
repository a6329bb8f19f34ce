//! Liftoff CLI - headless libGDX project generation

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use liftoff_core::{
    check_java, generate, versioned_artifacts, GeneratorConfig, GradleRunner,
    MavenCentralSource, Preset, Project, ProjectSelection, VersionCache,
};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "liftoff")]
#[command(about = "Generate a multi-module libGDX Gradle project")]
#[command(version)]
pub struct Args {
    /// Preset name (DEFAULT, KOTLIN, KTX, KTX_WEB, ANDROID_DEV, GWT_DEV, TEA_DEV)
    /// or a path to a selection YAML file. Unknown names use DEFAULT.
    pub target: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("liftoff=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Handle Ctrl+C during a Gradle run
    ctrlc::set_handler(move || {
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = GeneratorConfig::from_env()?;
    let selection = load_selection(args.target.as_deref(), &config)?;

    let cache = Arc::new(VersionCache::new());
    let mut project = Project::new(&selection, Arc::clone(&cache))?;

    if config.offline {
        tracing::info!("offline mode, using built-in library versions");
    } else {
        let artifacts = versioned_artifacts(&project);
        let source = Arc::new(MavenCentralSource::from_config(&config));
        let fetched = cache.prefetch(source, artifacts.clone()).await;
        tracing::info!(fetched, requested = artifacts.len(), "library versions resolved");
    }

    let mut log = |line: &str| println!("{} {}", "│".dimmed(), line);
    generate(&mut project, &config.resources_dir, &mut log)
        .with_context(|| format!("failed to generate {}", project.destination.display()))?;

    let tasks = config
        .gradle_tasks
        .clone()
        .unwrap_or_else(|| selection.advanced.gradle_tasks.clone());
    if !tasks.is_empty() {
        let java = check_java();
        match (&java.version, java.available) {
            (Some(version), true) => log(&format!("{} {}", java.name, version)),
            (None, true) => log(&format!("{} (unknown version)", java.name)),
            (_, false) => log(&format!(
                "{}",
                "Java was not found on PATH; Gradle will likely fail".yellow()
            )),
        }
        GradleRunner::new(&project.destination)
            .run(&tasks, &mut log)
            .await?;
    }

    println!();
    println!(
        "{} {}",
        "Project ready at".green().bold(),
        project.destination.display()
    );
    Ok(())
}

/// A YAML path when one exists, otherwise a preset name
fn load_selection(target: Option<&str>, config: &GeneratorConfig) -> Result<ProjectSelection> {
    if let Some(target) = target {
        let path = Path::new(target);
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );
        if is_yaml && path.is_file() {
            let mut selection = ProjectSelection::from_yaml_file(path)?;
            if selection.android_sdk.is_none() {
                selection.android_sdk = config.android_sdk.clone();
            }
            return Ok(selection);
        }
    }

    let preset = Preset::from_name(target.unwrap_or_default());
    tracing::info!(%preset, "using preset");
    Ok(preset.selection(&config.output_root, config.android_sdk.clone()))
}
