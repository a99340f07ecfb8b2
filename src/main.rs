use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use photo_gpx_exporter::utils::get_config_path;
use photo_gpx_exporter::{PhotoProcessor, ProcessingResult, ProgressSnapshot, Settings};

#[derive(Parser)]
#[command(name = "photo_gpx")]
#[command(about = "Export the GPS locations of a photo folder as a GPX track log")]
#[command(version)]
struct Cli {
    /// Folder with photos (defaults to the last folder used)
    folder: Option<PathBuf>,

    /// Output directory for the GPX file and errors.log
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the final result as JSON
    #[arg(long)]
    json: bool,

    /// Do not print per-photo progress
    #[arg(long, short)]
    quiet: bool,

    /// Debug-level diagnostics
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_progress(s: &ProgressSnapshot) {
    println!(
        "📊 {:>3}% | {}/{} processed, {} remaining | ✅ {} ⏭️  {} ❌ {} | success {:.1}%",
        s.percentage,
        s.processed_photos,
        s.total_photos,
        s.remaining_photos,
        s.successful_photos,
        s.skipped_photos,
        s.error_photos,
        s.success_rate
    );
}

fn format_summary(result: &ProcessingResult) -> String {
    let mut lines = vec![
        "🎉 Processing completed!".to_string(),
        format!("   🔍 Total photos: {}", result.total_photos),
        format!("   🗺️  Successfully processed: {}", result.successful_photos),
        format!("   ⏭️  Skipped (no GPS): {}", result.skipped_photos),
        format!("   ❌ Errors: {}", result.error_photos),
        format!("   📈 Success rate: {:.1}%", result.success_rate),
        String::new(),
        format!("   GPX file saved to: {}", result.gpx_file_path.display()),
        format!("   Error log saved to: {}", result.log_file_path.display()),
    ];
    if result.successful_photos == 0 {
        lines.push(String::new());
        lines.push("⚠️  No photos with GPS data were found.".to_string());
    }
    lines.join("\n")
}

/// Settings are a convenience; a broken ini file must not block a run.
fn load_settings(config_path: &Path) -> Settings {
    Settings::load_from(config_path).unwrap_or_else(|e| {
        tracing::warn!(
            "Could not load settings from {}, using defaults: {:#}",
            config_path.display(),
            e
        );
        Settings::default()
    })
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = load_settings(&get_config_path());

    let folder = match cli.folder.or_else(|| settings.last_folder.as_ref().map(PathBuf::from)) {
        Some(folder) => folder,
        None => anyhow::bail!("No photo folder given and no saved folder found"),
    };

    let mut config = settings.processor_config();
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    let show_progress = settings.show_progress && !cli.quiet && !cli.json;

    let (tx, mut rx) = mpsc::unbounded_channel::<ProgressSnapshot>();
    let worker_folder = folder.clone();
    let worker = tokio::task::spawn_blocking(move || {
        PhotoProcessor::new(config).process_photos(&worker_folder, &tx)
    });

    // Snapshots are rendered here, off the worker thread
    while let Some(snapshot) = rx.recv().await {
        if show_progress {
            render_progress(&snapshot);
        }
    }

    let result = worker
        .await
        .context("Processing task panicked")?
        .with_context(|| format!("Failed to process {}", folder.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("\n{}", format_summary(&result));
    }

    settings.update_last_folder(&folder);
    if let Err(e) = settings.save() {
        tracing::warn!("Could not save settings: {:#}", e);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
