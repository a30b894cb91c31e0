//! CLI binary for brief: package a codebase's signatures into one document.

use anyhow::{Context, Result, bail};
use brief_core::GoVisibility;
use brief_core::config::BriefConfig;
use brief_pack::{PackageResult, Packager};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "brief",
    version,
    about = "Extract function and type signatures from a codebase for LLM context"
)]
struct Cli {
    /// Directory or file to package
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Extraction mode (only "sig" is supported)
    #[arg(short, long, default_value = "sig")]
    mode: String,

    /// Output format: xml, md, markdown, json
    #[arg(short, long)]
    format: Option<String>,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Additional ignore file (default: .gitignore)
    #[arg(short, long, value_name = "FILE")]
    ignore: Option<String>,

    /// Include hidden files and directories
    #[arg(long)]
    include_hidden: bool,

    /// Keep function and class bodies
    #[arg(long)]
    include_body: bool,

    /// Keep non-exported declarations
    #[arg(long)]
    include_private: bool,

    /// Extract import and export statements
    #[arg(long)]
    include_imports: bool,

    /// Omit the directory tree
    #[arg(long)]
    no_tree: bool,

    /// Skip the token estimate
    #[arg(long)]
    no_tokens: bool,

    /// Skip files larger than BYTES
    #[arg(long, value_name = "BYTES")]
    max_size: Option<u64>,

    /// Glob patterns to include files (repeatable)
    #[arg(long, value_name = "GLOB")]
    include: Vec<String>,

    /// Glob patterns to exclude files (repeatable)
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Go export rule: capitalized, package-level
    #[arg(long, value_parser = parse_go_visibility)]
    go_visibility: Option<GoVisibility>,

    /// List supported languages and exit
    #[arg(long)]
    languages: bool,
}

fn parse_go_visibility(s: &str) -> Result<GoVisibility, String> {
    match s {
        "capitalized" => Ok(GoVisibility::Capitalized),
        "package-level" => Ok(GoVisibility::PackageLevel),
        other => Err(format!(
            "unknown go visibility '{other}' (expected capitalized or package-level)"
        )),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.languages {
        for tag in brief_parser::languages() {
            println!("{tag}");
        }
        return Ok(());
    }

    if cli.mode != "sig" {
        bail!("unsupported mode '{}' (only 'sig' is available)", cli.mode);
    }
    if !cli.path.exists() {
        bail!("path not found: {}", cli.path.display());
    }

    let config_root = if cli.path.is_file() {
        cli.path.parent().unwrap_or(Path::new(".")).to_path_buf()
    } else {
        cli.path.clone()
    };
    let mut config = BriefConfig::load(&config_root)?;
    apply_flags(&mut config, &cli);
    config.validate()?;

    let result = run_with_spinner(&config, &cli.path)?;

    match config.output.path {
        Some(ref path) => write_file(path, &result.content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(result.content.as_bytes())
                .context("failed to write output")?;
            stdout.flush()?;
        }
    }

    eprintln!("{}", summary(&result));
    Ok(())
}

/// Command-line flags win over config file and environment.
fn apply_flags(config: &mut BriefConfig, cli: &Cli) {
    if let Some(ref format) = cli.format {
        config.output.format.clone_from(format);
    }
    if let Some(ref output) = cli.output {
        config.output.path = Some(output.clone());
    }
    if cli.no_tree {
        config.output.tree = false;
    }
    if cli.no_tokens {
        config.output.tokens = false;
    }

    config.extract.include_body |= cli.include_body;
    config.extract.include_private |= cli.include_private;
    config.extract.include_imports |= cli.include_imports;
    if let Some(vis) = cli.go_visibility {
        config.extract.go_visibility = vis;
    }

    config.scan.include_hidden |= cli.include_hidden;
    if let Some(ref ignore) = cli.ignore {
        config.scan.ignore_file.clone_from(ignore);
    }
    if let Some(size) = cli.max_size {
        config.scan.max_file_size = size;
    }
    config.scan.include.extend(cli.include.iter().cloned());
    config.scan.exclude.extend(cli.exclude.iter().cloned());
}

fn run_with_spinner(config: &BriefConfig, path: &Path) -> Result<PackageResult> {
    use indicatif::{ProgressBar, ProgressStyle};

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Extracting signatures from {}...", path.display()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = Packager::new(config.clone()).package(path);
    spinner.finish_and_clear();
    result
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn summary(result: &PackageResult) -> String {
    let mut line = format!(
        "Files: {}, Signatures: {}",
        result.total_files, result.total_signatures
    );
    if let Some(tokens) = result.total_tokens {
        line.push_str(&format!(", Tokens: {tokens}"));
    }
    if result.error_count > 0 {
        line.push_str(&format!(", Errors: {}", result.error_count));
    }
    line
}
