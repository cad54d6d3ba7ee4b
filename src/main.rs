use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orange_poster::models::{AppConfig, OutputFormat};
use orange_poster::services::BatchProcessor;
use tritone::Palette;

/// Environment variable naming a config file when `--config` is absent
const CONFIG_ENV: &str = "ORANGE_POSTER_CONFIG";

#[derive(Parser)]
#[command(name = "orange-poster")]
#[command(about = "Turn photos into blocky three-tone orange posters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images into posters
    Process {
        /// Input images (PNG or JPEG)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        overrides: ConfigArgs,
    },
    /// Print the effective configuration as YAML
    Config {
        #[command(flatten)]
        overrides: ConfigArgs,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// YAML config file (default: $ORANGE_POSTER_CONFIG, then built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (created if missing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pixelation working height; smaller means bigger blocks
    #[arg(long)]
    target_height: Option<u32>,

    /// Palette as comma-separated hex RGB, darkest level first
    /// (e.g. "#000000,#8A3A1D,#FF6B35")
    #[arg(long)]
    colors: Option<String>,

    /// PNG layout
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Re-compress output PNGs with oxipng
    #[arg(long)]
    optimize: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Indexed,
    Rgb,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Indexed => OutputFormat::Indexed,
            FormatArg::Rgb => OutputFormat::Rgb,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orange_poster=info,tritone=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Process { files, overrides } => run_process_command(&files, &overrides),
        Commands::Config { overrides } => run_config_command(&overrides),
    }
}

/// Load the effective configuration for a command
fn resolve_config(args: &ConfigArgs) -> anyhow::Result<AppConfig> {
    let path = config_path(args, std::env::var(CONFIG_ENV).ok());
    build_config(path.as_deref(), args)
}

/// `--config` if given, else the value of the config environment variable
fn config_path(args: &ConfigArgs, env_value: Option<String>) -> Option<PathBuf> {
    args.config.clone().or_else(|| env_value.map(PathBuf::from))
}

/// Load `path` (or defaults) and apply command-line overrides
fn build_config(path: Option<&Path>, args: &ConfigArgs) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_or_default(path)?;

    if let Some(ref output) = args.output {
        config.output_dir = output.clone();
    }
    if let Some(height) = args.target_height {
        config.target_height = height;
    }
    if let Some(ref colors) = args.colors {
        let palette: Palette = colors
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --colors {colors:?}: {e}"))?;
        config.palette = palette.to_hex_strings();
    }
    if let Some(format) = args.format {
        config.png.format = format.into();
    }
    if args.optimize {
        config.png.optimize = true;
    }

    Ok(config)
}

/// Convert every input file, reporting failures without stopping
fn run_process_command(files: &[PathBuf], args: &ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let settings = config.settings()?;
    let processor = BatchProcessor::new(settings);

    let report = processor.run(files, &config.output_dir)?;

    for (input, output) in report.succeeded() {
        println!("{} -> {}", input.display(), output.display());
    }
    for (_, error) in report.failed() {
        eprintln!("error: {error}");
    }

    let total = report.outcomes.len();
    let failed = report.failure_count();
    if failed > 0 {
        anyhow::bail!("{failed} of {total} images failed");
    }

    println!("Processed {total} images!");
    Ok(())
}

/// Print the effective configuration
fn run_config_command(args: &ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    // Validate before printing so a broken config is reported, not echoed
    config.settings()?;
    print!("{}", config.to_yaml_string()?);
    Ok(())
}
