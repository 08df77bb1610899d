use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use jfmigrate::{
    migrate, read_source_file, templates::PASSWORD_PLACEHOLDER, write_document, write_report,
    ServerConfig, DEFAULT_SERVER_URL, DEFAULT_SERVER_USER,
};

#[derive(Parser)]
#[command(name = "jfmigrate")]
#[command(
    author,
    version,
    about = "Convert a Jenkinsfile from the Artifactory plugin to the JFrog plugin",
    long_about = None
)]
struct Cli {
    /// Jenkinsfile written against the Artifactory plugin
    input: PathBuf,

    /// Where to write the converted Jenkinsfile
    output: PathBuf,

    /// JFrog platform URL for `jf config add`
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// User for `jf config add`
    #[arg(long, default_value = DEFAULT_SERVER_USER)]
    server_user: String,

    /// Also write a JSON report of what was detected
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = ServerConfig {
        url: cli.server_url,
        user: cli.server_user,
    };
    run(&cli.input, &cli.output, cli.report.as_deref(), &config)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(
    input: &Path,
    output: &Path,
    report: Option<&Path>,
    config: &ServerConfig,
) -> Result<()> {
    println!("Reading: {}", input.display());
    let source = read_source_file(input).context("Failed to load input pipeline")?;

    println!("\nConverting pipeline...");
    let migration = migrate(&source, config);
    println!("✓ Decoded {} HTML entities", migration.entities_decoded);

    write_document(&migration.document, output).context("Failed to write converted pipeline")?;
    println!("✓ Converted pipeline written to: {}", output.display());

    if let Some(report_path) = report {
        write_report(&migration.report(), report_path).context("Failed to write report")?;
        info!("Report written to {:?}", report_path);
    }

    let line = migration.document.placeholder_line;
    println!();
    println!("{}", "=".repeat(50));
    println!("✅ MIGRATION COMPLETE!");
    println!("{}", "=".repeat(50));
    println!("\nNext steps:");
    println!("1. Review {}", output.display());
    println!("2. Replace {} on line {}", PASSWORD_PLACEHOLDER, line);
    println!("3. Create Jenkins job with this script");
    println!("4. Test it!");

    Ok(())
}
