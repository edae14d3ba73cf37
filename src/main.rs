use clap::{Parser, Subcommand};
use content_index::pipeline::{self, Mode};
use content_index::{config, logging, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup
        hash => &*Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "content-index")]
#[command(about = "Write JSON manifests for a static content site")]
#[command(long_about = "\
Write JSON manifests for a static content site

Scans the content root and writes one manifest per source directory, plus a
version counter bumped on every build.

Content structure:

  ./
  ├── index.toml                   # Optional config (see gen-config)
  ├── media/                       # → database/media.json
  │   ├── 2024-graduation/         # Folder key, lists its images
  │   │   ├── crowd.jpg
  │   │   └── stage.png
  │   └── 2023-sports-day/
  │       └── relay.jpg
  ├── others/                      # → database/others.json
  │   ├── banner.png               # Key \"banner\"
  │   └── campus-tour.mp4
  └── notice/                      # → database/notice.json
      └── 20240115-New_Policy/     # Date 2024-01-15, title \"New Policy\"
          └── doc.pdf

Running with no command is the same as 'content-index build'.")]
#[command(version = version_string())]
struct Cli {
    /// Content root holding the source directories
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (default: <root>/index.toml, optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory relative to the root, overriding the config
    #[arg(long, global = true)]
    output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan all sources and write every manifest
    Build,
    /// Scan all sources and report without writing anything
    Check,
    /// Print a stock index.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mode = match cli.command.unwrap_or(Command::Build) {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
        Command::Build => Mode::Write,
        Command::Check => Mode::Check,
    };

    let config_path = cli
        .config
        .unwrap_or_else(|| cli.root.join(config::CONFIG_FILENAME));
    let mut site_config = config::load_config_file(&config_path)?;
    if let Some(output_dir) = cli.output {
        site_config.output_dir = output_dir;
        site_config.validate()?;
    }

    let report = pipeline::run(&cli.root, &site_config, mode)?;
    output::print_build_output(&report, &cli.root);

    let failures = report.notice_scan.failures().count();
    if failures > 0 {
        eprintln!("==> {failures} notice folder(s) skipped, see above");
    }
    if mode == Mode::Check {
        println!("==> Content is valid, nothing written");
    }
    Ok(())
}
