mod cli;
mod engine;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use engine::Aggregator;
use tally::config::{self, TallyConfig};
use tally::report::{json, terminal};
use tally::Property;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("tally=debug")
    } else if cli.quiet {
        EnvFilter::new("tally=error")
    } else {
        EnvFilter::new("tally=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    info!("Tally v{}", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir()?;

    match &cli.command {
        cli::Commands::Summary(args) => {
            let aggregator = Aggregator::new(TallyConfig::load(&cwd));
            let merged = aggregator.merge(&args.reports)?;
            let report = aggregator.narrow(merged, args.min_severity, args.file.as_deref())?;

            let format = args
                .format
                .as_deref()
                .unwrap_or(aggregator.config().output.format.as_str());

            // Output the report
            match format {
                "json" => {
                    let output = json::render(&report)?;
                    if let Some(ref path) = args.out {
                        std::fs::write(path, &output)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        info!("Report written to {}", path.display());
                    } else {
                        println!("{}", output);
                    }
                }
                _ => {
                    terminal::render(&report);
                    if let Some(ref path) = args.out {
                        let json_output = json::render(&report)?;
                        std::fs::write(path, &json_output)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        info!("JSON report also written to {}", path.display());
                    }
                }
            }

            // Exit code based on remaining issues
            if let Some(threshold) = args.fail_on {
                if report.has_issues_at_or_above(threshold) {
                    std::process::exit(1);
                }
            }
        }
        cli::Commands::Group(args) => {
            let property = Property::from_name(&args.by)?;
            let aggregator = Aggregator::new(TallyConfig::load(&cwd));
            let report = aggregator.merge(&args.reports)?;
            let groups = report.group_by(property);
            terminal::render_groups(property, &groups);
        }
        cli::Commands::Merge(args) => {
            let aggregator = Aggregator::new(TallyConfig::load(&cwd));
            let report = aggregator.merge(&args.reports)?;
            let output = json::render(&report)?;
            std::fs::write(&args.out, output)
                .with_context(|| format!("Failed to write {}", args.out.display()))?;
            info!("Merged report written to {} ({})", args.out.display(), report);
        }
        cli::Commands::Init => {
            if config::init_config(&cwd)? {
                println!("✅ Created {}", config::CONFIG_FILE);
                println!("   Edit it to customize provenance and output.");
            } else {
                println!("⚠️  {} already exists in this directory", config::CONFIG_FILE);
            }
        }
        cli::Commands::Properties => {
            println!();
            println!("📋 Tally — properties accepted by `tally group --by`");
            println!("{}", "━".repeat(55));
            for property in Property::ALL {
                println!("  {}", property);
            }
            println!("{}", "━".repeat(55));
            println!();
        }
    }

    Ok(())
}
