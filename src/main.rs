mod cli;

use clap::Parser;
use cli::{Cli, Commands, ValidateArgs};
use colored::Colorize;
use skillcheck::{config::Config, output, rules, validate::collection::validate_collection};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.validate.log_level);

    match cli.command {
        None => std::process::exit(run_validate(cli.validate)),

        Some(Commands::ListRules) => {
            let rules = rules::all_rules();
            println!("{}", "Rules".bold().underline());
            println!();

            let mut current_area = "";
            for rule in &rules {
                if rule.area != current_area {
                    if !current_area.is_empty() {
                        println!();
                    }
                    println!("  {}", rule.area.bold());
                    current_area = rule.area;
                }
                println!("    {id:<30} {message}", id = rule.id, message = rule.message);
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Some(Commands::Explain { rule_id }) => match rules::find_rule(&rule_id) {
            Some(rule) => {
                println!("{}", rule.id.bold());
                println!();
                println!("  Area:         {}", rule.area);
                println!("  Description:  {}", rule.message);
                println!("  Remediation:  {}", rule.remediation);
            }
            None => {
                eprintln!("Unknown rule: {rule_id}");
                eprintln!("Use 'skillcheck list-rules' to see all available rules.");
                std::process::exit(2);
            }
        },
    }
}

/// Validates the collection and returns the process exit code.
fn run_validate(args: ValidateArgs) -> i32 {
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    let report = match validate_collection(&args.path, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    let formatted = output::format_report(&report, &args.format);
    match args.output {
        Some(out_path) => {
            if let Err(e) = std::fs::write(&out_path, &formatted) {
                eprintln!("Error writing output: {e}");
                return 2;
            }
            eprintln!("Output written to {}", out_path.display());
        }
        None => print!("{formatted}"),
    }

    if report.passed {
        0
    } else {
        1
    }
}

/// Logs go to stderr; stdout carries only the report.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
