/*!
 * aclsweep - Main Entry Point
 *
 * Applies a rule configuration to a directory tree and reports the outcome.
 * The shipped provider is the in-memory one, so a run is a simulation: it
 * shows exactly which permission set would govern each directory and what the
 * resulting descriptors look like, without touching OS security state.
 */

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use aclsweep::{load_path, MemoryAclProvider, Orchestrator, Outcome, RunReport};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let quiet = args.iter().any(|a| a == "-q");
    let verbose = args.iter().any(|a| a == "-v");
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let (config_path, root) = match positional.as_slice() {
        [config, root] => (Path::new(config.as_str()), Path::new(root.as_str())),
        _ => {
            show_usage();
            return ExitCode::FAILURE;
        }
    };

    if !root.is_dir() {
        eprintln!(
            "Path error: {} does not exist or is not a directory",
            root.display()
        );
        show_usage();
        return ExitCode::FAILURE;
    }

    let watch = Instant::now();
    let config = match load_path(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            show_usage();
            return ExitCode::FAILURE;
        }
    };

    if verbose {
        println!("Done loading configuration ({}ms)", watch.elapsed().as_millis());
        for rule in &config.folder_rules {
            if rule.is_wildcard() {
                println!(
                    "[rule] {} (star_depth = {}) -> {}",
                    rule.pattern, rule.star_depth, rule.permission
                );
            } else {
                println!("[rule] {} -> {}", rule.pattern, rule.permission);
            }
        }
    }

    let provider = MemoryAclProvider::new();
    let report = Orchestrator::new(&config, &provider).run(root);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("Report error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        render(&report, quiet, verbose, watch);
    }

    ExitCode::SUCCESS
}

fn render(report: &RunReport, quiet: bool, verbose: bool, watch: Instant) {
    for dir in &report.outcomes {
        match (&dir.outcome, &dir.matched) {
            (Outcome::Applied, Some(rule)) => {
                if verbose {
                    println!(
                        "Found match for {}: {} -> {}",
                        dir.path.display(),
                        rule.pattern,
                        rule.permission
                    );
                }
            }
            (Outcome::Failed(reason), _) => {
                eprintln!("Error applying ACL: {reason}");
            }
            (Outcome::Skipped, _) => {
                if verbose {
                    println!("No match for {}", dir.path.display());
                }
            }
            _ => {}
        }
    }

    if !quiet {
        println!(
            "{} applied, {} skipped, {} failed in {}ms",
            report.applied(),
            report.skipped(),
            report.failed(),
            watch.elapsed().as_millis()
        );
    }
}

fn show_usage() {
    eprintln!("aclsweep v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("Usage: aclsweep [-q] [-v] [--json] <rule config> <path>");
    eprintln!("       -q      quiet mode (suppresses the summary line)");
    eprintln!("       -v      verbose mode (per-directory match reporting)");
    eprintln!("       --json  print the full run report as JSON");
    eprintln!();
    eprintln!("e.g.: aclsweep rules.json /srv/data");
    eprintln!("    : aclsweep -v rules.json /srv/data");
}
