use clap::Parser;
use voskcheck::checklist::{ChecklistOptions, run_checklist};
use voskcheck::cli::Cli;
use voskcheck::output::Reporter;
use voskcheck::recognizer::LibraryLogLevel;

fn main() {
    let cli = Cli::parse();

    // JSON mode keeps stdout clean for the report; progress is suppressed.
    let reporter = Reporter::new(cli.quiet || cli.json);

    let options = ChecklistOptions {
        model_override: cli.model,
        keep_audio: cli.keep_audio,
        log_level: if cli.verbose {
            LibraryLogLevel::Verbose
        } else {
            LibraryLogLevel::Quiet
        },
    };

    let report = run_checklist(&options, &reporter);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize report: {}", e),
        }
    }

    hold_open_on_windows();
    std::process::exit(report.exit_code());
}

/// On an interactive Windows console, wait for Enter so the operator can
/// read the results before the window closes. Presentation only.
#[cfg(windows)]
fn hold_open_on_windows() {
    use std::io::{BufRead, IsTerminal};

    if std::io::stdin().is_terminal() {
        println!();
        println!("Press Enter to exit...");
        let stdin = std::io::stdin();
        let _ = stdin.lock().lines().next();
    }
}

#[cfg(not(windows))]
fn hold_open_on_windows() {}
