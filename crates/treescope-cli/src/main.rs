//! `treescope` binary
//!
//! `report` parses source files (the bundled fixtures by default) and prints
//! each syntax tree with the detected language-specific structures.
//! `showcase` runs the native fixture semantics.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use treescope_fixture::showcase::{even_squares, write_greeting, Person};
use treescope_fixture::sources;
use treescope_syntax::{Language, SyntaxParser, SyntaxReport};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("treescope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Multi-language syntax showcase and tree-sitter detector")
        .subcommand_required(true)
        .subcommand(
            Command::new("report")
                .about("Parse source files and report special syntax structures")
                .arg(
                    Arg::new("paths")
                        .value_parser(value_parser!(PathBuf))
                        .num_args(0..)
                        .help("Files to parse (defaults to the bundled fixtures)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit reports as JSON"),
                ),
        )
        .subcommand(
            Command::new("showcase")
                .about("Run the showcase semantics (greeting, squares, file write)")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value("test.txt")
                        .value_parser(value_parser!(PathBuf))
                        .help("Target path for the greeting file"),
                ),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("report", args)) => {
            let paths: Vec<PathBuf> = args
                .get_many::<PathBuf>("paths")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            run_report(&paths, args.get_flag("json"))
        }
        Some(("showcase", args)) => {
            let out = args
                .get_one::<PathBuf>("out")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("test.txt"));
            run_showcase(&out)
        }
        _ => ExitCode::FAILURE,
    }
}

fn run_report(paths: &[PathBuf], json: bool) -> ExitCode {
    let mut parser = SyntaxParser::new();
    let mut reports: Vec<SyntaxReport> = Vec::new();
    let mut failed = false;

    if paths.is_empty() {
        for fixture in &sources::ALL {
            // Bundled fixtures always map to a language by construction
            let Some(language) = Language::from_path(Path::new(fixture.file_name)) else {
                tracing::error!(file = fixture.file_name, "no language for fixture");
                failed = true;
                continue;
            };
            match parser.parse_source(fixture.file_name, fixture.source, language) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::error!(file = fixture.file_name, error = %e, "parse failed");
                    failed = true;
                }
            }
        }
    } else {
        for path in paths {
            match parser.parse_file(path) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "parse failed");
                    failed = true;
                }
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize reports");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_report(report: &SyntaxReport) {
    println!("\nparsed file: {}", report.file_name);
    println!("syntax tree:");
    println!("{}", report.sexp);

    println!("\nspecial structures:");
    for s in &report.structures {
        println!(
            "found {} syntax: {} (line {}, column {})",
            report.language, s.kind, s.line, s.column
        );
    }

    if report.has_errors {
        println!("warning: tree contains parse errors");
    }
}

fn run_showcase(out: &Path) -> ExitCode {
    let person = Person::new("Alice", 30);
    println!("{}", person.greet());
    println!("{} is {:?}", person.name, person.age_bracket());
    println!("even squares: {:?}", even_squares(10));

    match write_greeting(out) {
        Ok(()) => {
            println!("wrote greeting to {}", out.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to write greeting");
            ExitCode::FAILURE
        }
    }
}
