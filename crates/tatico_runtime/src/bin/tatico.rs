//! Tatico CLI entry point.

use std::env;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use tatico_runtime::{ExportFormat, Flow, Repl, RuntimeConfig, init_tracing};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    no_banner: bool,
    output: Option<PathBuf>,
    format: ExportFormat,
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--no-banner" => config.no_banner = true,
            "-o" | "--output" => {
                let dir = args.next().ok_or("--output requires a directory")?;
                config.output = Some(PathBuf::from(dir));
            }
            "-f" | "--format" => {
                let format = args.next().ok_or("--format requires a value")?;
                config.format = format.parse()?;
            }
            "--log" => {
                config.log_filter = Some(args.next().ok_or("--log requires a filter")?);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("tatico {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = RuntimeConfig::default()
        .with_banner(!cli.no_banner && !cli.batch_mode)
        .with_export_format(cli.format);
    if let Some(filter) = cli.log_filter {
        config = config.with_log_filter(filter);
    }
    if let Some(dir) = cli.output {
        config = config.with_export_dir(dir);
    }

    init_tracing(&config.log_filter)?;

    let mut repl = Repl::new(config)?;

    // Run any specified scripts
    for file in &cli.files {
        if repl.eval_file(file)? == Flow::Stop {
            return Ok(());
        }
    }

    if cli.batch_mode {
        // With no files, the script comes from stdin
        if cli.files.is_empty() {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            repl.eval_source(&source, "<stdin>");
        }
        return Ok(());
    }

    // If scripts were run, suppress banner since context is established
    if !cli.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTatico\x1b[0m - Football lineup compiler

\x1b[1mUSAGE:\x1b[0m
    tatico [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Scripts to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -b, --batch           Run scripts (or stdin) and exit (no REPL)
    -o, --output DIR      Write every emitted document into DIR
    -f, --format FORMAT   Export format: json (default) or msgpack
        --log FILTER      Log filter, e.g. debug or tatico_engine=info
                          (TATICO_LOG overrides; default: warn)
        --no-banner       Do not print the welcome banner

\x1b[1mEXAMPLES:\x1b[0m
    tatico                           Start interactive REPL
    tatico -b demos/classico.tat     Run a script and exit
    tatico -b -o out < squad.tat     Run stdin, export to out/
    tatico --log debug               REPL with debug logging

\x1b[1mLANGUAGE:\x1b[0m
    TIME Fla ; Flu                   Declare teams (replaces the session)
    FORMACAO 4-4-2 ; 4-2-3-1         One formation per team
    GOL: 1(Rossi) ; 1(Fabio)         One player list per team
    DEF: / MEI: / ATA:               Same, for the other buckets
    VALIDAR                          Check every team, emit JSON, reset
    STOP                             Exit
    Ctrl+D                           Exit REPL"
    );
}
