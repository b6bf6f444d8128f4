//! CLI entrypoint for elfscope.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser};
use elfscope_core::FileSource;
use elfscope_harness::config::{OutputFormat, RunConfig};
use elfscope_harness::render::render_plain;
use elfscope_harness::report::{
    Actions, HarnessError, RunOutput, inspect, log_report, log_self_test, run_self_test,
};
use elfscope_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Decode the structure of an ELF object.
#[derive(Debug, Parser)]
#[command(name = "elfscope")]
#[command(about = "Decode ELF headers, sections, symbols and relocations")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Print the file header (the default when no other view is chosen).
    #[arg(short = 'h', long)]
    header: bool,
    /// Print the section headers.
    #[arg(short = 'S', long)]
    sections: bool,
    /// Print the regular and dynamic symbol tables.
    #[arg(short = 's', long)]
    symbols: bool,
    /// Print every relocation section with resolved symbols.
    #[arg(short = 'r', long)]
    relocations: bool,
    /// Check the relocation-type tables.
    #[arg(short = 't', long = "self-test")]
    self_test: bool,
    /// Output format: `plain` or `json` (default from ELFSCOPE_FORMAT).
    #[arg(long)]
    format: Option<String>,
    /// Output file path (if omitted, prints to stdout).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Structured JSONL log path (default from ELFSCOPE_LOG).
    #[arg(long)]
    log: Option<PathBuf>,
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
    /// Object file to inspect.
    target: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("elfscope: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = match cli.format.as_deref() {
        Some(raw) => Some(
            OutputFormat::from_str_loose(raw)
                .ok_or_else(|| HarnessError::UnsupportedFormat(raw.to_string()))?,
        ),
        None => None,
    };
    let config = RunConfig::from_env().with_overrides(format, cli.log.clone());

    let actions = Actions {
        header: cli.header,
        sections: cli.sections,
        symbols: cli.symbols,
        relocations: cli.relocations,
        self_test: cli.self_test,
    };
    if cli.target.is_none() && !actions.self_test {
        return Err(HarnessError::MissingTarget.into());
    }

    let run_id = format!("run-{}", std::process::id());
    let mut emitter = match &config.log_path {
        Some(path) => {
            let emitter = LogEmitter::to_file(path, &run_id)?;
            eprintln!("elfscope: logging {} to {}", emitter.run_id(), path.display());
            Some(emitter)
        }
        None => None,
    };

    let mut output = RunOutput::default();
    if actions.self_test {
        let result = run_self_test();
        if let Some(emitter) = emitter.as_mut() {
            log_self_test(emitter, &result)?;
        }
        output.self_test = Some(result?);
    }

    if let Some(path) = &cli.target {
        let started = Instant::now();
        let result = FileSource::open(path)
            .map_err(HarnessError::from)
            .and_then(|source| {
                let label = source.path().display().to_string();
                eprintln!("elfscope: decoding {label}");
                inspect(&label, &source, actions.with_default_header())
            });
        match result {
            Ok(report) => {
                if let Some(emitter) = emitter.as_mut() {
                    log_report(emitter, &report, started.elapsed())?;
                }
                output.report = Some(report);
            }
            Err(err) => {
                if let Some(emitter) = emitter.as_mut() {
                    log_fatal(emitter, &path.display().to_string(), &err)?;
                }
                return Err(err.into());
            }
        }
    }

    let rendered = match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(&output)? + "\n",
        OutputFormat::Plain => render_plain(&output),
    };
    match &cli.output {
        Some(path) => write_output(path, &rendered)?,
        None => print!("{rendered}"),
    }

    if let Some(report) = &output.report {
        report.ensure_complete()?;
    }
    Ok(())
}

fn log_fatal<W: Write>(
    emitter: &mut LogEmitter<W>,
    target: &str,
    err: &HarnessError,
) -> std::io::Result<()> {
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Error, "inspect_aborted")
            .with_target(target)
            .with_outcome(Outcome::Fail)
            .with_error(err.to_string()),
    )?;
    emitter.flush()
}

fn write_output(path: &Path, rendered: &str) -> Result<(), HarnessError> {
    let wrap = |source: std::io::Error| HarnessError::Output {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, rendered).map_err(wrap)
}
