mod compare;
mod render;

use std::fs;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rfc822_core::{RecognizerConfig, check, parse_fixture, run_fixture, validate};
use rfc822_diagnostics::Code;
use rfc822_generator::{AddressGenerator, GeneratorOptions};
use tracing_subscriber::EnvFilter;

use crate::render::{Format, Tally, print_summary, render_diagnostics_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "rfc822",
    version,
    about = "Check mail addresses against the RFC 822 addr-spec grammar"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Log filter written to stderr (e.g. "debug" or "rfc822_core=trace").
    /// Overrides RUST_LOG; the default is "warn".
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Check one or more addresses. Reads one address per line from stdin
    /// when none are given or the only argument is "-".
    #[command(alias = "validate")]
    Check {
        addresses: Vec<String>,
        /// Treat warnings as failures.
        #[arg(long)]
        strict: bool,
        #[command(flatten)]
        limits: Limits,
    },

    /// Run a labeled fixture: one case per line, "+" for valid addresses and
    /// any other first character for invalid ones.
    Corpus {
        file: String,
        #[command(flatten)]
        limits: Limits,
    },

    /// Print a Markdown table comparing the recognizer with common regex
    /// validators, one row per input line (FILE or stdin).
    Compare { file: Option<String> },

    /// Print randomly generated valid addresses.
    Generate {
        /// Number of addresses.
        #[arg(default_value_t = 10)]
        count: usize,
        /// RNG seed; a random one is chosen (and logged at info level) when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Insert whitespace and comments between tokens.
        #[arg(long)]
        comments: bool,
    },

    /// Explain a diagnostic ID (e.g. ADDR1007).
    Explain { id: String },
}

/// Recognizer limits shared by `check` and `corpus`.
#[derive(Args, Debug)]
struct Limits {
    /// Reject comments nested deeper than this.
    #[arg(long)]
    max_comment_depth: Option<usize>,
    /// Reject inputs longer than this many bytes.
    #[arg(long)]
    max_length: Option<usize>,
}

impl Limits {
    fn config(&self) -> RecognizerConfig {
        let mut config = RecognizerConfig::default();
        if let Some(depth) = self.max_comment_depth {
            config = config.with_max_comment_depth(depth);
        }
        if let Some(len) = self.max_length {
            config = config.with_max_input_len(len);
        }
        config
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Check {
            addresses,
            strict,
            limits,
        } => cmd_check(addresses, strict, &limits.config(), format)?,
        Cmd::Corpus { file, limits } => cmd_corpus(&file, &limits.config(), format)?,
        Cmd::Compare { file } => cmd_compare(file.as_deref(), format)?,
        Cmd::Generate {
            count,
            seed,
            comments,
        } => cmd_generate(count, seed, comments, format)?,
        Cmd::Explain { id } => cmd_explain(&id, format)?,
    }

    Ok(())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_check(
    addresses: Vec<String>,
    strict: bool,
    config: &RecognizerConfig,
    format: Format,
) -> Result<()> {
    let inputs = collect_inputs(addresses)?;
    let mut tally = Tally::default();
    let mut failed = false;
    let mut results = Vec::new();

    for (label, input) in &inputs {
        let res = check(input, config);
        tally.record(res.ok, &res.diagnostics);
        let pass = if strict { res.is_clean() } else { res.ok };
        failed |= !pass;
        tracing::debug!(%label, ok = res.ok, diagnostics = res.diagnostics.len(), "checked");

        match format {
            Format::Pretty => {
                render_diagnostics_pretty(input, label, &res.diagnostics);
                let verdict = if pass { "valid  " } else { "invalid" };
                println!("{verdict} {input}");
            }
            Format::Json => results.push(serde_json::json!({
                "input": input,
                "ok": res.ok,
                "diagnostics": res.diagnostics,
            })),
        }
    }

    match format {
        Format::Pretty => print_summary(tally),
        Format::Json => {
            let out = serde_json::json!({
                "ok": !failed,
                "strict": strict,
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    if failed {
        process::exit(1);
    }
    Ok(())
}

fn cmd_corpus(file: &str, config: &RecognizerConfig, format: Format) -> Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("failed to read fixture '{file}'"))?;
    let cases = parse_fixture(&text);
    tracing::info!(file, cases = cases.len(), "running fixture");
    let report = run_fixture(&cases, config);

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "ok": report.passed(),
                "total": report.total,
                "mismatches": &report.mismatches,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            for m in &report.mismatches {
                let label = format!("{file}:{}", m.case.line);
                match &m.rejection {
                    Some(rejection) => {
                        eprintln!("{label}: expected valid, got {rejection}");
                        let d = rejection.to_diagnostic(&m.case.input);
                        render_diagnostics_pretty(&m.case.input, &label, &[d]);
                    }
                    None => eprintln!("{label}: expected invalid, accepted {:?}", m.case.input),
                }
            }
            if report.passed() {
                eprintln!("corpus ok: {} cases", report.total);
            } else {
                eprintln!(
                    "{} of {} cases disagree with their label",
                    report.mismatches.len(),
                    report.total
                );
            }
        }
    }

    if !report.passed() {
        process::exit(1);
    }
    Ok(())
}

fn cmd_compare(file: Option<&str>, format: Format) -> Result<()> {
    let text = match file {
        Some(path) if path != "-" => {
            fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))?
        }
        _ => read_stdin()?,
    };

    match format {
        Format::Pretty => {
            println!("{}", compare::table_header());
            for line in text.lines() {
                println!("{}", compare::table_row(line));
            }
        }
        Format::Json => {
            let rows: Vec<_> = text
                .lines()
                .map(|line| {
                    let verdicts: serde_json::Map<String, serde_json::Value> = compare::verdicts(line)
                        .into_iter()
                        .map(|(name, ok)| (name.to_string(), ok.into()))
                        .collect();
                    serde_json::json!({ "input": line, "verdicts": verdicts })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn cmd_generate(count: usize, seed: Option<u64>, comments: bool, format: Format) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, count, comments, "generating addresses");

    let options = GeneratorOptions::default().with_comments(comments);
    let addresses: Vec<String> = AddressGenerator::with_options(seed, options)
        .take(count)
        .collect();

    for address in &addresses {
        if let Err(rejection) = validate(address) {
            tracing::warn!("*** Address '{address}' reported as invalid: {rejection}");
        }
    }

    match format {
        Format::Pretty => {
            for address in &addresses {
                println!("{address}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&addresses)?),
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    let code = Code::from_id(id);
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "id": code.map_or(id, |c| c.id()),
                "severity": code.map(Code::severity),
                "summary": code.map(Code::summary),
                "explanation": code.map(Code::explain),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => match code {
            Some(code) => {
                use ariadne::Fmt;
                println!("{} ({}): {}", code.fg(ariadne::Color::Cyan), code.severity(), code.summary());
                println!("\n{}", code.explain());
            }
            None => println!("{id}: unknown diagnostic ID"),
        },
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Label each address for diagnostics: `arg N` for arguments, `stdin:N` for
/// non-empty stdin lines.
fn collect_inputs(addresses: Vec<String>) -> Result<Vec<(String, String)>> {
    if addresses.is_empty() || addresses == ["-"] {
        let text = read_stdin()?;
        return Ok(text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| (format!("stdin:{}", i + 1), line.to_string()))
            .collect());
    }
    Ok(addresses
        .into_iter()
        .enumerate()
        .map(|(i, address)| (format!("arg {}", i + 1), address))
        .collect())
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}
