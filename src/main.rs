use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use calcpad::calculator::{Calculator, InputEvent, copy_to_clipboard};
use calcpad::config::Config;
use calcpad::keys::parse_key_script;

/// Keypad calculator driven by key scripts.
///
/// Scripts use single keys (`0-9 . + - * / = %`, `C` to clear) and named
/// keys in angle brackets (`<enter>`, `<bs>`, `<esc>`, `<pct>`).
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
struct Args {
    /// Key scripts to run in order. Reads one script per line from stdin
    /// when omitted.
    scripts: Vec<String>,

    /// Print the display after every key.
    #[arg(long)]
    steps: bool,

    /// Print the full calculator state as JSON.
    #[arg(long)]
    json: bool,

    /// Copy the final display to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Path to the config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "configuration");

    let mut calc = Calculator::with_max_chars(config.display.max_chars);
    let mut out = io::stdout().lock();
    let copy = args.copy || config.clipboard.copy_result;

    if args.scripts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            run_script(&mut calc, &line, &args, &mut out)?;
            print_state(&calc, &args, &config, &mut out)?;
            if copy {
                copy_result(&calc)?;
            }
        }
    } else {
        for script in &args.scripts {
            run_script(&mut calc, script, &args, &mut out)?;
        }
        print_state(&calc, &args, &config, &mut out)?;
        if copy {
            copy_result(&calc)?;
        }
    }

    Ok(())
}

/// Copy the result on the display, if any. Errors and partial entries are
/// left off the clipboard.
fn copy_result(calc: &Calculator) -> Result<()> {
    if let Some(result) = calc.result() {
        copy_to_clipboard(result)?;
        info!("copied {result:?} to clipboard");
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_script(
    calc: &mut Calculator,
    script: &str,
    args: &Args,
    out: &mut impl Write,
) -> Result<()> {
    let events =
        parse_key_script(script).with_context(|| format!("Invalid key script {script:?}"))?;
    for event in events {
        let display = calc.dispatch(event);
        if args.steps {
            writeln!(out, "{:<12} {}", describe(event), display)?;
        }
    }
    Ok(())
}

fn print_state(calc: &Calculator, args: &Args, config: &Config, out: &mut impl Write) -> Result<()> {
    if args.json {
        let json = serde_json::to_string(&calc.snapshot())?;
        writeln!(out, "{json}")?;
        return Ok(());
    }
    match calc.pending_operator() {
        Some(key) if config.display.show_pending_operator => {
            writeln!(out, "{} {}", calc.current_display(), key.glyph)?
        }
        _ => writeln!(out, "{}", calc.current_display())?,
    }
    Ok(())
}

fn describe(event: InputEvent) -> String {
    match event {
        InputEvent::Digit(d) => d.to_string(),
        InputEvent::Decimal => ".".to_string(),
        InputEvent::Operator(key) => key.glyph.to_string(),
        InputEvent::Equals => "=".to_string(),
        InputEvent::Backspace => "<bs>".to_string(),
        InputEvent::Percent => "%".to_string(),
        InputEvent::Clear => "<clear>".to_string(),
    }
}
