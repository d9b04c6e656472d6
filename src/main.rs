// polytape: multi-dialect tape machine interpreter

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use polytape::interpreter::constants::{BYTES_PER_MIB, DEFAULT_DIALECT, DEFAULT_SNAPSHOT_LIMIT_MIB};
use polytape::interpreter::{ExecutionTrace, TapeMachine};
use polytape::lexicon::{dialects, load, registry};
use polytape::translate::translate;
use polytape::ui::App;

/// Run or translate programs for the eight-instruction tape machine in any registered dialect
#[derive(Parser, Debug)]
#[command(name = "polytape", version, about)]
struct Cli {
    /// Source file to run
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Dialect of the source file. See --dialects for the full list
    #[arg(short, long, value_name = "DIALECT")]
    language: Option<String>,

    /// List all available dialects
    #[arg(long)]
    dialects: bool,

    /// Translate the source into DIALECT and print it to stdout
    #[arg(short, long, value_name = "DIALECT")]
    translate: Option<String>,

    /// Read program input from FILE instead of stdin
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Trace engine activity on stderr
    #[arg(short, long)]
    debug: bool,

    /// Record the run and step through it in the terminal debugger
    #[arg(long)]
    tui: bool,

    /// Memory budget for recorded snapshots, in MiB
    #[arg(long, value_name = "MIB", default_value_t = DEFAULT_SNAPSHOT_LIMIT_MIB)]
    snapshot_limit: usize,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("warn,polytape=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let registry = registry::builtin();

    if cli.dialects {
        println!("Available dialects: {}", registry.names().join(", "));
        return Ok(());
    }

    let Some(path) = cli.file.as_deref() else {
        eprintln!("Error: No input file given");
        eprintln!();
        eprintln!("Usage: polytape [OPTIONS] <FILE>");
        eprintln!("Try 'polytape --help' for more information.");
        process::exit(1);
    };

    let source = match fs::read(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Unable to read '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    let dialect = cli
        .language
        .clone()
        .or_else(|| dialects::dialect_for_path(path).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_DIALECT.to_string());

    if let Some(dest) = &cli.translate {
        match translate(&source, &dialect, dest, registry) {
            Ok(text) => {
                println!("{}", text);
                return Ok(());
            }
            Err(e) => {
                eprintln!("Translation error: {}", e);
                process::exit(1);
            }
        }
    }

    let program = match load(&source, &dialect, registry) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error loading source: {}", e);
            process::exit(1);
        }
    };
    tracing::debug!(program = %program, "engine loaded");

    let mut input = match open_input(cli.input_file.as_deref(), cli.tui) {
        Ok(input) => input,
        Err(e) => {
            let file = cli.input_file.as_deref().unwrap_or(Path::new("-"));
            eprintln!("Error: Unable to open input '{}': {}", file.display(), e);
            process::exit(1);
        }
    };

    if cli.tui {
        let limit = cli.snapshot_limit.saturating_mul(BYTES_PER_MIB);
        eprintln!("Recording execution...");
        let trace = ExecutionTrace::record(program, &mut input, limit);
        eprintln!("Recorded {} snapshots.", trace.len());
        return run_tui(App::new(trace, dialect));
    }

    let stdout = io::stdout();
    let mut output = io::BufWriter::new(stdout.lock());
    let mut machine = TapeMachine::new(program);

    if let Err(fault) = machine.run(&mut input, &mut output) {
        let _ = output.flush();
        eprintln!();
        eprintln!("Run failed: {}", fault);
        process::exit(1);
    }

    Ok(())
}

/// Program input: the given file, else stdin. A TUI session on a terminal
/// gets no input since the debugger owns the keyboard.
fn open_input(file: Option<&Path>, tui: bool) -> io::Result<Box<dyn Read>> {
    let input: Box<dyn Read> = match file {
        Some(file) => Box::new(io::BufReader::new(fs::File::open(file)?)),
        None if tui && io::stdin().is_terminal() => Box::new(io::empty()),
        None => Box::new(io::stdin().lock()),
    };
    Ok(input)
}

fn run_tui(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
