use std::{fs::read_to_string, path::PathBuf, process::ExitCode, sync::Once, time::Instant};

use clap::Parser;
use lexer::{display_error, Lexer};
use tracing::debug;

/// Tokenize a declaration source file and print its tokens.
#[derive(Parser, Debug)]
#[command(name = "lexer", version, about)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Only print the number of tokens produced
    #[arg(short, long)]
    quiet: bool,
}

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=lexer=debug` or `RUST_LOG=lexer=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let mut lexer = Lexer::with_source(source, Some(file_name));

    let tokens = match lexer.scan() {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, lexer.source().unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };

    debug!(elapsed = ?start.elapsed(), "tokenized");

    if cli.quiet {
        println!("{}", tokens.len());
    } else {
        for token in &tokens {
            token.debug();
        }
    }

    ExitCode::SUCCESS
}
