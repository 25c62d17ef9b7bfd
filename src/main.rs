use std::{
    fs::{self, File},
    io::{self, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use minimark::{
    converter::{read_input, ConvertOptions, Converter},
    error::ConvertError,
    lexer::tokenize,
    parser::parse,
    repl,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Convert a small Markdown dialect to HTML.
#[derive(Debug, Parser)]
#[command(name = "minimark", version)]
struct Cli {
    /// Markdown file to convert (stdin when omitted)
    input: Option<PathBuf>,

    /// Where to write the result (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with conversion options
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSS file inlined into the page
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Write only the converted blocks, without the page shell
    #[arg(long)]
    fragment: bool,

    /// Fail on unterminated spans and code blocks (html and ast output)
    #[arg(long)]
    strict: bool,

    #[arg(long, value_enum, default_value_t = Emit::Html)]
    emit: Emit,

    /// Convert stdin line by line interactively
    #[arg(long, conflicts_with_all = ["input", "output"])]
    repl: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    Html,
    Tokens,
    Ast,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    if cli.repl {
        return repl::start(io::stdin().lock(), io::stdout().lock())
            .context("interactive session failed");
    }

    let options = load_options(&cli)?;
    debug!(?options, "conversion options");

    let input = match &cli.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            read_input(BufReader::new(file))?
        }
        None => read_input(io::stdin().lock())?,
    };

    let output = emit_output(cli.emit, &options, &input)?;

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn emit_output(emit: Emit, options: &ConvertOptions, input: &str) -> anyhow::Result<String> {
    let output = match emit {
        Emit::Html => Converter::from_options(options).convert_str(input)?,
        Emit::Tokens => serde_json::to_string_pretty(&tokenize(input))? + "\n",
        Emit::Ast => {
            let (document, errors) = parse(input);
            if options.strict && !errors.is_empty() {
                return Err(ConvertError::Malformed(errors).into());
            }
            serde_json::to_string_pretty(&document)? + "\n"
        }
    };

    Ok(output)
}

// フラグは設定ファイルより優先する
fn load_options(cli: &Cli) -> anyhow::Result<ConvertOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ConvertOptions::default(),
    };

    if let Some(stylesheet) = &cli.stylesheet {
        options.stylesheet = stylesheet.clone();
    }
    options.fragment |= cli.fragment;
    options.strict |= cli.strict;

    Ok(options)
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "minimark=info",
        1 => "minimark=debug",
        _ => "minimark=trace",
    }
}
