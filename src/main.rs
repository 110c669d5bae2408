use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hcertdec::{
    decode, to_text, DateFormatter, LocalizedFormatter, Presenter, ReferenceData, Zone,
};

/// Decode EU Digital COVID Certificates, one `HC1:` token per line.
#[derive(Parser, Debug)]
#[command(name = "hcertdec", version, about)]
struct Cli {
    /// File to read tokens from (defaults to standard input).
    input: Option<PathBuf>,

    /// Locale used for day and month names.
    #[arg(long, default_value = LocalizedFormatter::DEFAULT_LOCALE)]
    locale: String,

    /// strftime pattern for issuance and expiry dates.
    #[arg(long, default_value = LocalizedFormatter::DEFAULT_PATTERN)]
    date_format: String,

    /// Show dates in UTC instead of local time.
    #[arg(long)]
    utc: bool,

    /// JSON file replacing the built-in lookup tables and labels.
    #[arg(long, value_name = "FILE")]
    reference: Option<PathBuf>,

    /// Print the built-in reference data as JSON and exit.
    #[arg(long)]
    dump_reference: bool,

    /// Print the decoded claims instead of rendering them.
    #[arg(long)]
    raw: bool,
}

fn process<F: DateFormatter>(
    presenter: &Presenter<F>,
    token: &str,
    raw: bool,
) -> hcertdec::Result<String> {
    let attributes = decode(token)?;
    if raw {
        return Ok(format!("{:#?}", attributes));
    }
    Ok(to_text(&presenter.render(&attributes)?))
}

/// Decodes and renders every non-blank line of `input`, reporting failing
/// lines and carrying on. Returns the number of failed lines.
fn run<F, R, W>(presenter: &Presenter<F>, input: R, out: &mut W, raw: bool) -> Result<usize>
where
    F: DateFormatter,
    R: BufRead,
    W: Write,
{
    let mut failures = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading input")?;
        if line.is_empty() {
            continue;
        }

        match process(presenter, &line, raw) {
            Ok(text) => writeln!(out, "{}", text)?,
            Err(err) => {
                failures += 1;
                warn!(line = index + 1, kind = ?err.kind(), "{}", err);
            }
        }
    }
    out.flush()?;

    Ok(failures)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if cli.dump_reference {
        println!("{}", ReferenceData::default().to_json_pretty()?);
        return Ok(());
    }

    let reference = match &cli.reference {
        Some(path) => ReferenceData::from_path(path)
            .with_context(|| format!("loading reference data from {}", path.display()))?,
        None => ReferenceData::default(),
    };
    let zone = if cli.utc { Zone::Utc } else { Zone::Local };
    let formatter = LocalizedFormatter::new(&cli.locale, &cli.date_format, zone)?;
    let presenter = Presenter::new(reference, formatter)?;

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let failures = run(&presenter, input, &mut out, cli.raw)?;

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}
