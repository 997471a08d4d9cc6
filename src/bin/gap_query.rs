//! Cuts a segment `[0, L]` at the points it is given and answers, for a query point, the
//! length of the piece that contains it.
//!
//! Input is whitespace separated: `L Q`, then `Q` queries `c x`. `c = 1` cuts at `x`,
//! `c = 2` prints the length of the piece around `x`.

use anyhow::{bail, Context, Result};
use bucketset::SortedSet;
use clap::Parser;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gap-query", version, about)]
struct Args {
    /// Read queries from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,
}

struct Tokens<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace(),
        }
    }

    fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self
            .inner
            .next()
            .with_context(|| format!("missing {what}"))?;

        token
            .parse()
            .with_context(|| format!("invalid {what}: {token:?}"))
    }
}

fn run(input: &str, out: &mut impl Write) -> Result<()> {
    let mut tokens = Tokens::new(input);
    let length = tokens.next_int("segment length")?;
    // A negative count answers nothing.
    let queries = usize::try_from(tokens.next_int("query count")?).unwrap_or(0);

    let mut cuts = SortedSet::new();
    for query in 1..=queries {
        let command = tokens.next_int("command")?;
        let point = tokens.next_int("query point")?;
        match command {
            1 => {
                cuts.insert(point);
            }
            2 => {
                let right = cuts.gt(&point).copied().unwrap_or(length);
                let left = cuts.lt(&point).copied().unwrap_or(0);
                writeln!(out, "{}", right - left)?;
            }
            other => bail!("query {query}: unknown command {other}"),
        }
    }

    tracing::debug!(
        queries,
        cuts = cuts.len(),
        buckets = cuts.bucket_count(),
        "answered all queries"
    );

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading standard input")?;
            buffer
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    run(&input, &mut out)?;
    out.flush().context("flushing output")?;

    Ok(())
}
