use std::{
    env, fs,
    io::{self, BufRead},
    process::ExitCode,
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use prefixa::pipeline::run;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// prefixa evaluates prefix-notation arithmetic such as `sum 1 2 3` and
/// prints the equivalent infix code.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells prefixa to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Quiet mode prints only the compiled code and the value of each
    /// expression.
    #[arg(short, long)]
    quiet: bool,

    /// The expression, or the path to read with `--file`. Expressions are
    /// read from stdin when omitted.
    contents: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    initialize_logging()?;

    let args = Args::parse();

    let expressions = match (&args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(path).with_context(|| {
                             format!("Failed to read the input file '{path}'. Perhaps this file \
                                      does not exist?")
                         })?;
            expression_lines(script.lines())
        },
        (Some(expression), false) => vec![expression.clone()],
        (None, _) => {
            let input = io::stdin().lock()
                                   .lines()
                                   .collect::<Result<Vec<_>, _>>()
                                   .context("Failed to read expressions from stdin")?;
            expression_lines(input.iter().map(String::as_str))
        },
    };
    debug!(count = expressions.len(), "Read expressions");

    let mut failed = false;
    for (index, expression) in expressions.iter().enumerate() {
        let report = run(expression);

        if args.quiet {
            println!("{}", report.summary());
        } else {
            if index > 0 {
                println!();
            }
            println!("{report}");
        }

        failed |= !report.is_success();
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Keeps lines holding an expression, skipping blank lines and `#` comments.
fn expression_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines.map(str::trim)
         .filter(|line| !line.is_empty() && !line.starts_with('#'))
         .map(str::to_string)
         .collect()
}

fn initialize_logging() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr)
                          .with_filter(EnvFilter::from_str(&env_filter)?))
        .init();

    Ok(())
}
