use {
    crate::common::{debug_println, DEBUG},
    anyhow::Context,
    clap::{Parser, Subcommand},
    primality::report::{self, DEFAULT_RANGE},
    std::{io::Write, ops::Range, path::PathBuf, sync::atomic::Ordering},
};

#[derive(Debug, Parser)]
pub struct Cli {
    /// Classify 1 through 19 when no subcommand is given
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a single number
    Check {
        #[arg(allow_negative_numbers = true)]
        num: i64,
    },
    /// Classify every number in a half-open range
    Range {
        #[command(flatten)]
        range_options: RangeOptions,
    },
}

#[derive(Debug, Parser)]
struct RangeOptions {
    /// First number to classify
    #[arg(long, default_value_t = DEFAULT_RANGE.start, allow_negative_numbers = true)]
    start: i64,

    /// One past the last number to classify
    #[arg(long, default_value_t = DEFAULT_RANGE.end, allow_negative_numbers = true)]
    end: i64,

    /// Output file for the report [leave unspecified for stdout]
    #[arg(short)]
    output_path: Option<PathBuf>,
}

impl RangeOptions {
    fn range(&self) -> anyhow::Result<Range<i64>> {
        anyhow::ensure!(
            self.start <= self.end,
            "range start {} is greater than range end {}",
            self.start,
            self.end
        );
        Ok(self.start..self.end)
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_println!("{cli:#?}");
    match cli.command {
        None => print_report(DEFAULT_RANGE),
        Some(Command::Check { num }) => {
            println!("{}", report::classify(num));
            Ok(())
        }
        Some(Command::Range { range_options }) => {
            let range = range_options.range()?;
            debug_println!("classifying {range:?}");
            match range_options.output_path {
                Some(output_path) => {
                    let mut file = std::fs::File::create(&output_path)
                        .with_context(|| format!("failed to create {output_path:?}"))?;
                    report::write_report(range, &mut file)
                        .with_context(|| format!("failed to write {output_path:?}"))
                }
                None => print_report(range),
            }
        }
    }
}

fn print_report(range: Range<i64>) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    report::write_report(range, &mut stdout).context("failed to write to stdout")?;
    stdout.flush()?;
    Ok(())
}
