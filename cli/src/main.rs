//! The fibspiral CLI tool

use std::{io::Write, path::PathBuf};

use clap::Parser;
use env_logger::fmt::Color;
use env_logger::{Builder, Target};
use itertools::Itertools;
use log::{Level, LevelFilter};
use num_bigint::BigUint;

use fibspiral_geometry::fib_sequence;
use fibspiral_render::{plot_spiral, Canvas, Figure, PlotOptions};

const DEFAULT_OUTPUT: &str = "output/spiral.png";

#[derive(Parser)]
#[command(name = "fibspiral", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// How many Fibonacci numbers to print
    #[arg(short, long, allow_negative_numbers = true)]
    #[arg(default_value_t = 20)]
    numbers: i64,

    /// Quarter-turns of the spiral to draw
    #[arg(long, allow_negative_numbers = true)]
    #[arg(default_value_t = 12)]
    turns: i64,

    /// Overlay Fibonacci squares and quarter-circle arcs
    #[arg(long)]
    #[arg(default_value_t = false)]
    squares: bool,

    /// Save the figure to the output path
    #[arg(long)]
    #[arg(default_value_t = false)]
    save: bool,

    /// Where `--save` writes the figure
    #[arg(short, long)]
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Do not show a window for the figure
    #[arg(long)]
    #[arg(default_value_t = false)]
    no_show: bool,
}

/// A run of the tool with out-of-range arguments clamped to the smallest
/// sensible values.
#[derive(Debug, PartialEq)]
struct Command {
    numbers: usize,
    turns: u32,
    squares: bool,
    save_path: Option<PathBuf>,
    show: bool,
}

impl From<Cli> for Command {
    fn from(cli: Cli) -> Self {
        Command {
            numbers: usize::try_from(cli.numbers.max(1)).unwrap_or(usize::MAX),
            turns: u32::try_from(cli.turns.max(1)).unwrap_or(u32::MAX),
            squares: cli.squares,
            save_path: cli.save.then_some(cli.output),
            show: !cli.no_show,
        }
    }
}

fn main() {
    let args = Cli::parse();

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => {
                    style.set_color(Color::Red).set_bold(true);
                }
                Level::Warn => {
                    style.set_color(Color::Yellow);
                }
                _ => {}
            }
            writeln!(buf, "{}", style.value(record.args()))
        })
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
    } else {
        run_command(args.into());
    }
}

#[allow(clippy::print_stderr)]
fn run_command(command: Command) {
    if let Err(error) = run(command) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    log::debug!("{command:?}");

    let seq = fib_sequence::<BigUint>(command.numbers as i64);
    print_sequence(&seq);

    let mut figure = Figure::default();
    plot_spiral(
        &mut figure,
        &PlotOptions {
            n_numbers: command.numbers,
            quarter_turns: command.turns,
            show_squares: command.squares,
            ..Default::default()
        },
    );

    if let Some(path) = &command.save_path {
        figure
            .save(path)
            .map_err(|e| format!("Failed to save {}: {e}", path.display()))?;
    }
    if command.show {
        figure
            .show()
            .map_err(|e| format!("Failed to show the figure: {e}"))?;
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_sequence(seq: &[BigUint]) {
    println!("Fibonacci sequence (first {}):", seq.len());
    println!("{}", seq.iter().join(", "));
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("fibspiral").chain(args.iter().copied()))
            .unwrap()
            .into()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        assert_eq!(
            parse(&[]),
            Command {
                numbers: 20,
                turns: 12,
                squares: false,
                save_path: None,
                show: true,
            }
        );
    }

    #[test]
    fn flags() {
        assert_eq!(
            parse(&["-n", "7", "--turns", "3", "--squares", "--save", "--no-show"]),
            Command {
                numbers: 7,
                turns: 3,
                squares: true,
                save_path: Some(PathBuf::from(DEFAULT_OUTPUT)),
                show: false,
            }
        );
        assert_eq!(
            parse(&["--save", "--output", "out/x.png"]).save_path,
            Some(PathBuf::from("out/x.png"))
        );
    }

    #[test]
    fn degenerate_values_are_clamped() {
        let command = parse(&["--numbers", "-4", "--turns", "0"]);
        assert_eq!(command.numbers, 1);
        assert_eq!(command.turns, 1);
    }

    #[test]
    fn save_without_showing() {
        let output_dir = tempfile::tempdir().unwrap();
        let path = output_dir.path().join("spiral.png");
        run(Command {
            numbers: 6,
            turns: 4,
            squares: true,
            save_path: Some(path.clone()),
            show: false,
        })
        .unwrap();
        assert!(path.exists());
    }
}
