//! Command-line front end: print the truth table of each expression given.
//!
//! Run with: `cargo run -- "a and (b or not c)"`

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use truth_table::render::{RenderConfig, TableFormat};
use truth_table::table::{TableConfig, TruthTable, MAX_VARS_CEILING};

#[derive(Parser)]
#[command(name = "truth-table")]
#[command(about = "Print truth tables of propositional-logic expressions")]
struct Args {
    /// Expressions to tabulate, e.g. "p implies (q or not p)"
    #[arg(required = true)]
    exprs: Vec<String>,

    /// Output format: text, html, or csv
    #[arg(short, long, default_value = "text")]
    format: TableFormat,

    /// Print 1/0 instead of true/false
    #[arg(short, long)]
    numeric: bool,

    /// Maximum number of distinct variables per expression (at most 30)
    #[arg(
        long,
        default_value_t = TableConfig::default().max_vars as u64,
        value_parser = clap::value_parser!(u64).range(0..=MAX_VARS_CEILING as u64),
    )]
    max_vars: u64,

    /// Maximum nesting depth per expression
    #[arg(long, default_value_t = TableConfig::default().max_depth)]
    max_depth: usize,

    /// Print whether each expression is a tautology, contradiction, or satisfiable
    #[arg(short, long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = TableConfig::new(args.max_vars as usize, args.max_depth);
    let render_config = if args.numeric {
        RenderConfig::numeric()
    } else {
        RenderConfig::default()
    };

    for (i, expr) in args.exprs.iter().enumerate() {
        let table = TruthTable::with_config(expr, &config)
            .wrap_err_with(|| format!("Cannot tabulate {:?}", expr))?;
        info!("{:?}: {} variables, {} rows", expr, table.vars().len(), table.len());

        if i > 0 {
            println!();
        }
        print!("{}", table.render_with_config(args.format, &render_config)?);

        if args.summary {
            let verdict = if table.is_tautology() {
                "tautology"
            } else if table.is_contradiction() {
                "contradiction"
            } else {
                "satisfiable"
            };
            println!("{} ({} of {} rows true)", verdict, table.count_true(), table.len());
        }
    }

    Ok(())
}
