//! Command-line front end.
//!
//! ```text
//! kcount 'aa.a*.' a 4        # Yes
//! echo 'aa.a*. a 1' | kcount # No
//! ```

use std::io::{self, BufRead};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};

use regex_kcount::{Alphabet, Evaluator};

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Decide whether a postfix regular expression admits exactly k occurrences of a symbol")]
struct Cli {
    /// Postfix expression. If omitted, `<expression> <symbol> <k>` is read from stdin.
    #[arg(value_name = "EXPR", requires_all = ["symbol", "k"])]
    expr: Option<String>,

    /// Tracked symbol.
    #[arg(value_name = "SYMBOL")]
    symbol: Option<char>,

    /// Number of occurrences.
    #[arg(value_name = "INT")]
    k: Option<u64>,

    /// Literal letters.
    #[arg(long, value_name = "STR", default_value = "abc")]
    letters: String,

    /// Empty-string literal.
    #[arg(long, value_name = "CHAR", default_value = "1")]
    empty: char,

    /// Print the summary computed at each step.
    #[arg(long)]
    explain: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Splits a line of the form `<expression> <symbol> <k>`.
///
/// The expression is everything before the last two fields, so it may itself
/// contain whitespace.
fn parse_line(line: &str) -> color_eyre::Result<(String, char, u64)> {
    let usage = || eyre!("expected `<expression> <symbol> <k>`, got {:?}", line);

    let line = line.trim_end();
    let (rest, k) = line.rsplit_once(char::is_whitespace).ok_or_else(usage)?;
    let (expr, symbol) = rest.trim_end().rsplit_once(char::is_whitespace).ok_or_else(usage)?;

    let mut chars = symbol.chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(eyre!("symbol must be a single character, got {:?}", symbol)),
    };
    let k = k.parse::<u64>().wrap_err_with(|| format!("invalid k: {:?}", k))?;

    Ok((expr.to_string(), symbol, k))
}

fn read_query() -> color_eyre::Result<(String, char, u64)> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).wrap_err("failed to read from stdin")?;
    parse_line(&line)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

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

    let (expr, symbol, k) = match (args.expr, args.symbol, args.k) {
        (Some(expr), Some(symbol), Some(k)) => (expr, symbol, k),
        _ => read_query()?,
    };
    log::info!("expr = {:?}, symbol = {:?}, k = {}", expr, symbol, k);

    let alphabet = Alphabet::new(symbol).with_letters(&args.letters).with_empty(args.empty);
    let evaluator = Evaluator::new(alphabet);

    let (summary, steps) = evaluator
        .trace(&expr)
        .wrap_err_with(|| format!("invalid expression {:?}", expr))?;

    if args.explain {
        for step in &steps {
            println!("{:>4}  {}  {}", step.position, step.symbol, step.result);
        }
    }
    log::info!("summary = {}", summary);

    println!("{}", if summary.contains(k) { "Yes" } else { "No" });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let (expr, symbol, k) = parse_line("ab+c.* a 5\n").unwrap();
        assert_eq!(expr, "ab+c.*");
        assert_eq!(symbol, 'a');
        assert_eq!(k, 5);
    }

    #[test]
    fn test_parse_line_expression_with_spaces() {
        let (expr, symbol, k) = parse_line("a b + b 0").unwrap();
        assert_eq!(expr, "a b +");
        assert_eq!(symbol, 'b');
        assert_eq!(k, 0);
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("a 1").is_err());
        assert!(parse_line("aa. ab 1").is_err());
        assert!(parse_line("aa. a -1").is_err());
        assert!(parse_line("").is_err());
    }

    #[test]
    fn test_cli_args() {
        let cli = Cli::try_parse_from(["kcount", "aa.", "a", "2", "--explain"]).unwrap();
        assert_eq!(cli.expr.as_deref(), Some("aa."));
        assert_eq!(cli.symbol, Some('a'));
        assert_eq!(cli.k, Some(2));
        assert!(cli.explain);
        assert_eq!(cli.letters, "abc");

        let cli = Cli::try_parse_from(["kcount", "-vv"]).unwrap();
        assert!(cli.expr.is_none());
        assert_eq!(cli.verbose, 2);

        assert!(Cli::try_parse_from(["kcount", "aa."]).is_err());
    }
}
