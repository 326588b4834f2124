use std::{io::Write, process};

use clap::Parser;
use fol_unify::{mismatch, parse_expression, unify, ParseError, Term};
use log::trace;

/// Parse two terms and print their first mismatch and most general unifier.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Left-hand term, e.g. `Q(y, G(A, B))`
    #[arg(requires = "right")]
    left: Option<String>,
    /// Right-hand term, e.g. `Q(G(x, x), z)`
    right: Option<String>,
}

/// The AIMA unification exercises.
const EXAMPLES: [(&str, &str); 4] = [
    ("P(A,B,B)", "P(x,y,z)"),
    ("Q(y,G(A,B))", "Q(G(x,x),z)"),
    ("O(F(y),y)", "O(F(x),J)"),
    ("K(F(y),y)", "K(x,x)"),
];

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .format(|buf, record| {
            let str = record.args().to_string().replace("\n", "\n\t");
            writeln!(
                buf,
                "[{}] in {}:{}\n\t{}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                str
            )
        })
        .parse_default_env()
        .init();

    let pairs = match (&args.left, &args.right) {
        (Some(left), Some(right)) => vec![(left.as_str(), right.as_str())],
        _ => EXAMPLES.to_vec(),
    };

    for (left, right) in pairs {
        if let Err(e) = run(left, right) {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}

fn run(left: &str, right: &str) -> Result<(), ParseError> {
    trace!("unifying `{left}` with `{right}`");
    let left: Term = parse_expression(left)?;
    let right: Term = parse_expression(right)?;

    println!("{left}  ~  {right}");
    match mismatch(&left, &right) {
        Some((l, r)) => println!("  mismatch: ({l}, {r})"),
        None => println!("  mismatch: none"),
    }
    match unify(&left, &right) {
        Some(u) => println!("  unifier:  {u}"),
        None => println!("  unifier:  no unifier"),
    }
    Ok(())
}
