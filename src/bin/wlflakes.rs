//! wlflakes - find flakes in diceware wordlists
//!
//! Scans generated lists for quality defects: entries colliding up to
//! case, non-ASCII terms and non-printable characters. Exits non-zero
//! when any finding is reported.

use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process;

use wordlist_gen::flakes::check;
use wordlist_gen::input::{read_lines_from, read_terms};
use wordlist_gen::report::{fail, init_logging};

/// Find flakes in diceware wordlists
#[derive(Parser, Debug)]
#[command(name = "wlflakes", version, about = "Find flakes in diceware wordlists")]
struct Args {
    /// Wordlist file(s) to check; `-` reads stdin
    #[arg(value_name = "LISTFILE", required = true)]
    listfile: Vec<PathBuf>,

    /// Be verbose (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    match run(&args) {
        Ok(0) => {}
        Ok(findings) => {
            eprintln!();
            eprintln!("{}", format!("{findings} flake(s) found").red());
            process::exit(1);
        }
        Err(e) => fail(e),
    }
}

fn run(args: &Args) -> anyhow::Result<usize> {
    let mut total = 0;
    for path in &args.listfile {
        let lines = if path == &PathBuf::from("-") {
            read_lines_from(std::io::stdin().lock())?
        } else {
            read_terms(std::slice::from_ref(path))?
        };
        log::info!("checking {} ({} lines)", path.display(), lines.len());

        let findings = check(lines.iter().map(String::as_str));
        for finding in &findings {
            println!("{}: {}", path.display(), finding);
        }
        total += findings.len();
    }
    Ok(total)
}
