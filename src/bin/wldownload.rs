//! wldownload - download and extract remote wordlists
//!
//! Fetches a combined Android keyboard wordlist, decompresses it and
//! prints the plain terms, ready to be piped into wordlist-gen. With
//! `--raw` the compressed payload is saved unmodified instead.

use bytesize::ByteSize;
use clap::Parser;
use std::path::PathBuf;

use wordlist_gen::download::{OffensiveFilter, RemoteWordlist};
use wordlist_gen::output::Sink;
use wordlist_gen::report::{create_spinner, fail, init_logging, print_success};

/// Download and extract remote wordlists
#[derive(Parser, Debug)]
#[command(
    name = "wldownload",
    version,
    about = "Download and extract remote wordlists"
)]
struct Args {
    /// Write output to this file (default: stdout, or the upstream
    /// basename with --raw)
    #[arg(short, long, value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Language code of the list to fetch
    #[arg(long, value_name = "CODE", default_value = "en")]
    lang: String,

    /// Save the compressed payload unmodified instead of extracting
    #[arg(long)]
    raw: bool,

    /// Drop words flagged possibly offensive upstream
    #[arg(long, conflicts_with = "offensive_only")]
    no_offensive: bool,

    /// Keep only words flagged possibly offensive upstream
    #[arg(long)]
    offensive_only: bool,

    /// Be verbose (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn offensive_filter(&self) -> OffensiveFilter {
        if self.no_offensive {
            OffensiveFilter::Drop
        } else if self.offensive_only {
            OffensiveFilter::Only
        } else {
            OffensiveFilter::Keep
        }
    }
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        fail(e);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let spinner = create_spinner(&format!(
        "Fetching {}...",
        RemoteWordlist::basename(&args.lang)
    ));
    let wordlist = RemoteWordlist::fetch(&args.lang)?;
    spinner.finish_and_clear();
    print_success(&format!(
        "Downloaded {} ({})",
        RemoteWordlist::basename(&args.lang),
        ByteSize(wordlist.gz_data().len() as u64)
    ));

    if args.raw {
        let path = args
            .outfile
            .unwrap_or_else(|| PathBuf::from(RemoteWordlist::basename(&args.lang)));
        wordlist.save(&path)?;
        print_success(&format!("Saved raw archive to {}", path.display()));
        return Ok(());
    }

    let text = wordlist.decompress()?;
    let words = RemoteWordlist::words(&text, args.offensive_filter());
    log::info!("extracted {} words", words.len());

    let mut sink = Sink::create(args.outfile.as_deref())?;
    let written = sink.write_lines(&words)?;
    print_success(&format!("Wrote {} words to {}", written, sink.describe()));

    Ok(())
}
