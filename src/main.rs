//! Wordlist Gen - diceware-style wordlist generation
//!
//! Main entry point for the command-line application.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordlist_gen::cli::Args;
use wordlist_gen::generate::{generate, GeneratorConfig};
use wordlist_gen::input::{base_terms, read_terms};
use wordlist_gen::output::Sink;
use wordlist_gen::report::{fail, init_logging};

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        fail(e);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.numbered && args.sides < 2 {
        anyhow::bail!("--sides must be at least 2");
    }

    let mut terms = read_terms(&args.dictfile)?;
    terms.extend(base_terms(args.use_kit, args.use_416).map(String::from));
    log::info!("read {} candidate terms", terms.len());

    let config = GeneratorConfig {
        length: args.length,
        numbered: args.numbered,
        sides: args.sides,
        allowed_chars: args.charset(),
        allow_uppercase: args.allow_uppercase,
        prefix: args.prefix.into(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let lines = generate(&config, terms, &mut rng)?;

    let mut sink = Sink::create(args.output.as_deref())?;
    let written = sink.write_lines(&lines)?;
    log::info!("wrote {} lines to {}", written, sink.describe());

    Ok(())
}
