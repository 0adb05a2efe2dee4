use clap::Parser; // for argument parsing
use std::io::{self, Write};

use tilerack::report;
use tilerack::Dictionary;
use tilerack::TileBag;

/// tilerack — find every dictionary word you can make from a rack of tiles
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the word list file (one word per line)
    #[arg(short, long)]
    wordlist: String,

    /// Number of hash buckets (pick a prime near the expected word count)
    #[arg(short, long, default_value_t = 150_001)]
    capacity: usize,

    /// Tile strings to look up before any random draws
    tiles: Vec<String>,

    /// Print the full hash table instead of just its statistics
    #[arg(short, long)]
    dump: bool,

    /// Number of random racks to draw and look up
    #[arg(short = 'n', long, default_value_t = 10)]
    draws: usize,

    /// Tiles per random rack
    #[arg(short, long, default_value_t = 7)]
    rack_size: usize,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("tilerack: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut dict = Dictionary::new(args.capacity)?;
    dict.load_from_path(&args.wordlist)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::dump_table(&dict, &mut out, !args.dump)?;

    // Fixed lookups from the command line first, then random draws.
    for tiles in &args.tiles {
        take_turn(&dict, tiles, &mut out)?;
    }

    let bag = TileBag::default();
    let mut rng = rand::thread_rng();
    for _ in 0..args.draws {
        let tiles = bag.draw(args.rack_size, &mut rng);
        report::announce_draw(&tiles, &mut out)?;
        take_turn(&dict, &tiles, &mut out)?;
    }
    Ok(())
}

/// Look up one rack against the dictionary and print the result.
fn take_turn<W: Write>(dict: &Dictionary, tiles: &str, out: &mut W) -> io::Result<()> {
    let words = dict.lookup(tiles);
    report::report_matches(tiles, &words, out)
}
