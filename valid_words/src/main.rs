mod dict;
mod output;
mod search;
mod trie;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};

use output::Pager;
use trie::WordTrie;

/// Find every dictionary word that can be spelled from a set of letters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Dictionary file, one word per line. Prompts with a menu if omitted.
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Directory listed by the dictionary menu.
    #[arg(long, default_value = dict::DEFAULT_DICT_DIR)]
    dict_dir: PathBuf,

    /// Letters to spell words from. Prompted for if omitted.
    #[arg(short, long)]
    letters: Option<String>,

    /// Print the prefix tree as JSON before searching.
    #[arg(short = 't', long)]
    dump_trie: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let dict_path = match cli.dict {
        Some(path) => path,
        None => {
            let files = dict::list_dicts(&cli.dict_dir)?;
            dict::select_dict(&files, &mut input, &mut out)?
        }
    };
    let words = dict::load_dict(&dict_path)?;

    let trie = WordTrie::from_words(&words);
    if trie.is_empty() {
        warn!(path = %dict_path.display(), "dictionary has no words");
    }
    info!(nodes = trie.node_count(), "built prefix tree");

    if cli.dump_trie {
        let json = serde_json::to_string_pretty(&trie).context("Failed to serialize trie")?;
        writeln!(out, "{}", json)?;
    }

    let letters: Vec<char> = match cli.letters {
        Some(letters) => letters.trim().chars().collect(),
        None => read_letters(&mut input, &mut out)?,
    };

    let max_perms = search::max_perms(letters.len());
    let found = search::narrow_perms(&letters, &trie, &words);

    writeln!(out, "{}", output::summary(found.len(), max_perms, &letters))?;
    Pager::new(output::sort_results(found)).run(&mut input, &mut out)?;

    Ok(())
}

fn read_letters<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<char>> {
    write!(out, "Enter character permutations: ")?;
    out.flush()?;

    let mut letters = String::new();
    if input.read_line(&mut letters)? == 0 {
        return Err(anyhow!("No letters entered"));
    }
    Ok(letters.trim().chars().collect())
}
