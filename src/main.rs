use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use invindex::{build_inverted_index, load_documents, tokenize, StorageStrategy, Strategy};

#[derive(Parser)]
#[command(name = "invindex")]
#[command(about = "Build and query an inverted index over a line-oriented dataset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an inverted index and save it
    Build {
        /// Dataset with one `<id> <content>` document per line
        #[arg(long, default_value = "sample.txt")]
        dataset: PathBuf,

        /// Where to save the inverted index
        #[arg(long)]
        output: PathBuf,

        /// Storage strategy
        #[arg(long, value_enum, default_value_t = Strategy::Binary)]
        strategy: Strategy,
    },
    /// Query a saved inverted index
    Query {
        /// Path to the inverted index
        #[arg(long)]
        index: PathBuf,

        /// Storage strategy the index was saved with
        #[arg(long, value_enum, default_value_t = Strategy::Binary)]
        strategy: Strategy,

        /// Words that must all match; repeat the flag to run several queries
        #[arg(long = "query", required = true, num_args = 1.., action = ArgAction::Append)]
        queries: Vec<Vec<String>>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Commands::Build {
            dataset,
            output,
            strategy,
        } => {
            let documents = load_documents(&dataset)
                .with_context(|| format!("Can't load the dataset {}", dataset.display()))?;
            let index = build_inverted_index(&documents);
            strategy
                .dump_to_path(&index, &output)
                .with_context(|| format!("Can't save the index to {}", output.display()))?;
            println!("Inverted index built and saved to {}", output.display());
        }
        Commands::Query {
            index,
            strategy,
            queries,
        } => {
            let inverted_index = strategy
                .load_from_path(&index)
                .with_context(|| format!("Can't load the {strategy} index {}", index.display()))?;
            for group in queries {
                // a quoted group like `--query "a b"` is split as well
                let terms: Vec<_> = group.iter().flat_map(|words| tokenize(words)).collect();
                let docids = inverted_index.query(terms.as_slice());
                log::debug!("{terms:?} matched {} documents", docids.len());
                println!("{}", docids.join(","));
            }
        }
    }

    Ok(())
}
