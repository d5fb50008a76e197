//! Train an ID3 tree on one file and report its error rate on another
//!
//! Usage: id3-eval SPECT.train SPECT.test

use clap::Parser;
use log::info;
use rusty_id3::data::dataset::Dataset;
use rusty_id3::data::reader::{read_dataset, ReaderParams, TokenPolicy};
use rusty_id3::errors::Id3Error;
use rusty_id3::metrics::evaluation::{Evaluation, NoMatchPolicy};
use rusty_id3::trees::classifier::DecisionTreeClassifier;
use rusty_id3::trees::params::AttributeIndexing;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Train an ID3 decision tree and report its test error rate")]
struct Args {
    /// Training data, one example per line with the class label last
    train: PathBuf,

    /// Test data; when omitted the training data is split
    test: Option<PathBuf>,

    /// Fraction of rows used for training when no test file is given
    #[arg(long, default_value = "0.75")]
    split: f64,

    /// Seed for the train/test shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Field delimiter, fields are additionally split on whitespace
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Warn about non-digit characters instead of rejecting the token
    #[arg(long)]
    lenient: bool,

    /// Column scoring each candidate attribute: by-id or by-position
    #[arg(long, default_value = "by-id")]
    indexing: AttributeIndexing,

    /// Count test rows with unseen attribute values as wrong instead of aborting
    #[arg(long)]
    count_unmatched: bool,

    /// Print the induced tree
    #[arg(long)]
    print_tree: bool,
}

fn run(args: &Args) -> Result<Evaluation, Id3Error> {
    let mut params = ReaderParams::new();
    params.set_delimiter(args.delimiter)?;
    if args.lenient {
        params.set_token_policy(TokenPolicy::Lenient);
    }

    let dataset: Dataset<u32> = read_dataset(&args.train, &params)?;
    let (train, test) = match &args.test {
        Some(path) => (dataset, read_dataset(path, &params)?),
        None => dataset.train_test_split(args.split, args.seed)?,
    };

    let mut classifier = DecisionTreeClassifier::with_params(Some(args.indexing));
    info!("{}", classifier.fit(&train)?);
    if args.print_tree {
        if let Some(root) = classifier.root() {
            print!("{}", root);
        }
    }

    let policy = if args.count_unmatched {
        NoMatchPolicy::CountAsWrong
    } else {
        NoMatchPolicy::Abort
    };
    classifier.evaluate(&test, policy)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rusty_id3=info,id3_eval=info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(evaluation) => {
            println!("{}", evaluation);
            println!("Returned value: {}", evaluation.error_rate);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            println!("Returned value: -1");
            ExitCode::FAILURE
        }
    }
}
