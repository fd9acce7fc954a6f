use clap::{Parser as ClapParser, Subcommand};
use sift_query::cli::{self, CliError, FilterOptions, TestOutcome};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - MongoDB-style queries over JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the documents that match a query
    Filter {
        /// The JSON query
        query: String,

        /// JSON documents (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Treat queries nested deeper than this as non-matching
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Test one document; exits 0 on match, 2 otherwise
    Test {
        /// The JSON query
        query: String,

        /// JSON document (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Treat queries nested deeper than this as non-matching
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List the query operators
    Ops,

    /// Show documentation for one operator
    Op {
        /// Operator name, with or without the leading $
        name: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Filter {
            query,
            input,
            pretty,
            max_depth,
        } => read_input(input).and_then(|input| {
            run_filter(FilterOptions {
                query,
                input,
                pretty,
                max_depth,
            })
        }),
        Commands::Test {
            query,
            input,
            max_depth,
        } => read_input(input).and_then(|input| {
            run_test(FilterOptions {
                query,
                input,
                pretty: false,
                max_depth,
            })
        }),
        Commands::Ops => {
            print!("{}", cli::get_operators_overview());
            Ok(())
        }
        Commands::Op { name } => cli::get_operator_doc(&name).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_filter(options: FilterOptions) -> Result<(), CliError> {
    let output = cli::execute_filter(&options)?;
    let json = if options.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);
    Ok(())
}

fn run_test(options: FilterOptions) -> Result<(), CliError> {
    let outcome = cli::execute_test(&options)?;
    println!("{}", outcome.as_str());
    if outcome == TestOutcome::NoMatch {
        std::process::exit(2);
    }
    Ok(())
}
