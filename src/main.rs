use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use cyclix::cyclic::{random_message, ExhaustiveSearch, FactorizationSearch};
use cyclix::error::CodeResult;
use cyclix::{CodeError, CodeParameters, EncodingReport, GeneratorSearch, Message, SearchConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(
    name = "cyclix",
    version,
    about = "Find the generator polynomial of a binary (n, k) cyclic code and encode a message with it"
)]
#[command(group(ArgGroup::new("input").required(true).args(["message", "random"])))]
struct Args {
    /// Codeword length n
    n: String,

    /// Message length k
    k: String,

    /// Message of exactly k bits, e.g. 1010
    message: Option<String>,

    /// Encode a random k-bit message instead
    #[arg(long)]
    random: bool,

    /// Seed for --random, for reproducible output
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Search by factoring x^n - 1 instead of trying every candidate
    #[arg(long)]
    factor: bool,

    /// Search configuration as JSON; missing fields take their defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Largest n - k the exhaustive search will attempt
    #[arg(long)]
    max_redundancy: Option<usize>,

    /// Largest trial divisor degree the factoring search will reach
    #[arg(long)]
    max_factor_degree: Option<usize>,

    /// Cap on the number of candidate divisions
    #[arg(long)]
    max_candidates: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log search progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_friendly_message());
            if let Some(hint) = e.suggested_remediation() {
                eprintln!("Hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &Path) -> CodeResult<SearchConfig> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| CodeError::ConfigError(format!("cannot read {}: {}", path.display(), e)))?;
    SearchConfig::from_json(&json)
}

fn search_config(args: &Args) -> CodeResult<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SearchConfig::default(),
    };
    if let Some(max_redundancy) = args.max_redundancy {
        config = config.with_max_redundancy(max_redundancy);
    }
    if let Some(max_factor_degree) = args.max_factor_degree {
        config = config.with_max_factor_degree(max_factor_degree);
    }
    if let Some(max_candidates) = args.max_candidates {
        config = config.with_max_candidates(max_candidates);
    }
    Ok(config)
}

fn run(args: &Args) -> CodeResult<()> {
    let params = CodeParameters::parse(&args.n, &args.k)?;

    let message = match &args.message {
        Some(bits) => Message::new(bits, params.k())?,
        None => match args.seed {
            Some(seed) => random_message(&mut ChaCha8Rng::seed_from_u64(seed), params.k()),
            None => random_message(&mut rand::thread_rng(), params.k()),
        },
    };

    let config = search_config(args)?;
    let search: Box<dyn GeneratorSearch> = if args.factor {
        Box::new(FactorizationSearch::new(config))
    } else {
        Box::new(ExhaustiveSearch::new(config))
    };
    let report = cyclix::encode_with(search.as_ref(), params.n(), params.k(), message.as_str())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &EncodingReport) {
    println!("Code parameters: {}", report.parameters);
    println!("Generator Polynomial: {}", report.generator);
    println!("Generator bits: {}", report.generator_bits);
    println!("Message: {}", report.message);
    println!("Encoded Codeword: {}", report.codeword);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("cyclix").chain(argv.iter().copied()))
    }

    #[test]
    fn test_message_and_flags() {
        let args = parse(&["7", "4", "1010", "--json", "--factor"]).unwrap();
        assert_eq!(args.message.as_deref(), Some("1010"));
        assert!(args.json && args.factor && !args.random);
        assert!(!args.verbose);

        let args = parse(&["7", "4", "--random", "-v"]).unwrap();
        assert!(args.verbose && args.random);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = parse(&["7", "4", "1010", "--jsn"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_message_and_random_are_exclusive() {
        let err = parse(&["7", "4", "1010", "--random"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["7", "4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_seed_needs_random_and_a_value() {
        let err = parse(&["7", "4", "1010", "--seed", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        assert!(parse(&["7", "4", "--random", "--seed", "--json"]).is_err());

        let args = parse(&["7", "4", "--random", "--seed", "3"]).unwrap();
        assert_eq!(args.seed, Some(3));
    }

    #[test]
    fn test_budget_flags_override_defaults() {
        let args = parse(&[
            "15",
            "7",
            "--random",
            "--max-redundancy",
            "4",
            "--max-candidates",
            "10",
        ])
        .unwrap();
        let config = search_config(&args).unwrap();
        assert_eq!(config.max_redundancy, 4);
        assert_eq!(config.max_candidates, Some(10));

        let err = run(&args).unwrap_err();
        assert_eq!(err.error_type(), "SearchBudgetExceeded");
    }

    #[test]
    fn test_config_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("cyclix-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"max_redundancy": 2}"#).unwrap();

        let args = parse(&["7", "4", "1010", "--config", path.to_str().unwrap()]).unwrap();
        let config = search_config(&args).unwrap();
        assert_eq!(config.max_redundancy, 2);
        assert_eq!(run(&args).unwrap_err().error_type(), "SearchBudgetExceeded");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let args = parse(&["7", "4", "1010", "--config", "/nonexistent/cyclix.json"]).unwrap();
        assert_eq!(search_config(&args).unwrap_err().error_type(), "ConfigError");
    }
}
