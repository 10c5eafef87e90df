use biodivine_algo_succession_reduce::equivalence::MatchStrategy;
use biodivine_algo_succession_reduce::graphml;
use biodivine_algo_succession_reduce::reduce::{EmptyInputPolicy, ReduceConfig, reduce};
use biodivine_algo_succession_reduce::sop::QuineMcCluskey;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "biodivine_reduce")]
#[command(about = "Reduce a stable-motif succession diagram")]
struct Args {
    /// Path to a succession diagram in GraphML format
    #[arg(value_name = "FILE")]
    file: String,

    /// Path where the reduced diagram is written
    #[arg(long, short = 'o', value_name = "FILE")]
    output: String,

    /// Child-matching strategy for branch equivalence
    #[arg(long, default_value = "first-match", require_equals = true)]
    matching: Matching,

    /// Succeed with an empty output when the diagram has no source nodes
    #[arg(long)]
    allow_empty: bool,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum Matching {
    /// The established greedy pairing of children by label.
    #[value(name = "first-match")]
    FirstMatch,
    /// Exact bipartite matching of children.
    #[value(name = "backtracking")]
    Backtracking,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<Matching> for MatchStrategy {
    fn from(value: Matching) -> Self {
        match value {
            Matching::FirstMatch => MatchStrategy::FirstMatch,
            Matching::Backtracking => MatchStrategy::Backtracking,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Configure logging:
    // Handle verbose flag: None = not specified, Some(None) = specified without value (defaults to info), Some(Some(level)) = specified with value
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let diagram = graphml::load_diagram(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load diagram {}: {}", args.file, e);
        std::process::exit(1);
    });

    println!(
        "Loaded diagram with {} motifs and {} transitions.",
        diagram.node_count(),
        diagram.edge_count()
    );

    let config = ReduceConfig {
        match_strategy: args.matching.into(),
        on_empty: if args.allow_empty {
            EmptyInputPolicy::EmptyResult
        } else {
            EmptyInputPolicy::Fail
        },
    };

    // Any failure aborts before the output file is touched.
    let reduction = reduce(&diagram, &config, &QuineMcCluskey).unwrap_or_else(|e| {
        eprintln!("Reduction failed: {}", e);
        std::process::exit(1);
    });

    for class in &reduction.classes {
        println!("{} <- {{{}}}", class.formula, class.members.join(", "));
    }
    if !reduction.hoisted.is_empty() {
        println!("Unconditional motifs: {}", reduction.hoisted.join(", "));
    }
    println!(
        "Reduced diagram has {} nodes and {} edges.",
        reduction.diagram.node_count(),
        reduction.diagram.edge_count()
    );

    if let Err(e) = graphml::save_reduction(&args.output, &reduction.diagram) {
        eprintln!("Failed to write {}: {}", args.output, e);
        std::process::exit(1);
    }
}
