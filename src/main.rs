use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use lead_rank::leads::ScoredLead;
use lead_rank::ranking::{LeadFilter, DEFAULT_MIN_SCORE};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_SOURCE: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    /// Aligned table for humans
    #[default]
    Table,
    /// Tab-separated values for scripting
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List leads ranked by propensity score (default if no subcommand)
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Explain the score of a lead by its index number
    Show {
        /// Index number of the lead (1-based, as shown in list)
        index: usize,
    },
    /// Export the ranked, filtered leads as CSV
    Export {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open a lead's LinkedIn profile in browser by its index number
    Open {
        /// Index number of the lead (1-based, as shown in list)
        index: usize,
    },
    /// Interactive dashboard
    Tui {
        /// Where the 'e' key writes its CSV export
        #[arg(long, default_value = lead_rank::export::DEFAULT_EXPORT_FILE)]
        export_path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "lead-rank")]
#[command(about = "Rank sales leads by rule-based propensity score", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Lead file (.yaml, .yml or .json); built-in demo leads if omitted
    #[arg(short, long, global = true)]
    leads: Option<PathBuf>,

    /// Only include leads scoring at least this much (0-100)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Only include leads whose location or HQ contains this text (case-insensitive)
    #[arg(long, global = true)]
    location: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Resolve a 1-based index into the filtered ranking, exiting on a bad index
fn lead_at(visible: &[ScoredLead], index: usize) -> &ScoredLead {
    if index < 1 || index > visible.len() {
        eprintln!(
            "Invalid index {}. Must be between 1 and {}.",
            index,
            visible.len()
        );
        std::process::exit(EXIT_CONFIG);
    }
    &visible[index - 1]
}

fn main() {
    let cli = Cli::parse();
    lead_rank::logging::init(cli.verbose);
    let command = cli.command.unwrap_or(Commands::List {
        format: OutputFormat::Table,
    });

    // Load config
    let config = match lead_rank::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = lead_rank::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let rules = config.scoring.clone().unwrap_or_default().resolve();
    tracing::debug!(?rules, "resolved rule set");

    // Load leads
    let leads = match cli.leads.or(config.leads.clone()) {
        Some(path) => match lead_rank::leads::load_leads(&path) {
            Ok(leads) => leads,
            Err(e) => {
                eprintln!("Lead source error: {:#}", e);
                std::process::exit(EXIT_SOURCE);
            }
        },
        None => {
            tracing::debug!("no lead file given, using demo leads");
            lead_rank::leads::demo_leads()
        }
    };

    // Score and rank everything, then filter
    let ranked = lead_rank::ranking::rank(lead_rank::scoring::score_leads(leads, &rules));
    let filter = LeadFilter {
        min_score: cli.min_score.or(config.min_score).unwrap_or(DEFAULT_MIN_SCORE),
        location: cli.location,
    };
    let visible = filter.apply(&ranked);
    tracing::debug!(
        total = ranked.len(),
        shown = visible.len(),
        min_score = filter.min_score,
        "ranked leads"
    );

    let use_colors = lead_rank::output::should_use_colors();

    match command {
        Commands::List { format } => match format {
            OutputFormat::Table => {
                let summary = lead_rank::ranking::summarize(&ranked);
                println!("{}", lead_rank::output::format_summary(&summary, visible.len()));
                println!();
                println!("{}", lead_rank::output::format_scored_table(&visible, use_colors));
            }
            OutputFormat::Tsv => {
                let output = lead_rank::output::format_tsv(&visible);
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
        },
        Commands::Show { index } => {
            let scored = lead_at(&visible, index);
            println!("{}", lead_rank::output::format_lead_detail(scored, use_colors));
        }
        Commands::Export { output } => match output {
            Some(path) => {
                if let Err(e) = lead_rank::export::write_csv(&path, &visible) {
                    eprintln!("Export error: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
                eprintln!("Exported {} leads to {}", visible.len(), path.display());
            }
            None => match lead_rank::export::to_csv(&visible) {
                Ok(csv) => print!("{}", csv),
                Err(e) => {
                    eprintln!("Export error: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            },
        },
        Commands::Open { index } => {
            let scored = lead_at(&visible, index);
            match lead_rank::browser::open_profile(&scored.lead.linkedin) {
                Ok(url) => println!("Opening {} in browser: {}", scored.lead.name, url),
                Err(e) => {
                    eprintln!("Failed to open browser: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            }
        }
        Commands::Tui { export_path } => {
            let colors = lead_rank::tui::resolve_theme(config.theme.unwrap_or_default());
            let app = lead_rank::tui::App::new(ranked, filter, export_path, colors);
            if let Err(e) = lead_rank::tui::run_tui(app) {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
