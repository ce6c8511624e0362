use anyhow::{Context, Result};
use clap::Parser;
use motif_grover::cli::{Cli, OutputFormat};
use motif_grover::config::SearchConfig;
use motif_grover::csv_output::{CsvOutput, CsvStatesOutput};
use motif_grover::dna;
use motif_grover::json_output::JsonOutput;
use motif_grover::search::{MeasurementAnalysis, MotifSearch, SearchPlan};
use motif_grover::stats::MeasurementHistogram;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Defaults, then the config file, then CLI flags
fn resolve_config(args: &Cli) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(threads) = args.threads {
        config.num_threads = threads;
    }
    if let Some(threshold) = args.parallel_threshold {
        config.parallel_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

/// Work out (sequence, motif) from positional arguments and --file
fn resolve_inputs(args: &Cli) -> Result<(String, String)> {
    let (sequence, motif) = match (&args.file, &args.sequence_or_motif, &args.motif) {
        (Some(path), Some(motif), None) => {
            let sequence = dna::read_sequence_file(path)
                .with_context(|| format!("Failed to read sequence from {}", path.display()))?;
            (sequence, motif.clone())
        }
        (Some(_), None, _) => {
            anyhow::bail!("Motif pattern required when using --file. Usage: motif-grover --file <PATH> <MOTIF>");
        }
        (Some(_), Some(_), Some(_)) => {
            anyhow::bail!("Cannot give both --file and a SEQUENCE argument. Choose one.");
        }
        (None, Some(sequence), Some(motif)) => (sequence.to_ascii_uppercase(), motif.clone()),
        (None, _, _) => {
            anyhow::bail!("Must give SEQUENCE and MOTIF. Usage: motif-grover <SEQUENCE> <MOTIF> or motif-grover --file <PATH> <MOTIF>");
        }
    };

    let motif = dna::parse_sequence(&motif).context("Invalid DNA bases in motif")?;
    if motif.is_empty() {
        anyhow::bail!("Motif must not be empty");
    }
    Ok((sequence, motif))
}

fn read_counts(path: &Path) -> Result<MeasurementHistogram> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read counts from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Counts in {} must be a JSON object of state -> count", path.display()))
}

fn preview(sequence: &str, limit: usize) -> String {
    if sequence.chars().count() > limit {
        format!("{}...", sequence.chars().take(limit).collect::<String>())
    } else {
        sequence.to_string()
    }
}

fn print_plan(sequence: &str, plan: &SearchPlan) {
    println!("Grover DNA Motif Search");
    println!("========================================");
    println!("Sequence:   {} (length: {})", preview(sequence, 50), plan.sequence_len);
    println!("Motif:      {} (length: {})", plan.motif, plan.motif.len());
    println!("Candidates: {}", plan.num_candidates);
    println!(
        "Qubits:     {} (database size {})",
        plan.n_qubits, plan.database_size
    );
    println!("GC Content: {:.1}%", plan.gc_content * 100.0);
    println!();

    let method = if plan.parallel {
        format!("parallel, {} threads", plan.num_threads)
    } else {
        "single-threaded".to_string()
    };
    println!(
        "Pattern search completed ({}) in {:.4}s",
        method,
        plan.search_time_us as f64 / 1_000_000.0
    );
    println!("Motif '{}' matches at {} positions", plan.motif, plan.matches.len());
    if plan.matches.len() <= 20 {
        println!("Match positions: {:?}", plan.matches);
    } else {
        println!(
            "Match positions: {:?}...{:?} (showing first/last 10)",
            &plan.matches[..10],
            &plan.matches[plan.matches.len() - 10..]
        );
    }
    println!();
    println!("Grover iterations:            {}", plan.optimal_iterations);
    println!(
        "Expected success probability: ~{:.1}%",
        plan.expected_success_probability * 100.0
    );
    println!(
        "Amplified success probability: {:.1}%",
        plan.theoretical_success_probability * 100.0
    );
}

fn print_analysis(analysis: &MeasurementAnalysis) {
    println!();
    println!("=== Measurement Statistics ({} shots) ===", analysis.total_shots);
    println!("State (pos): count [%]  [match]");
    for ranked in &analysis.top_states {
        let pct = 100.0 * ranked.count as f64 / analysis.total_shots as f64;
        let mark = if ranked.is_match { "✓" } else { "" };
        match ranked.position {
            Some(pos) => println!(
                "  {} ({}): {} [{:.1}%] {}",
                ranked.state, pos, ranked.count, pct, mark
            ),
            None => println!("  {} (invalid): {} [{:.1}%]", ranked.state, ranked.count, pct),
        }
    }
    println!();
    println!(
        "  Match probability:   {:.3}",
        analysis.match_probability
    );
    println!(
        "  Success probability: {:.3}",
        analysis.statistics.success_probability
    );
    println!("  Max amplitude:       {:.3}", analysis.statistics.max_amplitude);
    println!("  Shannon entropy:     {:.3}", analysis.statistics.entropy);
    println!(
        "  Unique states:       {}",
        analysis.statistics.num_unique_states
    );
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = resolve_config(&args)?;
    let (sequence, motif) = resolve_inputs(&args)?;
    let shots = args.shots.unwrap_or(config.shots);
    if shots == 0 {
        anyhow::bail!("Invalid value for --shots: 0 (must be >= 1)");
    }

    let search = MotifSearch::new(sequence.as_bytes(), motif.as_bytes(), config)?;
    let plan = search.plan()?;

    let analysis = match &args.counts {
        Some(path) => {
            let counts = read_counts(path)?;
            Some(plan.analyze_counts(&counts, shots, args.top)?)
        }
        None => None,
    };

    match args.format {
        OutputFormat::Text => {
            print_plan(&sequence, &plan);
            if let Some(analysis) = &analysis {
                print_analysis(analysis);
            }
        }
        OutputFormat::Json => {
            let mut output = JsonOutput::new(plan);
            if let Some(analysis) = analysis {
                output.set_analysis(analysis);
            }
            println!("{}", output.to_json()?);
        }
        OutputFormat::Csv => match &analysis {
            Some(analysis) => print!("{}", CsvStatesOutput::from_analysis(analysis).to_csv()),
            None => print!("{}", CsvOutput::from_plan(&plan).to_csv()),
        },
    }

    Ok(())
}
