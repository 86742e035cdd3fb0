use clap::Parser;
use riskscore::cli::{self, ScoreCommand};
use riskscore::config;
use riskscore::engine::{self, tier::RiskTier, weights};
use riskscore::error::RiskError;
use riskscore::record;
use riskscore::report::{self, OutputFormat, RenderOptions};
use riskscore::telemetry;
use riskscore::types::config::RiskConfig;
use riskscore::types::report::ScoreReport;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, RiskError> {
    let cli = cli::Cli::parse();
    // Classifying a score needs neither config nor logging.
    if let cli::Commands::Tier(cmd) = &cli.command {
        println!("{}", RiskTier::classify(cmd.score));
        return Ok(exit_code::SUCCESS);
    }

    let loaded = config::load_config(cli.config.as_deref())?;
    loaded.validate()?;

    let level = telemetry::verbosity_level(cli.verbose, cli.quiet).unwrap_or(loaded.log_level());
    telemetry::init(level)?;

    match cli.command {
        cli::Commands::Score(cmd) => score(&cmd, &loaded, false),
        cli::Commands::Explain(cmd) => score(&cmd, &loaded, true),
        cli::Commands::Weights(cmd) => {
            let format = resolve_format(cmd.format, &loaded);
            let rendered = report::render_weights(&weights::summary(), format)?;
            print!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        // answered above, before config and logging are set up
        cli::Commands::Tier(_) => Ok(exit_code::SUCCESS),
    }
}

fn score(cmd: &ScoreCommand, loaded: &RiskConfig, explain: bool) -> Result<i32, RiskError> {
    let raw = cmd.applicant.to_record()?;
    let parsed = record::parse_record(&raw)?;

    let result = engine::compute_score(&parsed.applicant);
    info!(
        credit_score = result.credit_score,
        tier = %result.tier(),
        "applicant scored"
    );

    let terms = engine::contributions(&parsed.applicant).to_vec();
    let score_report = ScoreReport::new(parsed.applicant, result, terms, parsed.unrecognized);

    let options = RenderOptions {
        progress_width: loaded.progress_width(),
        explain,
    };
    let format = resolve_format(cmd.format, loaded);
    let rendered = report::render(&score_report, format, &options)?;
    if format == OutputFormat::Json {
        println!("{rendered}");
    } else {
        print!("{rendered}");
    }

    Ok(exit_code::SUCCESS)
}

fn resolve_format(flag: Option<cli::ReportFormat>, loaded: &RiskConfig) -> OutputFormat {
    flag.map(OutputFormat::from)
        .or_else(|| loaded.output_format())
        .unwrap_or(OutputFormat::Text)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                RiskError::InvalidInput { .. } => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
