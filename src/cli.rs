//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::adapters::console_presenter::ConsolePresenter;
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::enriched_csv::write_enriched_csv;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::analysis::{load_series, run_analysis, Analysis};
use crate::domain::config_validation::{
    check_settings, parse_locale, parse_ticker, settings_from_config,
};
use crate::domain::error::TrendscopeError;
use crate::domain::indicator_frame::compute_standard_frame;
use crate::domain::settings::{AnalysisConfig, ProviderKind};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::presentation_port::PresentationPort;

#[derive(Parser, Debug)]
#[command(
    name = "trendscope",
    about = "EMA/SMA/VWAP analysis and next-day price projection for one ticker"
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

/// Values given on the command line; each one wins over the config file.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct Overrides {
    #[arg(short, long)]
    pub ticker: Option<String>,
    /// Read `<TICKER>.csv` from this directory instead of Yahoo Finance
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,
    /// Seed for the projection's random draw
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a ticker and print the trend and suggested next-day price
    Analyze {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
        /// Write an SVG chart to this path
        #[arg(long)]
        chart: Option<PathBuf>,
        /// Summary language (pt, en)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Export bars and indicator columns as CSV
    Indicators {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging already initialised: {e}");
    }
}

pub fn run(cli: Cli) -> ExitCode {
    init_logging(cli.log_level);

    match cli.command {
        Command::Analyze {
            config,
            overrides,
            chart,
            locale,
        } => run_analyze_command(config.as_ref(), &overrides, chart, locale.as_deref()),
        Command::Indicators {
            config,
            overrides,
            output,
        } => run_indicators_command(config.as_ref(), &overrides, output.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

fn fail(err: TrendscopeError) -> ExitCode {
    eprintln!("error: {err}");
    (&err).into()
}

/// Reads the INI file at `path`; no path means an empty config.
///
/// Values are parsed and checked by [`build_analysis_config`].
pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, TrendscopeError> {
    let Some(path) = path else {
        return Ok(FileConfigAdapter::empty());
    };
    info!(path = %path.display(), "loading config");
    FileConfigAdapter::from_file(path).map_err(|e| TrendscopeError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Resolves the run settings: defaults, then config file, then CLI overrides.
pub fn build_analysis_config(
    config: &dyn ConfigPort,
    overrides: &Overrides,
) -> Result<AnalysisConfig, TrendscopeError> {
    let mut settings = settings_from_config(config)?;

    if let Some(ticker) = &overrides.ticker {
        settings.ticker = parse_ticker(ticker)?;
    }
    if let Some(dir) = &overrides.csv_dir {
        settings.provider = ProviderKind::Csv;
        settings.csv_dir = Some(dir.clone());
    }
    if overrides.seed.is_some() {
        settings.seed = overrides.seed;
    }

    check_settings(&settings)?;
    Ok(settings)
}

pub fn make_data_port(settings: &AnalysisConfig) -> Result<Box<dyn DataPort>, TrendscopeError> {
    match settings.provider {
        ProviderKind::Csv => {
            let dir = settings
                .csv_dir
                .clone()
                .ok_or_else(|| TrendscopeError::ConfigMissing {
                    section: "data".into(),
                    key: "csv_dir".into(),
                })?;
            Ok(Box::new(CsvAdapter::new(dir)))
        }
        ProviderKind::Yahoo => {
            #[cfg(feature = "yahoo")]
            {
                use crate::adapters::yahoo_adapter::YahooAdapter;
                Ok(Box::new(YahooAdapter::new()?))
            }

            #[cfg(not(feature = "yahoo"))]
            {
                Err(TrendscopeError::ConfigInvalid {
                    section: "data".into(),
                    key: "provider".into(),
                    reason: "yahoo feature is required for the yahoo provider".into(),
                })
            }
        }
    }
}

/// Runs the pipeline and hands the result to `presenter`.
///
/// With no seed the projection draws from the thread RNG and is not
/// reproducible between runs.
pub fn run_analyze(
    settings: &AnalysisConfig,
    data_port: &dyn DataPort,
    presenter: &dyn PresentationPort,
) -> Result<Analysis, TrendscopeError> {
    let analysis = match settings.seed {
        Some(seed) => run_analysis(data_port, &settings.ticker, &mut StdRng::seed_from_u64(seed))?,
        None => run_analysis(data_port, &settings.ticker, &mut rand::thread_rng())?,
    };
    presenter.present(&analysis)?;
    Ok(analysis)
}

fn run_analyze_command(
    config_path: Option<&PathBuf>,
    overrides: &Overrides,
    chart: Option<PathBuf>,
    locale: Option<&str>,
) -> ExitCode {
    match analyze_command(config_path, overrides, chart, locale) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn analyze_command(
    config_path: Option<&PathBuf>,
    overrides: &Overrides,
    chart: Option<PathBuf>,
    locale: Option<&str>,
) -> Result<(), TrendscopeError> {
    let config = load_config(config_path)?;
    let mut settings = build_analysis_config(&config, overrides)?;
    if chart.is_some() {
        settings.chart_path = chart;
    }
    if let Some(l) = locale {
        settings.locale = parse_locale(l)?;
    }

    let data_port = make_data_port(&settings)?;
    let presenter = ConsolePresenter::stdout(
        settings.locale,
        &settings.currency_prefix,
        settings.chart_path.clone(),
    );
    run_analyze(&settings, data_port.as_ref(), &presenter)?;
    Ok(())
}

/// Loads the series for `settings.ticker` and writes it with indicator columns.
pub fn export_indicators<W: io::Write>(
    settings: &AnalysisConfig,
    data_port: &dyn DataPort,
    writer: W,
) -> Result<(), TrendscopeError> {
    let series = load_series(data_port, &settings.ticker)?;
    let frame = compute_standard_frame(&series);
    write_enriched_csv(writer, &series, &frame)
}

fn run_indicators_command(
    config_path: Option<&PathBuf>,
    overrides: &Overrides,
    output: Option<&PathBuf>,
) -> ExitCode {
    match indicators_command(config_path, overrides, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn indicators_command(
    config_path: Option<&PathBuf>,
    overrides: &Overrides,
    output: Option<&PathBuf>,
) -> Result<(), TrendscopeError> {
    let config = load_config(config_path)?;
    let settings = build_analysis_config(&config, overrides)?;
    let data_port = make_data_port(&settings)?;
    match output {
        Some(path) => {
            export_indicators(&settings, data_port.as_ref(), fs::File::create(path)?)?;
            info!(path = %path.display(), "indicators written");
            Ok(())
        }
        None => export_indicators(&settings, data_port.as_ref(), io::stdout().lock()),
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(Some(config_path)) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };
    let settings = match build_analysis_config(&config, &Overrides::default()) {
        Ok(s) => s,
        Err(e) => return fail(e),
    };

    eprintln!("  ticker:   {}", settings.ticker);
    eprintln!("  provider: {:?}", settings.provider);
    if let Some(dir) = &settings.csv_dir {
        eprintln!("  csv_dir:  {}", dir.display());
    }
    eprintln!("  locale:   {:?}", settings.locale);
    match settings.seed {
        Some(seed) => eprintln!("  seed:     {seed}"),
        None => eprintln!("  seed:     (unseeded)"),
    }
    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
