use shoe_fit::commands::{self, CommandError, RunContext};
use shoe_fit::config::{LoggingSettings, Settings};
use shoe_fit::core::Recommender;
use shoe_fit::models::{ErrorResponse, FitThresholds, ScoringWeights, ToleranceRequest};
use shoe_fit::services::CatalogSource;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: shoe-fit [recommend | tolerance <length> <width> [tolerance]]";

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the JSON result, so logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(error: &str, message: String) -> ExitCode {
    print_json(&ErrorResponse {
        error: error.to_string(),
        message,
    });
    ExitCode::FAILURE
}

fn parse_tolerance_args(args: &[String]) -> Result<ToleranceRequest, String> {
    let parse = |idx: usize, name: &str| -> Result<Option<f64>, String> {
        args.get(idx)
            .map(|raw| raw.parse::<f64>().map_err(|_| format!("Invalid {} value: {}", name, raw)))
            .transpose()
    };

    let length = parse(0, "length")?.ok_or_else(|| USAGE.to_string())?;
    let width = parse(1, "width")?.ok_or_else(|| USAGE.to_string())?;
    let tolerance = parse(2, "tolerance")?.unwrap_or(0.5);

    Ok(ToleranceRequest { length, width, tolerance })
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = match &settings {
        Ok(s) => s.logging.clone(),
        Err(_) => LoggingSettings::default(),
    }
    .with_env_overrides();
    init_logging(&logging.level, &logging.format);

    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return print_error("configuration_error", e.to_string());
        }
    };

    info!("Configuration loaded successfully");

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let thresholds = FitThresholds::from(&settings.scoring.thresholds);
    let recommender =
        Recommender::new(weights, thresholds).include_inactive(settings.catalog.include_inactive);

    info!("Recommender initialized with weights: {:?}", weights);

    let ctx = RunContext {
        source: CatalogSource::new(&settings.catalog.shoes_path, &settings.catalog.scans_path),
        recommender,
        limit: settings.catalog.limit,
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        None | Some("recommend") => commands::recommend_latest(&ctx).map(|r| print_json(&r)),
        Some("tolerance") => match parse_tolerance_args(&args[1..]) {
            Ok(request) => commands::tolerance_lookup(&ctx, &request).map(|r| print_json(&r)),
            Err(message) => return print_error("invalid_arguments", message),
        },
        Some(other) => {
            let message = format!("Unknown command '{}'. {}", other, USAGE);
            return print_error("invalid_arguments", message);
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            match &e {
                CommandError::NoMeasurement => info!("{}", e),
                _ => error!("Command failed: {}", e),
            }
            print_error(e.kind(), e.to_string())
        }
    }
}
