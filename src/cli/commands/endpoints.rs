//! Endpoints command implementation

use super::resolve_config;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::{EndpointsArgs, ResampleArgs};
use crate::eval::EvalConfig;
use admet_eval_common::{AdmetError, OutputFormat, Result, TableBuilder};

fn endpoints_json(config: &EvalConfig) -> serde_json::Value {
    let endpoints: Vec<serde_json::Value> = config
        .endpoints
        .iter()
        .map(|e| {
            serde_json::json!({
                "endpoint": e,
                "transform": config.transform_for(e).describe(),
            })
        })
        .collect();
    serde_json::json!({
        "molecule_column": config.molecule_column,
        "seed": config.resample.seed,
        "n_samples": config.resample.n_samples,
        "endpoints": endpoints,
    })
}

pub fn run_endpoints(args: EndpointsArgs, level: LogLevel) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), &ResampleArgs::default())?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&endpoints_json(&config)).map_err(|e| {
                AdmetError::Serialization {
                    message: format!("JSON serialization failed: {e}"),
                }
            })?;
            println!("{json}");
        }
        _ => {
            log(
                level,
                LogLevel::Normal,
                &format!("Key column: {}", config.molecule_column),
            );
            let mut builder = TableBuilder::new().headers(["Endpoint", "Transform"]);
            for endpoint in &config.endpoints {
                builder = builder.row([
                    endpoint.clone(),
                    config.transform_for(endpoint).describe().to_string(),
                ]);
            }
            print!("{}", builder.build());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_json() {
        let json = endpoints_json(&EvalConfig::default());
        assert_eq!(json["endpoints"].as_array().map(Vec::len), Some(9));
        assert_eq!(json["endpoints"][0]["endpoint"], "LogD");
        assert_eq!(json["endpoints"][0]["transform"], "none (log-scale native)");
        assert_eq!(json["n_samples"], 1000);
    }
}
