//! task-matcher binary
//!
//! # Input (via stdin, or --prompt)
//! JSON with fields: id, prompt, top_n (optional)
//!
//! # Output (via stdout)
//! JSON with status, task, steps and top_apps

use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Read};
use std::sync::Arc;
use task_matcher::config::Cli;
use task_matcher::{Catalog, Explanation, MatchRequest, MatcherError, TaskMatcher, Taxonomy};
use tracing::{debug, error, info};

/// Output payload when the request could not be served
#[derive(Debug, Serialize)]
struct ErrorOutput {
    status: &'static str,
    detail: String,
}

fn main() {
    // Initialize tracing if RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        let output = ErrorOutput {
            status: "error",
            detail: e.to_string(),
        };
        println!("{}", serde_json::to_string(&output).unwrap_or_default());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), MatcherError> {
    let request = match &cli.prompt {
        Some(prompt) => MatchRequest {
            id: 0,
            prompt: prompt.clone(),
            top_n: None,
        },
        None => read_request()?,
    };
    let top_n = request.top_n.unwrap_or(cli.top_n);

    info!(
        "Request {}: {}",
        request.id,
        &request.prompt[..floor_char_boundary(&request.prompt, 50)]
    );

    let taxonomy = match &cli.taxonomy {
        Some(path) => Taxonomy::from_json_path(path)?,
        None => Taxonomy::builtin().clone(),
    };

    let catalog_path = cli.catalog_path()?;
    debug!("Loading catalog from: {:?}", catalog_path);
    let catalog = Catalog::from_path(&catalog_path)?;
    info!(
        "Catalog: {} applications from {:?}, loaded at {}",
        catalog.len(),
        catalog.source().unwrap_or(catalog_path.as_path()),
        catalog.loaded_at().format("%Y-%m-%d %H:%M:%S")
    );

    let matcher = TaskMatcher::new(Arc::new(taxonomy), Arc::new(catalog));
    let explanation = matcher.explain(&request.prompt, top_n);
    log_summary(&explanation);

    let result = explanation.into_result();
    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}

fn read_request() -> Result<MatchRequest, MatcherError> {
    let mut input_json = String::new();
    io::stdin().read_to_string(&mut input_json)?;
    debug!("Received input: {}", input_json);
    Ok(serde_json::from_str(&input_json)?)
}

/// Largest char boundary of `s` not past `max`.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Log the identified task and top applications to stderr
fn log_summary(explanation: &Explanation<'_>) {
    let task = explanation.classification.task_name();
    let task = if explanation.classification.is_match() {
        task.green().bold()
    } else {
        task.yellow()
    };
    info!(
        "Identified task: {} (overlap {})",
        task,
        explanation.classification.overlap()
    );
    info!("Steps: {}", explanation.classification.steps().join(", "));

    for app in &explanation.ranked {
        let score = if app.score > 0 {
            app.score.to_string().green()
        } else {
            app.score.to_string().red()
        };
        info!("  {} (score: {}, row {})", app.name.bold(), score, app.row_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_char_boundary() {
        assert_eq!(floor_char_boundary("short", 50), 5);
        assert_eq!(floor_char_boundary("abcdef", 3), 3);
        // 'é' is two bytes starting at index 1
        assert_eq!(floor_char_boundary("héllo", 2), 1);
    }

    #[test]
    fn test_error_output_shape() {
        let output = ErrorOutput {
            status: "error",
            detail: "Catalog unavailable".to_string(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["detail"], "Catalog unavailable");
    }
}
