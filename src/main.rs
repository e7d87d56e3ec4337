//! Flowerlamp - evaluates the lamp once, reports, and waits for `exit`.
//!
//! Usage: cargo run -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>         JSON config (default: built-in scenario)
//!   --write-config <PATH>   Write the effective config and quit
//!   --manual                Enter lamp and cloud interactively
//!   --at <RFC3339>          Evaluation instant (default: now)
//!   --graphics <PATH>       Geometry dump path (default: graphicsdata.d)
//!   --no-publish            Skip the status link

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};

use flowerlamp::atmosphere::Sun;
use flowerlamp::config::ControllerConfig;
use flowerlamp::core::{Error, Result, logging, time};
use flowerlamp::export::save_graphics;
use flowerlamp::input::prompt_scenario;
use flowerlamp_link::{LogHandler, StatusLink};

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => ControllerConfig::load(&PathBuf::from(path)).await?,
        None => ControllerConfig::default(),
    };

    if has_flag(&args, "--manual") {
        let (lamp, cloud) = tokio::task::spawn_blocking(|| {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            prompt_scenario(&mut stdin.lock(), &mut stdout)
        })
        .await
        .map_err(|e| Error::Input(e.to_string()))??;
        config.lamp = lamp;
        config.clouds = vec![cloud];
        config.validate()?;
    }

    if let Some(path) = parse_str_arg(&args, "--graphics") {
        config.graphics_path = Some(PathBuf::from(path));
    }

    if let Some(path) = parse_str_arg(&args, "--write-config") {
        config.save(&PathBuf::from(&path)).await?;
        log::info!("Wrote config to {}", path);
        return Ok(());
    }

    let timestamp = match parse_str_arg(&args, "--at") {
        Some(text) => time::parse_timestamp(&text)?,
        None => time::now(),
    };

    let mut lamp = config.lamp.build();
    let mut sun = Sun::spa(config.sun.clone());
    let evaluation = lamp.evaluate(timestamp, &mut sun, &config.clouds)?;

    log::info!(
        "{}: sun altitude {:.3}, azimuth {:.3} -> {:?}",
        evaluation.timestamp,
        evaluation.altitude,
        evaluation.azimuth,
        evaluation.decision
    );
    log::debug!("Evaluation: {}", serde_json::to_string(&evaluation)?);
    lamp.describe();

    if let Some(path) = &config.graphics_path {
        if let Err(e) = save_graphics(path, &lamp, &sun, &config.clouds).await {
            log::warn!("Failed to write geometry to {}: {}", path.display(), e);
        }
    }

    if has_flag(&args, "--no-publish") {
        return Ok(());
    }

    let link = StatusLink::start(&config.link, LogHandler);
    let sent = link.publish_all(&evaluation.status()).await;
    log::info!("Queued {} status messages for {}", sent, config.link.topic);

    wait_for_exit().await?;
    link.shutdown().await;
    Ok(())
}

/// Block until `exit` is typed or stdin closes.
async fn wait_for_exit() -> Result<()> {
    log::info!("Type 'exit' to quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "exit" {
            break;
        }
    }
    Ok(())
}

/// Value following `name` on the command line
fn parse_str_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}
