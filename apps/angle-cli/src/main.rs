use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use angle_parser::{AngleExtractor, ExtractError};
use motor_command::{Actuator, MockDriver, MotorDriver};

mod config;
use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "angle",
    version,
    about = "Voice angle command CLI",
    disable_help_subcommand = true
)]
struct Cli {
    /// Config file (JSON); defaults are used when it does not exist
    #[arg(long, default_value = "angle.json", global = true)]
    config: String,

    /// Print results as JSON lines
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract the angle from one or more utterances
    Parse {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Convert a Chinese numeral (e.g. 一百零五) to an integer
    Convert { text: String },
    /// Extract the angle and print the motor pulse target
    Pulses { text: String },
    /// Read transcriptions from stdin and drive the mock motor
    Listen,
    /// List motor driver backends
    MotorList,
    /// Write the default config to a file
    InitConfig {
        #[arg(default_value = "angle.json")]
        path: String,
    },
}

#[derive(Debug, Serialize)]
struct AngleReport<'a> {
    text: &'a str,
    angle: Option<i64>,
    strategy: Option<String>,
    pulses: Option<i64>,
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { text } => {
            let (cfg, extractor) = load(&cli.config)?;
            parse(&extractor, &cfg, &text, cli.json)
        }
        Commands::Convert { text } => convert(&text, cli.json),
        Commands::Pulses { text } => {
            let (cfg, extractor) = load(&cli.config)?;
            pulses(&extractor, &cfg, &text, cli.json)
        }
        Commands::Listen => {
            let (cfg, extractor) = load(&cli.config)?;
            listen(&extractor, &cfg, cli.json)
        }
        Commands::MotorList => motor_list(),
        Commands::InitConfig { path } => init_config(&path),
    }
}

fn load(path: &str) -> Result<(Config, AngleExtractor)> {
    let cfg = Config::load(path)?;
    let extractor = AngleExtractor::new(cfg.extractor.clone())?;
    Ok((cfg, extractor))
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn init_config(path: &str) -> Result<()> {
    Config::default().save(path)?;
    println!("wrote {path}");
    Ok(())
}

fn motor_list() -> Result<()> {
    for port in MockDriver::list()? {
        println!("{}\t{}", port.name, port.driver);
    }
    Ok(())
}

fn convert(text: &str, json: bool) -> Result<()> {
    let value = angle_parser::try_convert(text);
    if json {
        let value = value.as_ref().ok();
        println!("{}", serde_json::json!({ "text": text, "value": value }));
        return Ok(());
    }
    match value {
        Ok(v) => println!("{v}"),
        Err(e) => println!("{text}: {e}"),
    }
    Ok(())
}

fn parse(extractor: &AngleExtractor, cfg: &Config, texts: &[String], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for text in texts {
        let report = build_report(extractor, cfg, text, false)?;
        write_report(&mut out, &report, json, &cfg.retry_prompt)?;
    }
    Ok(())
}

fn pulses(extractor: &AngleExtractor, cfg: &Config, text: &str, json: bool) -> Result<()> {
    let report = build_report(extractor, cfg, text, true)?;
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report, json, &cfg.retry_prompt)
}

fn listen(extractor: &AngleExtractor, cfg: &Config, json: bool) -> Result<()> {
    let mut actuator = Actuator::<MockDriver>::open(cfg.motor.clone())?;
    actuator.initialize()?;
    eprintln!("请说出角度，如：‘运动到90度’（Ctrl+D 退出）");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_listen(
        stdin.lock(),
        &mut stdout.lock(),
        extractor,
        &mut actuator,
        &cfg.retry_prompt,
        json,
    );
    actuator.stop()?;
    let moves = result?;
    info!(moves, "listen finished");
    Ok(())
}

/// Drive the actuator from one transcription per line; returns the number of moves.
fn run_listen<R, W, D>(
    input: R,
    out: &mut W,
    extractor: &AngleExtractor,
    actuator: &mut Actuator<D>,
    retry_prompt: &str,
    json: bool,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    D: MotorDriver,
{
    let mut moves = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let report = match extractor.try_extract(&line) {
            Ok(found) => match actuator.move_to_degrees(found.angle) {
                Ok(pulses) => {
                    moves += 1;
                    AngleReport {
                        text: &line,
                        angle: Some(found.angle),
                        strategy: Some(found.strategy.to_string()),
                        pulses: Some(pulses),
                    }
                }
                Err(e) => {
                    // keep listening; the motor stays where it was
                    warn!(text = %line, angle = found.angle, "move failed: {}", e);
                    empty_report(&line)
                }
            },
            Err(e) => {
                warn!(text = %line, "{}", e);
                empty_report(&line)
            }
        };
        write_report(out, &report, json, retry_prompt)?;
    }
    Ok(moves)
}

fn build_report<'a>(
    extractor: &AngleExtractor,
    cfg: &Config,
    text: &'a str,
    with_pulses: bool,
) -> Result<AngleReport<'a>> {
    match extractor.try_extract(text) {
        Ok(found) => {
            let pulses = if with_pulses {
                Some(motor_command::degrees_to_pulses(
                    found.angle,
                    cfg.motor.pulses_per_rev,
                )?)
            } else {
                None
            };
            Ok(AngleReport {
                text,
                angle: Some(found.angle),
                strategy: Some(found.strategy.to_string()),
                pulses,
            })
        }
        Err(ExtractError::InvalidPattern(e)) => Err(e.into()),
        Err(_) => Ok(empty_report(text)),
    }
}

fn empty_report(text: &str) -> AngleReport<'_> {
    AngleReport {
        text,
        angle: None,
        strategy: None,
        pulses: None,
    }
}

fn write_report<W: Write>(
    out: &mut W,
    report: &AngleReport<'_>,
    json: bool,
    retry_prompt: &str,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(report)?)?;
        return Ok(());
    }
    match (report.angle, report.pulses) {
        (Some(angle), Some(pulses)) => writeln!(out, "识别角度：{angle}\tpulses={pulses}")?,
        (Some(angle), None) => writeln!(out, "识别角度：{angle}")?,
        (None, _) => writeln!(out, "{retry_prompt}")?,
    }
    Ok(())
}
