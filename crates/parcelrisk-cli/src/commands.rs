//! Command handlers

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::input::collect_shipments;
use crate::output::{output_assessment, output_factors};
use crate::style::Painter;
use parcelrisk_domain::service::rank_by_risk;
use parcelrisk_types::{OutputFormat, Result};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, info};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli);
    debug!(?config, "effective configuration");

    match cli.command.unwrap_or(Commands::Assess) {
        Commands::Assess => cmd_assess(&config),
        Commands::Factors => cmd_factors(&config),
        Commands::Config => cmd_config(&config),
    }
}

fn cmd_assess(config: &Config) -> Result<()> {
    let (prompt_painter, report_painter) = assessment_painters(
        config,
        io::stdout().is_terminal(),
        io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    debug!(
        prompt_color = prompt_painter.is_enabled(),
        report_color = report_painter.is_enabled(),
        "color resolved"
    );
    let mut input = io::stdin().lock();
    let mut out = io::stdout();

    if config.prompts_on_stderr() {
        run_assessment(
            config,
            (&prompt_painter, &report_painter),
            &mut input,
            &mut io::stderr(),
            &mut out,
        )
    } else {
        run_assessment(
            config,
            (&prompt_painter, &report_painter),
            &mut input,
            &mut io::stdout(),
            &mut out,
        )
    }
}

/// Painters for the prompt stream and the report stream, each resolved
/// against the terminal state of the stream it writes to.
fn assessment_painters(
    config: &Config,
    stdout_is_terminal: bool,
    stderr_is_terminal: bool,
    no_color: bool,
) -> (Painter, Painter) {
    let report = Painter::resolve(config.color, stdout_is_terminal, no_color);
    let prompts = if config.prompts_on_stderr() {
        Painter::resolve(config.color, stderr_is_terminal, no_color)
    } else {
        report
    };
    (prompts, report)
}

/// Collect, rank and present shipments
pub fn run_assessment<R: BufRead, P: Write, O: Write>(
    config: &Config,
    (prompt_painter, report_painter): (&Painter, &Painter),
    input: &mut R,
    prompts: &mut P,
    out: &mut O,
) -> Result<()> {
    let mut shipments =
        collect_shipments(input, prompts, prompt_painter, config.label_matching)?;
    rank_by_risk(&mut shipments);
    info!(
        count = shipments.len(),
        top_score = shipments.first().map(|s| s.risk_score()),
        "shipments ranked"
    );
    output_assessment(config.output_format, &shipments, report_painter, out)
}

fn cmd_factors(config: &Config) -> Result<()> {
    let painter = Painter::for_stream(config.color, &io::stdout());
    output_factors(config.output_format, &painter, &mut io::stdout())
}

fn cmd_config(config: &Config) -> Result<()> {
    if config.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("{}", config);
    }
    Ok(())
}
