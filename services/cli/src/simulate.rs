use crate::cli::{OutputFormat, RunArgs};
use hiring_pipeline::config::AppConfig;
use hiring_pipeline::error::AppError;
use hiring_pipeline::telemetry;
use hiring_pipeline::workflows::hiring::pipeline::roster_section;
use hiring_pipeline::workflows::hiring::{
    CandidateRoster, EntropySource, HiringConfig, HiringParameters, HiringPipeline, PipelineRun,
};
use tracing::info;

pub(crate) fn run_simulation(args: RunArgs) -> Result<(), AppError> {
    let RunArgs { seed, format } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(?config.environment, ?seed, "running hiring simulation");
    let run = simulate(seed)?;
    print_lines(&render_run(&run, format)?);

    Ok(())
}

pub(crate) fn show_roster() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    print_lines(&roster_lines());
    Ok(())
}

/// Runs the standard pipeline, seeded when a seed is given.
pub(crate) fn simulate(seed: Option<u64>) -> Result<PipelineRun, AppError> {
    let hiring = HiringConfig::new(HiringParameters::standard())?;
    let pipeline = HiringPipeline::new(hiring, CandidateRoster::standard());
    let mut rng = match seed {
        Some(seed) => EntropySource::seeded(seed),
        None => EntropySource::from_entropy(),
    };

    Ok(pipeline.run(&mut rng))
}

pub(crate) fn render_run(
    run: &PipelineRun,
    format: OutputFormat,
) -> Result<Vec<String>, AppError> {
    match format {
        OutputFormat::Text => Ok(run.transcript()),
        OutputFormat::Json => Ok(vec![serde_json::to_string_pretty(run)?]),
    }
}

pub(crate) fn roster_lines() -> Vec<String> {
    roster_section(&CandidateRoster::standard().listing())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiring_pipeline::workflows::hiring::pipeline::{REPORT_HEADING, ROSTER_HEADING};
    use serde_json::Value;

    fn json_of(lines: &[String]) -> Value {
        assert_eq!(lines.len(), 1, "json output is a single document");
        serde_json::from_str(&lines[0]).expect("valid json")
    }

    #[test]
    fn roster_command_lists_both_renderings() {
        let lines = roster_lines();

        assert_eq!(lines[0], ROSTER_HEADING);
        assert!(lines.iter().any(|line| line == "01 - FELIPE"));
        assert!(lines.iter().any(|line| line == "10 - JORGE"));
        assert!(lines.iter().any(|line| line == "- MIRELA"));
        assert!(!lines.iter().any(|line| line == REPORT_HEADING));
    }

    #[test]
    fn seeded_json_runs_repeat() {
        let first = simulate(Some(7)).expect("simulation runs");
        let second = simulate(Some(7)).expect("simulation runs");

        let first = json_of(&render_run(&first, OutputFormat::Json).expect("renders"));
        let second = json_of(&render_run(&second, OutputFormat::Json).expect("renders"));

        assert_eq!(first["selection"], second["selection"]);
        assert_eq!(first["contact"], second["contact"]);
        assert_eq!(first["summary"], second["summary"]);
        assert_eq!(first["config"]["openings"], 5);
        assert!(first["summary"]["verdict_label"].is_string());
    }

    #[test]
    fn text_format_renders_the_transcript() {
        let run = simulate(Some(11)).expect("simulation runs");

        let lines = render_run(&run, OutputFormat::Text).expect("renders");

        assert_eq!(lines, run.transcript());
        assert!(lines
            .last()
            .is_some_and(|line| line.starts_with("Result: ")));
    }
}
