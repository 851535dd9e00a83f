mod replay;
mod trace;

use std::{fs, path::PathBuf, process};

use anyhow::{bail, Context, Result};
use clap::Parser;
use spellcast::{Axis, AxisMap, GestureLabel};

use replay::replay_episodes;
use trace::parse_trace;

#[derive(Debug, Parser)]
#[command(name = "spell_replay")]
#[command(about = "Replay recorded wand IMU traces through the gesture classifier")]
struct Cli {
    /// CSV trace: t_ms,held,ax,ay,az,gx,gy,gz
    trace: PathBuf,
    /// One expected label per line (up, down, left, right, other).
    #[arg(long)]
    expect: Option<PathBuf>,
    #[arg(long, default_value = "gyro_y", value_parser = parse_axis)]
    lateral: Axis,
    #[arg(long, default_value = "gyro_x", value_parser = parse_axis)]
    vertical: Axis,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.lateral == cli.vertical {
        bail!("--lateral and --vertical both map to {}", cli.lateral);
    }

    let text = fs::read_to_string(&cli.trace)
        .with_context(|| format!("failed to open {}", cli.trace.display()))?;
    let rows = parse_trace(&text).with_context(|| format!("in {}", cli.trace.display()))?;
    let episodes = replay_episodes(&rows, AxisMap::new(cli.lateral, cli.vertical));

    println!("index t_ms label basis samples count peak");
    for (index, episode) in episodes.iter().enumerate() {
        let best = episode.best();
        println!(
            "{} {} {} {} {} {} {}",
            index,
            episode.start_ms,
            episode.label(),
            episode.assessment.basis.as_str(),
            episode.samples,
            best.strong_count,
            best.peak
        );
    }

    if let Some(expect_path) = cli.expect {
        let text = fs::read_to_string(&expect_path)
            .with_context(|| format!("failed to open {}", expect_path.display()))?;
        let expected = parse_expected_labels(&text)
            .with_context(|| format!("in {}", expect_path.display()))?;
        let actual: Vec<GestureLabel> = episodes.iter().map(|episode| episode.label()).collect();
        if actual != expected {
            eprintln!("expected labels: {}", join_labels(&expected));
            eprintln!("actual labels:   {}", join_labels(&actual));
            bail!("label sequence mismatch");
        }
    }

    Ok(())
}

fn parse_axis(raw: &str) -> Result<Axis, String> {
    Axis::from_name(raw).ok_or_else(|| {
        let known: Vec<&str> = Axis::ALL.iter().map(|axis| axis.name()).collect();
        format!("unknown axis {raw:?}; expected one of {}", known.join(", "))
    })
}

fn parse_expected_labels(text: &str) -> Result<Vec<GestureLabel>> {
    let mut labels = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }
        let Some(label) = GestureLabel::from_name(&token.to_ascii_lowercase()) else {
            bail!("line {}: invalid expected label: {}", line_no + 1, token);
        };
        labels.push(label);
    }
    Ok(labels)
}

fn join_labels(labels: &[GestureLabel]) -> String {
    labels
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
