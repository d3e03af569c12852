use std::io::{self, Write};

use noonlab_core::Registry;
use noonlab_core::domain::{Level, Tribe};

const WELCOME: &str = "
Welcome to Noon-Lab!
====================
An experimental environment for the civilization system
";

const CLOSING: &str = "
Result:
=======
- The system works
- Decisions are added and voted on
- The balance score is computed
- The Alpha sub-civilization is ready for testing

Next steps:
===========
- Launch Alpha (the sub-civilization)
- Activate more tribes
- Increase complexity step by step

Viva Noon Kingdom!
";

fn main() {
    if let Err(error) = run() {
        eprintln!("noonlab error: {error:#}");
        std::process::exit(1);
    }
}

/// デモの固定シナリオ：投入 → 投票 → ダッシュボード
fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // (A) Registry を用意して初期状態を表示
    let mut lab = Registry::new();
    writeln!(out, "{WELCOME}")?;
    lab.print_dashboard();

    // (B) サンプルの decision を投入
    writeln!(out, "\nAdding sample decisions...\n")?;
    let samples = [
        (
            "Activate self-awareness",
            "Start the self-awareness experiment in Alpha",
            Level::Civilizational,
            Tribe::Teachers,
        ),
        (
            "Improve balance",
            "Monitor and improve the balance score between tribes",
            Level::Strategic,
            Tribe::Guardians,
        ),
        (
            "Build the infrastructure",
            "Complete the file system for the next phase",
            Level::Operational,
            Tribe::Builders,
        ),
    ];
    for (title, description, level, tribe) in samples {
        let decision = lab.add_decision(title, description, level, tribe);
        writeln!(
            out,
            "Added: {} [{} / {}]",
            decision.title(),
            decision.tribe().label(),
            decision.level().label()
        )?;
    }

    // (C) 各 decision に 1 票ずつ投票
    writeln!(out, "\nVoting on decisions...\n")?;
    let ids: Vec<_> = lab.decisions().iter().map(|d| d.id()).collect();
    for id in ids {
        lab.vote(id);
        if let Some(d) = lab.decision(id) {
            writeln!(out, "  {}: {} vote(s) - [{}]", d.title(), d.votes(), d.status())?;
        }
    }

    // (D) 投票後のダッシュボードと締めのメッセージ
    lab.print_dashboard();
    writeln!(out, "{CLOSING}")?;
    out.flush()?;

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("NOONLAB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
