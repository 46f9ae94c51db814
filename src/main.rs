use std::env;

use anyhow::{Context, Result};
use ini::Ini;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let mut args = env::args().skip(1);
    let input = args.next().context("expected path as first argument")?;

    let ini = Ini::from_file(&input).with_context(|| format!("failed to load {input}"))?;

    for name in ini.section_names() {
        if let Some(section) = ini.section(&name) {
            tracing::info!("[{}] {} keys", name, section.entries().len());
        }
    }

    print!("{ini}");

    if let Some(output) = args.next() {
        ini.save_to_file(&output)
            .with_context(|| format!("failed to save {output}"))?;
    }

    Ok(())
}
