//! bukti-potong - Entry point
//!
//! Thin CLI over the library pipeline: extract the slip fields from a PDF
//! and stage the rendered summary, printing the generated filename.

use bukti_potong::{generate_summary, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bukti_potong=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        anyhow::bail!("usage: bukti-potong <slip.pdf> [staging-dir]");
    };

    let mut config = AppConfig::default();
    if let Some(dir) = args.next() {
        config.staging_dir = dir.into();
    }

    let data = std::fs::read(&input)?;
    if data.len() as u64 > config.max_upload_bytes {
        anyhow::bail!(
            "{} exceeds the {} byte upload limit",
            input,
            config.max_upload_bytes
        );
    }

    let generated = generate_summary(&data, &config)?;

    tracing::info!(file = %generated.file_name, "summary staged");
    println!("{}", generated.file_name);

    Ok(())
}
