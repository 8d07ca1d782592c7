//! Behavior tree demo binary.
//!
//! Builds the approach-or-wait tree from environment configuration and
//! executes it a fixed number of times.
//!
//! # Examples
//!
//! ```bash
//! BT_OBJECT_DISTANCE=4 BT_TICKS=3 RUST_LOG=behavior_tree=trace cargo run -p behavior-tree-demo
//! ```

use anyhow::Result;
use behavior_tree_demo::{DemoConfig, build_tree};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    tracing::info!(?config, "starting behavior tree demo");

    let mut tree = build_tree(&config)?;

    for tick in 1..=config.ticks {
        let status = tree.execute();
        tracing::info!(tick, success = status.is_success(), "tick complete");
    }

    tracing::info!("demo finished");
    Ok(())
}
