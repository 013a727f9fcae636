//! jx3calc - run one chat trigger from the command line.
//!
//! Usage: `jx3calc <trigger> [args...]`, e.g. `jx3calc 计算器 秦墨 无方` or
//! `jx3calc 副本 幽月轮 哭包猫`. The chat group is taken from `JX3CALC_GROUP`
//! so an omitted server falls back to the group binding.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jx3calc_engine::infrastructure::config::AppConfig;
use jx3calc_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jx3calc_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(calculator = %config.calculator_url, "Starting jx3calc");

    let app = App::new(&config)?;

    let mut argv = std::env::args().skip(1);
    let keyword = argv.next().unwrap_or_default();
    let args = argv.collect::<Vec<_>>().join(" ");
    let group = std::env::var("JX3CALC_GROUP").ok().filter(|g| !g.trim().is_empty());

    let reply = app.handle(&keyword, &args, group.as_deref()).await;
    println!("{reply}");

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
