use taskmate::commands::Cli;
use taskmate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging only when debugging, otherwise messages go to the console
    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "taskmate=debug".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Cli::menu().await
}
