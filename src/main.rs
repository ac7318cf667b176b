use brand_consultant::config::ConsultConfig;
use brand_consultant::consultation::ConsultationSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, quiet by default so it doesn't interleave with the chat)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ConsultConfig::from_env()?;

    eprintln!("✨ Personal Branding Consultant v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Typing delays: {}ms / {}ms / {}ms",
        config.prompt_delay.as_millis(),
        config.recommendation_delay.as_millis(),
        config.website_delay.as_millis()
    );
    eprintln!("   Commands: /progress, /profile, /status, /quit\n");

    let session = ConsultationSession::start(config);
    brand_consultant::shell::run(session).await?;

    eprintln!("Goodbye!");
    Ok(())
}
