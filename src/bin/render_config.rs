use {
    anyhow::Context,
    dotenv::dotenv,
    gateway_config::{base_services, Config, Registry},
    serde_json::json,
    std::str::FromStr,
    tracing_subscriber::fmt::format::FmtSpan,
};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env().context("failed to load config from the environment")?;

    tracing_subscriber::fmt()
        .with_max_level(
            tracing::Level::from_str(config.log_level.as_str()).context("invalid log level")?,
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(false)
        .init();

    let host = config.host_addr();
    let registry = Registry::new(&config, &host);

    let document = json!({
        "networks": registry.all_networks(),
        "services": base_services(),
    });
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
