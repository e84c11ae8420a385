use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "userbase=debug,reqwest=info";

/// Install the global fmt subscriber. `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_new(env_filter)?;
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installs_global_subscriber_once() {
        init_tracing().expect("first init installs the subscriber");
        assert!(tracing::dispatcher::has_been_set());
        assert!(init_tracing().is_err());
    }
}
