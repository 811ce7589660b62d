use anyhow::Context;
use arrayview::config::DemoConfig;
use arrayview::{demos, logging};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("loading configuration")?;
    if config.log_json {
        logging::init_tracing_json();
    } else {
        logging::init_tracing();
    }

    let transcripts = demos::run_all(&config.demos).context("running demonstrations")?;
    let rendered = demos::render(&transcripts, &config).context("rendering transcripts")?;
    println!("{}", rendered);
    Ok(())
}
