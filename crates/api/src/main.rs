use anyhow::Context;

use phonebook_infra::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    phonebook_observability::init();

    let config = Config::from_env().context("invalid configuration")?;
    let services = phonebook_api::app::build_services(&config)
        .context("failed to build directory client")?;
    let app = phonebook_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("server ready at http://{}/", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
