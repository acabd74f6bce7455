//! Process entrypoint.
//!
//! Configuration comes from the environment: `API_KEY` is the shared secret
//! for the `x-api-key` gate, `BIND_ADDR` overrides the default listen
//! address of `0.0.0.0:4000`.

use custodesk_auth::ApiKey;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    custodesk_observability::init();

    let api_key = std::env::var("API_KEY").unwrap_or_else(|_| {
        tracing::warn!("API_KEY not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let store = custodesk_infra::MemoryCustomerStore::arc();
    let app = custodesk_api::app::build_app(ApiKey::new(api_key), store);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        tracing::debug!("BIND_ADDR not set; using 0.0.0.0:4000");
        "0.0.0.0:4000".to_string()
    });
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
