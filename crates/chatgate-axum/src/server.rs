//! Axum HTTP server for the gateway.

use tokio::net::TcpListener;
use tracing::info;

use crate::bootstrap::{CorsConfig, GatewayContext};
use crate::routes::create_router;

/// Run the gateway on a pre-bound listener until the process exits.
pub async fn serve(
    listener: TcpListener,
    ctx: GatewayContext,
    cors: &CorsConfig,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = create_router(ctx, cors);

    info!("Gateway listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
