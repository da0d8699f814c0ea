use axum::extract::Request;
use blogapp::{
    conf::Cli,
    server::router,
};
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("blogctrl")
        .module("blogdb")
        .module("blogdb_sqlite")
        .module("tower_http")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = args.platform_builder
        .build()
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let app = router(platform)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request| tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                        ))
                )
        );

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to install Ctrl+C handler: {e}");
            }
        })
        .await?;

    Ok(())
}
