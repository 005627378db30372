use dash_logging::dash_info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dash_logging::initialize(dash_logging::LogDestination::Terminal);
    let cfg = linkdeck_server::config::Config::load()?;

    let (app, port) = linkdeck_server::build_app(cfg)?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    dash_info!("server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
