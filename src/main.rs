use personal_dash::{
    dashboard::DashboardState, grid::ArticleGrid, load_articles, load_measurements, load_nutrition, router,
    AppState, Config,
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();

    let (measurements, nutrition) = tokio::join!(
        load_measurements(&config.measurement_csv),
        load_nutrition(&config.nutrition_csv),
    );
    let dashboard = DashboardState::new(measurements, nutrition);

    let (grid, articles_error) = match load_articles(&config.articles_json).await {
        Ok(articles) => (ArticleGrid::from_articles(articles), None),
        Err(err) => (ArticleGrid::default(), Some(err)),
    };

    let app = router(AppState::new(dashboard, grid, articles_error));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
