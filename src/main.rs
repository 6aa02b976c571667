use admin_gate::config::AdminAuthConfig;
use admin_gate::routes;
use admin_gate::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AdminAuthConfig::from_env().expect("admin auth config");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    tracing::info!(environment = ?config.environment, secure_cookies = config.secure_cookies(), "admin auth configured");

    let app = routes::app(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "admin-gate listening");
    axum::serve(listener, app).await.expect("server failed");
}
