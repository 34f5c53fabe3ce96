mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("invalid PORT");

    let assets = routes::asset_dir();
    let entry = assets.join("index.html");
    // A bundle without its entry document is a deployment mistake, not a
    // per-request condition.
    assert!(
        entry.is_file(),
        "entry document missing: {}",
        entry.display()
    );

    let app = routes::app(&assets);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, assets = %assets.display(), "stickyboard host listening");
    axum::serve(listener, app).await.expect("server failed");
}
