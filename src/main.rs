use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use pessoas_api::auth::handlers::handle_authenticate;
use pessoas_api::registry::handlers::{
    handle_create_person, handle_delete_person, handle_get_person, handle_list_by_region,
    handle_list_people, handle_update_person,
};
use pessoas_api::registry::memory::PersonRegistry;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 0.0.0.0:8080", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Registry (in-memory, starts empty on every run):
    let registry = Arc::new(PersonRegistry::new());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api/pessoas/autenticar", post(handle_authenticate))
        .route(
            "/api/pessoas",
            get(handle_list_people).post(handle_create_person),
        )
        .route("/api/pessoas/por-uf/:uf", get(handle_list_by_region))
        .route(
            "/api/pessoas/:codigo",
            get(handle_get_person)
                .put(handle_update_person)
                .delete(handle_delete_person),
        )
        .layer(Extension(registry));

    // 3. Start HTTP server:
    tracing::info!("Pessoas API listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
