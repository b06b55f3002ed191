/// Structured JSON logging, filtered by `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "marketplace_auth=info,info".into()),
        )
        .with_target(false)
        .json()
        .init();
}
