//! Host startup and serve failures.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
