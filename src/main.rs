//! Patient Dashboard - Main Entry Point
//!
//! Serves the Dioxus application (SSR + hydration) in server builds and
//! launches it directly in the browser or a desktop window otherwise.

use patient_dashboard::app::App;

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(name = "patient-dashboard", about = "Patient dashboard web server")]
struct ServerArgs {
    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use anyhow::Context;
    use clap::Parser;
    use patient_dashboard::config::DashboardConfig;

    let args = ServerArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_filter)),
        )
        .init();

    tracing::info!("Starting patient dashboard server...");

    dioxus::serve(|| async move {
        match patient_dashboard::config::BUILD_OVERRIDE {
            Some(raw) => {
                DashboardConfig::from_json(raw).context("DASHBOARD_CONFIG override is invalid")?;
            }
            None => DashboardConfig::default()
                .validate()
                .context("default dashboard config is invalid")?,
        }

        Ok(dioxus::server::router(App))
    });
}

// WASM entry point (browser)
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Patient dashboard initialized".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
