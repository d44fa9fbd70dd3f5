//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; generation is delegated to ScaffoldService.

use dotenv::dotenv;
use orbit_scaffold::adapters::catalog::Catalog;
use orbit_scaffold::adapters::persistence::{FsSink, ManifestJson};
use orbit_scaffold::adapters::ui::tui::TuiInputPort;
use orbit_scaffold::ports::{CatalogPort, FileSinkPort, InputPort, ManifestPort};
use orbit_scaffold::shared::config::AppConfig;
use orbit_scaffold::usecases::{ScaffoldService, VerifyService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory inside the output tree holding generator bookkeeping.
const MANIFEST_DIR: &str = ".orbit-scaffold";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    orbit_scaffold::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();

    let output_dir = cfg.output_dir_or_default();
    let out_path = PathBuf::from(&output_dir);
    let out_abs = out_path.canonicalize().unwrap_or_else(|_| out_path.clone());
    info!(path = %out_abs.display(), "output directory");

    let ctx = cfg.template_context();
    info!(
        project = %ctx.project_name,
        slug = %ctx.project_slug,
        firebase_project = %ctx.firebase_project_id,
        "scaffold identity"
    );

    // --- Adapters ---
    let catalog: Arc<dyn CatalogPort> = Arc::new(Catalog::new());
    let sink: Arc<dyn FileSinkPort> = Arc::new(FsSink::new(&out_path));

    let manifest_impl = ManifestJson::new(out_path.join(MANIFEST_DIR).join("manifest.json"));
    manifest_impl
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let manifest: Arc<dyn ManifestPort> = Arc::new(manifest_impl);

    // --- Services ---
    let scaffold_service = Arc::new(ScaffoldService::new(
        Arc::clone(&catalog),
        Arc::clone(&sink),
        Arc::clone(&manifest),
        ctx,
    ));
    let verify_service = Arc::new(VerifyService::new(
        Arc::clone(&sink),
        Arc::clone(&manifest),
    ));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&catalog),
        Arc::clone(&scaffold_service),
        Arc::clone(&verify_service),
        out_path,
        cfg.force_overwrite_or_default(),
    ));

    // --- Run (main menu -> Generate / Preview / Verify) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
