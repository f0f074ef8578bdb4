// Trust portal preview
//
// Purpose: Initialise the portal against the standard page skeleton, replay
// input events, and print the resulting page.
// Usage: cargo run --bin render_portal -- [tab:<id>] [link:<id>] [button:<element-id>] ...
//
// Configuration via PORTAL_ROOT, PORTAL_DATA_PATH, PORTAL_MARKUP (see config.rs).

use anyhow::{bail, Context};
use trust_portal::{Document, PortalConfig, PortalEvent, TrustPortal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_event(arg: &str) -> anyhow::Result<PortalEvent> {
    let Some((kind, target)) = arg.split_once(':') else {
        bail!("expected <kind>:<target>, got {:?}", arg);
    };
    let target = target.to_string();
    match kind {
        "tab" => Ok(PortalEvent::TabSelected(target)),
        "link" => Ok(PortalEvent::ShortcutLink(target)),
        "button" => Ok(PortalEvent::ButtonPressed(target)),
        other => bail!("unknown event kind {:?} (expected tab, link or button)", other),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trust_portal=info,render_portal=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let events = std::env::args()
        .skip(1)
        .map(|arg| parse_event(&arg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let config = PortalConfig::from_env().context("reading portal configuration")?;
    tracing::info!("Configuration:");
    tracing::info!("  PORTAL_ROOT: {}", config.root);
    tracing::info!("  PORTAL_DATA_PATH: {}", config.data_path);
    tracing::info!("  PORTAL_MARKUP: {:?}", config.markup);

    let source = config.source()?;
    let mut portal = TrustPortal::with_config(Document::skeleton(config.markup), &config);
    portal.init(&source).await.context("initialising portal")?;

    for event in events {
        tracing::info!("Dispatching {:?}", event);
        portal.dispatch(event)?;
    }

    let state = portal.state();
    if !state.diagnostics.is_empty() {
        tracing::warn!("{} diagnostic(s) recorded during init", state.diagnostics.len());
    }
    tracing::info!("Active tab: {}", portal.current_tab().as_str());

    print!("{}", portal.page().to_html());
    Ok(())
}
