//! Confirmation dialog demo
//!
//! Simulates two requests against one session: the first receives a
//! `confirm<Name>` signal and renders the dialog, the second resumes the pending
//! confirmation and confirms it.
//!
//! Usage: `confirmation-dialog-demo [config.toml] [signal] [key=value ...]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use confirmation_dialog_app::{init_logging, load_config, DialogFactory, DialogFactoryBuilder};
use confirmation_dialog_core::error::{DialogError, DialogResult};
use confirmation_dialog_core::services::{ConfirmationDialog, SignalDispatch};
use confirmation_dialog_core::traits::{InMemorySessionStore, RenderAdapter, RenderContext};
use confirmation_dialog_core::types::{DialogConfig, DialogText, Params};

const COMPONENT_PATH: &str = "homepage-confirmDialog";

/// Renders the dialog as plain text instead of markup
struct PlainTextRenderer;

impl RenderAdapter for PlainTextRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> DialogResult<String> {
        if ctx.layout_path.as_os_str().is_empty() {
            return Err(DialogError::MissingTemplate("layout".to_string()));
        }
        Ok(match ctx.active {
            Some(active) => format!(
                "[{}] {}\n  {}\n  (token {}, {})",
                active.name(),
                active.heading(),
                active.question(),
                active.token(),
                if ctx.ajax { "partial" } else { "full page" },
            ),
            None => "(no confirmation pending)".to_string(),
        })
    }
}

fn register_confirmers(dialog: &mut ConfirmationDialog) -> DialogResult<()> {
    dialog.add_confirmer(
        "deleteItem",
        |params: &Params| {
            tracing::info!("Deleting item {}", params.get("id").cloned().unwrap_or_default());
            Ok(())
        },
        DialogText::computed(|_, params| {
            format!(
                "Really delete item {}?",
                params.get("id").cloned().unwrap_or_default()
            )
        }),
        "Delete item",
    )?;
    dialog.add_confirmer(
        "archiveAll",
        |_: &Params| {
            tracing::info!("Archiving everything");
            Ok(())
        },
        "Archive all items?",
        "Archive",
    )
}

fn parse_params(args: &[String]) -> Params {
    args.iter()
        .filter_map(|arg| arg.split_once('='))
        .map(|(k, v)| {
            let value: serde_json::Value = serde_json::from_str(v).unwrap_or_else(|_| v.into());
            (k.to_string(), value)
        })
        .collect()
}

async fn run(factory: &DialogFactory, signal: &str, params: Params) -> anyhow::Result<()> {
    // Request 1: signal arrives, dialog is shown
    let mut dialog = factory.create(COMPONENT_PATH);
    dialog.disable_ajax();
    register_confirmers(&mut dialog)?;

    match dialog.handle_signal(signal, params)? {
        SignalDispatch::PassThrough => {
            println!("Signal \"{signal}\" is not a confirmation signal");
            return Ok(());
        }
        SignalDispatch::Shown { name } => tracing::info!("Showing confirmer {name}"),
    }
    println!("{}", dialog.render(&PlainTextRenderer)?);
    factory.persist(&dialog).await?;

    // Request 2: full page reload, user clicks "yes"
    let mut dialog = factory.create(COMPONENT_PATH);
    dialog.disable_ajax();
    register_confirmers(&mut dialog)?;
    if !factory.resume(&mut dialog).await? {
        anyhow::bail!("pending confirmation was lost between requests");
    }
    let (name, token) = dialog
        .active()
        .map(|a| (a.name().to_string(), a.token()))
        .context("resumed dialog has no active confirmer")?;
    dialog.confirm(&name, token)?;
    factory.persist(&dialog).await?;
    println!("{}", dialog.render(&PlainTextRenderer)?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_logging(tracing::Level::INFO) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, rest) = match args.first().filter(|a| a.ends_with(".toml")) {
        Some(path) => match load_config(&PathBuf::from(path)) {
            Ok(config) => (config, &args[1..]),
            Err(e) => {
                tracing::error!("Failed to load configuration: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => (DialogConfig::default(), &args[..]),
    };
    let signal = rest.first().map_or("confirmDeleteItem", String::as_str);
    let params = parse_params(rest.get(1..).unwrap_or_default());

    let factory = match DialogFactoryBuilder::new()
        .config(config)
        .session_store(Arc::new(InMemorySessionStore::new()))
        .build()
    {
        Ok(factory) => factory,
        Err(e) => {
            tracing::error!("Invalid dialog configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&factory, signal, params).await {
        match e.downcast_ref::<DialogError>() {
            Some(err) if err.is_expected() => tracing::warn!("Request rejected: {err}"),
            _ => tracing::error!("Demo failed: {e:#}"),
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
