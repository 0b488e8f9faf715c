// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{Script, Toaster};
use iced_toasts::config;
use iced_toasts::error::{Error, Result};
use iced_toasts::queue::Event;
use iced_toasts::toast::ToastPresentation;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_toasts [OPTIONS] [TITLE...]

Shows toasts one at a time and logs every transition.

Options:
  --config-dir DIR   Read settings.toml from DIR
  --script PATH      Enqueue the [[toast]] entries of a TOML script
  -h, --help         Print this help
";

struct Flags {
    config_dir: Option<PathBuf>,
    script: Option<PathBuf>,
    titles: Vec<String>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let script = args.opt_value_from_str("--script")?;
    let titles = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    Ok(Some(Flags {
        config_dir,
        script,
        titles,
    }))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(flags: Flags) -> Result<()> {
    let (settings, warning) = config::load_with_override(flags.config_dir);
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default settings");
    }

    let mut script = match &flags.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };
    script.entries.extend(
        Script::from_titles(flags.titles, settings.toasts.duration_secs()).entries,
    );
    if script.is_empty() {
        tracing::info!("nothing to show");
        return Ok(());
    }

    let (toaster, handle) = Toaster::new(settings.toasts.tap_policy());
    let mut current = toaster.subscribe();
    let mut events = toaster.events();
    let runner = tokio::spawn(toaster.run());

    // Stand-in renderer: print the card whenever the current toast changes.
    let renderer = tokio::spawn(async move {
        while current.changed().await.is_ok() {
            if let Some(config) = current.borrow_and_update().as_ref() {
                let card = ToastPresentation::from(config);
                let action = card.button_label.map(|l| format!(" [{l}]")).unwrap_or_default();
                println!("{} {}{}", card.icon.glyph(), card.headline(), action);
            }
        }
    });

    let listener = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let Event::Queued { id, position } = event {
                tracing::debug!(toast = %id, position, "waiting for its turn");
            }
        }
    });

    let mut delivered = Ok(());
    for entry in script.entries {
        if !entry.delay().is_zero() {
            tokio::time::sleep(entry.delay()).await;
        }
        delivered = handle.enqueue(entry.toast);
        if delivered.is_err() {
            break;
        }
    }
    drop(handle);

    // Each task ends once the toaster is done and its channels close.
    if let Err(err) = runner.await {
        tracing::error!(%err, "toaster task failed");
        return Err(Error::from(err));
    }
    let _ = renderer.await;
    let _ = listener.await;
    delivered
}
