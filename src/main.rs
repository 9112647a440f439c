// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use toastkit::cli::{self, Flags};
use toastkit::config::{self, paths};
use toastkit::notifications::{recv_event, Manager, ToastDriver, ToastEventKind, TokioClock};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "toastkit=info".into()),
        )
        .init();

    let flags = match cli::parse_flags(std::env::args_os().skip(1).collect()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };
    if flags.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(flags)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(flags: Flags) -> toastkit::error::Result<()> {
    paths::init_cli_override(flags.config_dir.clone())?;
    let (config, warning) = config::load();
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let zone = flags.zone.unwrap_or_else(|| config.default_zone());
    let duration = flags.duration.unwrap_or_else(|| config.default_duration());
    if duration.is_persistent() {
        warn!("duration 0 never expires; press Ctrl+C to stop");
    }

    let manager = Manager::with_clock(TokioClock).with_defaults(&config);
    let (driver, handle) = ToastDriver::new(manager, config.tick_interval());
    let mut events = handle.subscribe();

    for n in 1..=flags.count {
        let message = if flags.count > 1 {
            format!("{} ({n}/{})", flags.message, flags.count)
        } else {
            flags.message.clone()
        };
        handle.show(message, zone, duration)?;
    }

    let printer = tokio::spawn(async move {
        while let Some(event) = recv_event(&mut events).await {
            match event.kind {
                ToastEventKind::Shown(zone) => info!(id = %event.id, %zone, "shown"),
                ToastEventKind::Closing(reason) => info!(id = %event.id, ?reason, "closing"),
                ToastEventKind::Removed => info!(id = %event.id, "removed"),
                ToastEventKind::Discarded => info!(id = %event.id, "discarded"),
            }
        }
    });

    driver.exit_when_idle(true).run().await;
    drop(handle);
    printer.await.ok();
    Ok(())
}
