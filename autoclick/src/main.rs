mod catalog;
mod config;
mod control;
mod hotkeys;
mod matcher;
mod report;
mod scanner;

use {
    crate::{config::Config, control::ControlFlags, matcher::Matcher, scanner::Scanner},
    anyhow::Context as _,
    std::{path::Path, sync::Arc, thread::sleep, time::Duration},
    tracing_subscriber::{filter::LevelFilter, EnvFilter},
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env()?,
        )
        .init();

    let config = Config::standard();
    report::banner();

    let ctx = uiauto::Context::new()?;
    let (width, height) = ctx
        .screen_size()
        .context("failed to query screen dimensions")?;
    report::screen_resolution(width, height);

    let flags = Arc::new(ControlFlags::new());

    let interrupt_flags = flags.clone();
    ctrlc::set_handler(move || {
        report::interrupted();
        interrupt_flags.request_exit();
    })
    .context("failed to install interrupt handler")?;

    let _hotkeys = hotkeys::spawn(flags.clone(), config.scan_interval)?;

    let catalog = catalog::load(Path::new(catalog::PREFERRED_DIR), Path::new("."))?;
    let total_clicks = if catalog.is_empty() {
        report::catalog_empty(catalog::PREFERRED_DIR);
        wait_for_exit(&flags, config.scan_interval);
        0
    } else {
        report::catalog(&catalog);
        let mut scanner = Scanner::new(&catalog, Matcher::new(ctx, config));
        scanner.run(&flags, config.scan_interval);
        scanner.clicks()
    };

    report::shutdown(total_clicks);
    Ok(())
}

/// Keeps the process alive for the exit hotkey when there is nothing to scan.
fn wait_for_exit(flags: &ControlFlags, interval: Duration) {
    while flags.is_running() {
        sleep(interval);
    }
}
