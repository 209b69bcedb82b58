//! Panic handling
//!
//! A panic must leave the terminal usable: raw mode and the alternate screen
//! are torn down before anything is printed.

use std::{panic, process};

#[cfg(debug_assertions)]
use better_panic::{Settings, Verbosity};
use color_eyre::{config::HookBuilder, eyre::Result};

use crate::infrastructure::tui::{real::RealTui, TuiLike};

fn restore_terminal() {
    match RealTui::new() {
        Ok(mut tui) => {
            if let Err(e) = tui.exit() {
                log::error!("Unable to restore terminal: {e:?}");
            }
        }
        Err(e) => log::error!("Unable to open terminal for restore: {e:?}"),
    }
}

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it to {}",
            env!("CARGO_PKG_AUTHORS")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("panic: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};

            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "));
            let dump = handle_dump(&meta, panic_info);
            if let Err(e) = print_msg(dump, &meta) {
                eprintln!("failed to print crash report: {e}");
            }
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(Verbosity::Full)
            .create_panic_handler()(panic_info);

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
