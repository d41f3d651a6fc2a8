//! Monitor Size Compare
//!
//! A desktop tool that overlays smaller monitor sizes on top of a reference
//! monitor so their physical screen areas can be compared at a glance.

// Hide console window on Windows for GUI mode
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod config;
mod gui;
mod monitor;
mod paths;

use anyhow::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

/// Logs a message to both console and log file with timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::get_log_path())
    {
        let _ = file.write_all(line.as_bytes());
    }
}

fn main() -> Result<()> {
    // Set up panic hook to log panics
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        let location = if let Some(loc) = panic_info.location() {
            format!(" at {}:{}:{}", loc.file(), loc.line(), loc.column())
        } else {
            String::new()
        };
        log(&format!("[PANIC]{} {}", location, msg));
    }));

    // Ensure output directories exist
    paths::ensure_directories()?;

    config::init_config();
    let config = config::get_config();

    log("Starting GUI application...");
    match gui::run_gui(config) {
        Ok(()) => {
            log("GUI application exited normally");
            Ok(())
        }
        Err(e) => {
            log(&format!("GUI error: {:#}", e));
            Err(e)
        }
    }
}
