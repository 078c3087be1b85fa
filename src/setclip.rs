//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use anyhow::{Context, Result, anyhow};
use arboard::Clipboard;
use std::{env, process, thread, time::Duration};

const DAEMON_ENV: &str = "CLIPBOARD_DAEMON";
const SECRET_ENV: &str = "CLIPBOARD_SECRET";
const TTL_ENV: &str = "CLIPBOARD_TTL";

const DEFAULT_TTL_SECS: u64 = 30;

/// Whether this process was re-executed as the clipboard-clearing daemon.
pub fn is_daemon() -> bool {
    env::var(DAEMON_ENV).is_ok()
}

fn spawn_daemon(secret: &str, ttl_secs: u64) -> Result<()> {
    let exe_path = env::current_exe().context("Failed to locate current executable")?;

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(TTL_ENV, ttl_secs.to_string())
            .stderr(process::Stdio::inherit())
            .process_group(0);

        cmd.spawn().context("Failed to spawn clipboard daemon")?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(TTL_ENV, ttl_secs.to_string())
            .stderr(process::Stdio::inherit())
            .creation_flags(0x08000000); // CREATE_NO_WINDOW

        cmd.spawn().context("Failed to spawn clipboard daemon")?;
    }

    Ok(())
}

fn daemon_task(secret: &str, ttl_secs: u64) -> Result<()> {
    thread::sleep(Duration::from_secs(ttl_secs));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("[clipboard daemon] Clipboard initialization failed: {}", e);
            return Ok(());
        }
    };

    let current_content = ctx.get_text().unwrap_or_else(|_| String::new());

    // Clear only if the clipboard still holds our secret
    if current_content == secret {
        if let Err(e) = ctx.set_text("") {
            eprintln!("[clipboard daemon] Failed to clear clipboard: {}", e);
        }
    }

    Ok(())
}

/// Daemon entry point, reached when the binary is re-executed with the
/// daemon environment variables set. Reads the secret and delay from the
/// environment, waits, then clears the clipboard if it was not changed.
pub fn run_daemon() -> Result<()> {
    let secret =
        env::var(SECRET_ENV).map_err(|_| anyhow!("Missing {} environment variable", SECRET_ENV))?;
    let ttl_secs = env::var(TTL_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TTL_SECS);
    daemon_task(&secret, ttl_secs)
}

/// Copy a secret to the system clipboard, then hand off to a detached
/// re-execution of this binary that clears it after `ttl_secs` seconds.
pub fn copy_to_clipboard(secret: &str, ttl_secs: u64) -> Result<()> {
    let mut ctx = Clipboard::new().context("Failed to initialize clipboard")?;
    ctx.set_text(secret).context("Failed to set clipboard text")?;
    spawn_daemon(secret, ttl_secs)?;
    Ok(())
}
