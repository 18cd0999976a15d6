//! Outbound links (LinkedIn profile, `mailto:`).
//!
//! Native builds hand the URL to the platform opener; WASM builds open a new
//! browser tab. Either way the result is fire-and-forget.

#[cfg(not(target_arch = "wasm32"))]
use std::process::Command;

/// Open a URL in the default browser or mail client
#[cfg(not(target_arch = "wasm32"))]
pub fn open_url(url: &str) -> std::io::Result<()> {
    spawn_detached(opener_command(url))
}

#[cfg(not(target_arch = "wasm32"))]
fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Spawn `cmd` and reap it on a background thread so repeated clicks leave
/// no zombie processes behind.
#[cfg(not(target_arch = "wasm32"))]
fn spawn_detached(mut cmd: Command) -> std::io::Result<()> {
    let mut child = cmd.spawn()?;
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::warn!(error = %e, "link opener did not exit cleanly");
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn open_url(url: &str) -> std::io::Result<()> {
    let window = web_sys::window()
        .ok_or_else(|| std::io::Error::other("no browser window"))?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|_| std::io::Error::other(format!("browser refused to open {}", url)))?;
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_detached_starts_process() {
        assert!(spawn_detached(Command::new("true")).is_ok());
    }

    #[test]
    fn test_spawn_detached_reports_missing_program() {
        let err = spawn_detached(Command::new("folio-no-such-opener")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_opener_passes_url_through() {
        let cmd = opener_command("mailto:someone@example.com");
        let args: Vec<_> = cmd.get_args().collect();
        assert!(args.iter().any(|a| *a == "mailto:someone@example.com"));
    }
}
