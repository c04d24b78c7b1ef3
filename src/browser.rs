use std::{
    env,
    process::{Command, Stdio},
};
use tracing::{debug, info};

use crate::error::ConsoleError;

/// Opens a URL in the user's default browser.
///
/// Each platform family owns the program and arguments it launches with.
/// `open` returns once the opener process has been spawned; its exit status is
/// never inspected.
pub trait BrowserLauncher: Send + Sync {
    /// Program and argument list that open `url`
    fn command(&self, url: &str) -> (String, Vec<String>);

    fn open(&self, url: &str) -> Result<(), ConsoleError> {
        let (program, args) = self.command(url);
        debug!("Launching browser with `{}`", program);

        Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ConsoleError::Launch {
                program: program.clone(),
                source,
            })?;

        info!("Browser launch initiated");
        Ok(())
    }
}

/// `cmd /c start` on Windows
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsLauncher;

impl BrowserLauncher for WindowsLauncher {
    fn command(&self, url: &str) -> (String, Vec<String>) {
        // The empty title keeps `start` from treating the URL as a window title;
        // `&` must be caret-escaped or cmd splits the command line on it.
        let url = url.replace('&', "^&");
        (
            "cmd".to_string(),
            vec!["/c".to_string(), "start".to_string(), String::new(), url],
        )
    }
}

/// `open` on macOS
#[derive(Debug, Clone, Copy, Default)]
pub struct MacLauncher;

impl BrowserLauncher for MacLauncher {
    fn command(&self, url: &str) -> (String, Vec<String>) {
        ("open".to_string(), vec![url.to_string()])
    }
}

/// `xdg-open` on Linux and the BSDs
#[derive(Debug, Clone, Copy, Default)]
pub struct XdgLauncher;

impl BrowserLauncher for XdgLauncher {
    fn command(&self, url: &str) -> (String, Vec<String>) {
        ("xdg-open".to_string(), vec![url.to_string()])
    }
}

/// Launcher for the platform named by `os` (values of `std::env::consts::OS`)
pub fn launcher_for(os: &str) -> Box<dyn BrowserLauncher> {
    match os {
        "windows" => Box::new(WindowsLauncher),
        "macos" => Box::new(MacLauncher),
        _ => Box::new(XdgLauncher),
    }
}

/// Launcher for the host platform
pub fn system_launcher() -> Box<dyn BrowserLauncher> {
    launcher_for(env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str =
        "https://us-east-1.signin.aws.amazon.com/federation?Action=login&SigninToken=abc";

    #[test]
    fn test_windows_command() {
        let (program, args) = WindowsLauncher.command(URL);
        assert_eq!(program, "cmd");
        assert_eq!(args[..3], ["/c", "start", ""]);
        assert_eq!(
            args[3],
            "https://us-east-1.signin.aws.amazon.com/federation?Action=login^&SigninToken=abc"
        );
    }

    #[test]
    fn test_mac_command() {
        let (program, args) = MacLauncher.command(URL);
        assert_eq!(program, "open");
        assert_eq!(args, vec![URL.to_string()]);
    }

    #[test]
    fn test_xdg_command() {
        let (program, args) = XdgLauncher.command(URL);
        assert_eq!(program, "xdg-open");
        assert_eq!(args, vec![URL.to_string()]);
    }

    #[test]
    fn test_launcher_for_platforms() {
        assert_eq!(launcher_for("windows").command(URL).0, "cmd");
        assert_eq!(launcher_for("macos").command(URL).0, "open");
        assert_eq!(launcher_for("linux").command(URL).0, "xdg-open");
        assert_eq!(launcher_for("freebsd").command(URL).0, "xdg-open");
        assert_eq!(launcher_for("openbsd").command(URL).0, "xdg-open");
    }

    struct MissingProgram;

    impl BrowserLauncher for MissingProgram {
        fn command(&self, url: &str) -> (String, Vec<String>) {
            (
                "definitely-not-a-real-url-opener".to_string(),
                vec![url.to_string()],
            )
        }
    }

    #[test]
    fn test_open_missing_program_is_launch_error() {
        let err = MissingProgram.open(URL).unwrap_err();
        match err {
            ConsoleError::Launch { program, .. } => {
                assert_eq!(program, "definitely-not-a-real-url-opener");
            }
            other => panic!("Expected launch error, got {other:?}"),
        }
    }
}
