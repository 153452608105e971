use std::{
    path::Path,
    process::{Command, Stdio},
};

use crate::RenderError;

/// Opens `path` with the platform's default image viewer.
pub(crate) fn open(path: &Path) -> Result<(), RenderError> {
    let mut command = viewer_command(path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit());
    log::debug!("Running {command:?}");

    let viewer_error = |reason: String| RenderError::Viewer {
        path: path.to_path_buf(),
        reason,
    };
    let status = command.status().map_err(|e| viewer_error(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(viewer_error(format!("viewer exited with {status}")))
    }
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
