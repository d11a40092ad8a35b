//! Command dispatch.
//!
//! Commands are matched on their first letter, so `i`, `info` and `inf` are
//! the same command.

use std::io::Write;

use log::{debug, warn};
use wlinfo::{Registry, WlinfoError, report};

pub const USAGE: &str = "\
Usage:
\twlinfo <device> info
\twlinfo <device> scan
\twlinfo <device> txpowerlist
\twlinfo <device> freqlist
\twlinfo <device> assoclist
\twlinfo <device> countrylist
\twlinfo <device> htmodelist
\twlinfo <backend> phyname <section>
";

/// Runs one invocation and returns the process exit status.
///
/// `words` are the positional arguments. Report text goes to `out`,
/// diagnostics to `err`.
pub fn execute(
    registry: &Registry,
    words: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<u8> {
    match words {
        [] => summarize_all(registry, out),
        [_] => {
            err.write_all(USAGE.as_bytes())?;
            Ok(1)
        }
        [backend, command, name, ..] => backend_command(registry, backend, command, name, out, err),
        [device, commands @ ..] => device_commands(registry, device, commands, out, err),
    }
}

fn summarize_all(registry: &Registry, out: &mut dyn Write) -> anyhow::Result<u8> {
    let devices = match registry.enumerate_devices() {
        Ok(devices) => devices,
        Err(e) => {
            warn!("cannot list network interfaces: {e}");
            return Ok(0);
        }
    };

    for device in &devices {
        match registry.open(device) {
            Ok(session) => {
                writeln!(out, "{}", report::info(session.backend(), device))?;
            }
            Err(WlinfoError::NoSuchDevice(_)) => {}
            Err(e) => warn!("skipping {device}: {e}"),
        }
    }
    Ok(0)
}

fn backend_command(
    registry: &Registry,
    backend: &str,
    command: &str,
    name: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<u8> {
    let session = match registry.open_backend(backend) {
        Ok(session) => session,
        Err(WlinfoError::NoSuchBackend(_)) => {
            writeln!(err, "No such wireless backend: {backend}")?;
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    if command == "path" {
        if let Some(path) = report::lookup_path(session.backend(), name) {
            writeln!(out, "{path}")?;
        }
        return Ok(0);
    }

    match command.chars().next() {
        Some('p') => match report::lookup_phy(session.backend(), name) {
            Ok(phy) => writeln!(out, "{phy}")?,
            Err(e) => writeln!(err, "{e}")?,
        },
        _ => {
            writeln!(err, "Unknown command: {command}")?;
            return Ok(1);
        }
    }
    Ok(0)
}

fn device_commands(
    registry: &Registry,
    device: &str,
    commands: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<u8> {
    let session = match registry.open(device) {
        Ok(session) => session,
        Err(WlinfoError::NoSuchDevice(_)) => {
            writeln!(err, "No such wireless device: {device}")?;
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };
    let backend = session.backend();
    debug!("{device} handled by {}", backend.name());

    let mut status = 0;
    for command in commands {
        let text = match command.chars().next() {
            Some('i') => report::info(backend, device),
            Some('s') => report::scanlist(backend, device),
            Some('t') => report::txpwrlist(backend, device),
            Some('f') => report::freqlist(backend, device),
            Some('a') => report::assoclist(backend, device),
            Some('c') => report::countrylist(backend, device),
            Some('h') => report::htmodelist(backend, device),
            _ => {
                writeln!(err, "Unknown command: {command}")?;
                status = 1;
                continue;
            }
        };
        out.write_all(text.as_bytes())?;
    }
    Ok(status)
}
