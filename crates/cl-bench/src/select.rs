//! Plattform‑ und Geräteauswahl über stdin.

use std::io::{BufRead, Write};

use opencl3::{
    device::{Device, CL_DEVICE_TYPE_ALL},
    platform::{get_platforms, Platform},
    types::cl_device_id,
};

use crate::ClError;

/// Index gegen die gemeldete Anzahl prüfen
pub fn checked_index(what: &'static str, index: usize, count: usize) -> Result<usize, ClError> {
    if index < count {
        Ok(index)
    } else {
        Err(ClError::IndexOutOfRange { what, index, count })
    }
}

/// liest das nächste Token wie `scanf("%d")`: führender Whitespace (auch
/// Zeilenumbrüche) wird übersprungen, der Rest der Zeile bleibt im Puffer
pub fn read_index<R: BufRead>(input: &mut R) -> Result<usize, ClError> {
    let mut token = Vec::new();
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let skip = if token.is_empty() {
            buf.iter().take_while(|b| b.is_ascii_whitespace()).count()
        } else {
            0
        };
        let rest = &buf[skip..];
        let len = rest.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&rest[..len]);
        let delimited = len < rest.len();
        input.consume(skip + len);
        if delimited {
            break;
        }
    }

    let token = String::from_utf8_lossy(&token);
    token
        .parse::<usize>()
        .map_err(|_| ClError::InvalidSelection(token.into_owned()))
}

/// Listet `names`, fragt einen Index ab und validiert ihn.
///
/// Ausgabe entspricht dem Protokoll der Demo‑Programme:
/// `INFO: Found N <plural>.`, dann `i. name` pro Eintrag, dann `prompt`.
pub fn prompt_selection<R: BufRead, W: Write>(
    what: &'static str,
    plural: &str,
    prompt: &str,
    names: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<usize, ClError> {
    writeln!(out, "INFO: Found {} {}.", names.len(), plural)?;
    for (i, name) in names.iter().enumerate() {
        writeln!(out, "{i}. {name}")?;
    }
    writeln!(out, "{prompt}")?;
    out.flush()?;

    let index = read_index(input)?;
    checked_index(what, index, names.len())
}

pub fn choose_platform<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Platform, ClError> {
    let mut platforms = get_platforms()?;
    let names = platforms
        .iter()
        .map(|p| p.name())
        .collect::<Result<Vec<_>, _>>()?;

    let idx = prompt_selection(
        "platform",
        "platforms",
        "INFO: Select platform from above.",
        &names,
        input,
        out,
    )?;
    log::debug!("platform {idx} selected: {}", names[idx]);
    Ok(platforms.swap_remove(idx))
}

/// Alle Geräte der Plattform plus den gewählten Index.
/// Die Liste wird komplett gebraucht, weil der Kontext alle Geräte umfasst.
pub fn choose_device<R: BufRead, W: Write>(
    platform: &Platform,
    input: &mut R,
    out: &mut W,
) -> Result<(Vec<cl_device_id>, usize), ClError> {
    let device_ids = platform.get_devices(CL_DEVICE_TYPE_ALL)?;
    let names = device_ids
        .iter()
        .map(|&id| Device::new(id).name())
        .collect::<Result<Vec<_>, _>>()?;

    let idx = prompt_selection(
        "device",
        "devices",
        "INFO: Select one of the devices from the above.",
        &names,
        input,
        out,
    )?;
    log::debug!("device {idx} selected: {}", names[idx]);
    Ok((device_ids, idx))
}
