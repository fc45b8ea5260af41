//! Reading and writing `agmd.yml`.
//!
//! The manifest is a narrow YAML subset: a single top-level `mappings:` key
//! followed by one `"<path>": "<github-path>"` line per entry, where both
//! scalars are JSON-encoded strings. An empty mapping is written as
//! `mappings: {}`. This is a line parser for exactly that shape, not a YAML
//! implementation.

use crate::domain::Mapping;
use crate::error::{AgmdError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

const HEADER: &str = "mappings:";
const EMPTY_DOCUMENT: &str = "mappings: {}";
const LINE_FORMAT_HINT: &str = r#"Expected format: "<path>": "<github-path>""#;

/// Load the manifest at `path`.
pub fn load_mappings(path: &Path) -> Result<Mapping> {
    if !path.exists() {
        return Err(AgmdError::MissingConfig { path: path.to_path_buf() });
    }
    let content = fs::read_to_string(path).map_err(|e| AgmdError::io(path, e))?;
    let mapping = parse_mappings(&content, path)?;
    debug!(path = %path.display(), entries = mapping.len(), "Loaded manifest");
    Ok(mapping)
}

/// Write `mapping` to `path`, replacing any existing manifest.
pub fn save_mappings(path: &Path, mapping: &Mapping) -> Result<()> {
    fs::write(path, render_mappings(mapping)).map_err(|e| AgmdError::io(path, e))?;
    debug!(path = %path.display(), entries = mapping.len(), "Saved manifest");
    Ok(())
}

/// Parse manifest text. `origin` is only used in error messages.
pub fn parse_mappings(content: &str, origin: &Path) -> Result<Mapping> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let Some(first) = lines.next().map(str::trim) else {
        return Ok(Mapping::new());
    };

    let rest: Vec<&str> = lines.collect();
    if first == EMPTY_DOCUMENT && rest.is_empty() {
        return Ok(Mapping::new());
    }
    if first != HEADER {
        return Err(AgmdError::invalid_config(origin, "expected top-level `mappings:` key"));
    }

    let mut mapping = Mapping::new();
    for line in rest {
        let (key, slug) = parse_entry(line.trim()).ok_or_else(|| {
            let detail = format!("invalid mapping line {line:?}. {LINE_FORMAT_HINT}");
            AgmdError::invalid_config(origin, detail)
        })?;
        mapping.insert(key, slug);
    }
    Ok(mapping)
}

/// Render `mapping` in the manifest format, with a trailing newline.
pub fn render_mappings(mapping: &Mapping) -> String {
    if mapping.is_empty() {
        return format!("{EMPTY_DOCUMENT}\n");
    }

    let mut out = String::from(HEADER);
    out.push('\n');
    for (path, slug) in mapping.iter() {
        out.push_str("  ");
        out.push_str(&encode_scalar(path));
        out.push_str(": ");
        out.push_str(&encode_scalar(slug));
        out.push('\n');
    }
    out
}

/// `"<key>": "<value>"`, tolerant of whitespace around the colon.
fn parse_entry(line: &str) -> Option<(String, String)> {
    let (key_literal, rest) = split_quoted(line)?;
    let value_part = rest.trim_start().strip_prefix(':')?.trim();
    let (value_literal, trailing) = split_quoted(value_part)?;
    if !trailing.trim().is_empty() {
        return None;
    }
    Some((decode_scalar(key_literal)?, decode_scalar(value_literal)?))
}

/// Split a leading JSON string literal (quotes included) from the remainder.
fn split_quoted(input: &str) -> Option<(&str, &str)> {
    if !input.starts_with('"') {
        return None;
    }
    let mut escaped = false;
    for (idx, ch) in input.char_indices().skip(1) {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(input.split_at(idx + 1)),
            _ => {}
        }
    }
    None
}

fn decode_scalar(literal: &str) -> Option<String> {
    serde_json::from_str(literal).ok()
}

fn encode_scalar(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
