//! Aggregate AGENTS.md composition.

use crate::domain::Mapping;
use crate::error::{AgmdError, Result};
use crate::fetch::AgentsSource;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Compose the aggregate document from every mapped remote, in mapping
/// order, followed by the local override file when it exists.
///
/// Sections are trimmed, empty ones are skipped, and the rest are joined by a
/// single blank line with one trailing newline. No sections yields `""`.
/// The first failed fetch or non-UTF-8 body aborts composition.
pub fn compose_agents_document(
    mapping: &Mapping,
    local_override: &Path,
    source: &dyn AgentsSource,
) -> Result<String> {
    let mut sections: Vec<String> = Vec::with_capacity(mapping.len() + 1);

    for slug in mapping.slugs() {
        let bytes = source.fetch_agents_file(slug)?;
        let remote = String::from_utf8(bytes)
            .map_err(|source| AgmdError::InvalidUtf8 { slug: slug.to_string(), source })?;
        push_section(&mut sections, &remote);
    }

    if local_override.exists() {
        let local =
            fs::read_to_string(local_override).map_err(|e| AgmdError::io(local_override, e))?;
        push_section(&mut sections, &local);
    }

    debug!(sections = sections.len(), "Composed AGENTS.md");
    if sections.is_empty() {
        return Ok(String::new());
    }
    Ok(sections.join("\n\n") + "\n")
}

fn push_section(sections: &mut Vec<String>, content: &str) {
    let trimmed = content.trim();
    if !trimmed.is_empty() {
        sections.push(trimmed.to_string());
    }
}
