//! `init` and `add` workflows.
//!
//! Both take the starting directory explicitly and never read process-global
//! state. `add` takes the remote source as a trait object.

use crate::compose::compose_agents_document;
use crate::domain::{Mapping, AGENTS_FILE_NAME, LOCAL_OVERRIDE_FILE_NAME, MANIFEST_FILE_NAME};
use crate::error::{AgmdError, Result};
use crate::fetch::AgentsSource;
use crate::manifest::{load_mappings, save_mappings};
use crate::project::{locate_project_root, normalize_local_path};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Well-known files under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub agents: PathBuf,
    pub local_override: PathBuf,
}

impl ProjectFiles {
    pub fn at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            manifest: root.join(MANIFEST_FILE_NAME),
            agents: root.join(AGENTS_FILE_NAME),
            local_override: root.join(LOCAL_OVERRIDE_FILE_NAME),
        }
    }

    /// Files of the project enclosing `start_dir`.
    pub fn discover(start_dir: &Path) -> Self {
        Self::at(&locate_project_root(start_dir))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub key: String,
    pub slug: String,
    pub files: ProjectFiles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Add or update `local_path -> slug` and regenerate AGENTS.md.
///
/// The manifest is written before any fetch. If composition then fails, the
/// updated manifest stays on disk and AGENTS.md is left untouched.
pub fn add_mapping(
    start_dir: &Path,
    slug: &str,
    local_path: &str,
    source: &dyn AgentsSource,
) -> Result<AddOutcome> {
    let files = ProjectFiles::discover(start_dir);
    let mut mapping = load_mappings(&files.manifest)?;
    let key = normalize_local_path(local_path, &files.root)?;
    let slug = slug.trim().to_string();

    match mapping.insert(key.clone(), slug.clone()) {
        Some(previous) => info!(%key, %previous, %slug, "Updated mapping"),
        None => info!(%key, %slug, "Added mapping"),
    }
    save_mappings(&files.manifest, &mapping)?;

    refresh_agents_document(&files, &mapping, source)?;
    Ok(AddOutcome { key, slug, files })
}

/// Create an empty manifest at the project root unless one already exists.
pub fn init_manifest(start_dir: &Path) -> Result<InitOutcome> {
    let files = ProjectFiles::discover(start_dir);
    if files.manifest.exists() {
        return Ok(InitOutcome::AlreadyExists(files.manifest));
    }
    save_mappings(&files.manifest, &Mapping::new())?;
    info!(path = %files.manifest.display(), "Created manifest");
    Ok(InitOutcome::Created(files.manifest))
}

fn refresh_agents_document(
    files: &ProjectFiles,
    mapping: &Mapping,
    source: &dyn AgentsSource,
) -> Result<()> {
    let document = compose_agents_document(mapping, &files.local_override, source)?;
    fs::write(&files.agents, document).map_err(|e| AgmdError::io(&files.agents, e))?;
    info!(path = %files.agents.display(), "Refreshed AGENTS.md");
    Ok(())
}
