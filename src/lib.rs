//! agmd: keep AGENTS.md in sync with GitHub-hosted AGENTS.md files
//!
//! A project-local `agmd.yml` maps project paths to GitHub locations
//! (`owner/repo[/subpath]`). Every `add` rewrites the manifest and rebuilds
//! `AGENTS.md` from the remote files plus an optional `AGENTS.local.md`.

pub mod cli;
pub mod compose;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod project;
pub mod workflow;
