//! End-to-end tests for the add/init workflows with an in-memory remote.

use agmd::error::{AgmdError, Result};
use agmd::fetch::AgentsSource;
use agmd::workflow::{add_mapping, init_manifest, InitOutcome};
use similar_asserts::assert_eq;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn add_without_manifest_reports_missing_config() {
    let project = TestProject::new();
    let remote = FakeRemote::new(&[("octo/repo", "# Remote")]);

    let err = add_mapping(project.root(), "octo/repo", ".", &remote).unwrap_err();

    assert!(matches!(err, AgmdError::MissingConfig { .. }));
    assert!(err.to_string().contains("agmd init"));
    assert!(!project.root().join("agmd.yml").exists());
    assert!(!project.root().join("AGENTS.md").exists());
}

#[test]
fn add_to_empty_manifest_writes_mapping_and_document() {
    let project = TestProject::new();
    project.init();
    let remote = FakeRemote::new(&[("octo/repo", "\n\n# Octo rules\n- be nice\n\n")]);

    let outcome = add_mapping(project.root(), "octo/repo", "docs", &remote).unwrap();

    assert_eq!(outcome.key, "docs".to_string());
    assert_eq!(outcome.slug, "octo/repo".to_string());
    assert_eq!(outcome.files.agents, project.root().join("AGENTS.md"));
    assert_eq!(project.read("agmd.yml"), "mappings:\n  \"docs\": \"octo/repo\"\n".to_string());
    assert_eq!(project.read("AGENTS.md"), "# Octo rules\n- be nice\n".to_string());
}

#[test]
fn remote_sections_precede_local_override() {
    let project = TestProject::new();
    project
        .write("agmd.yml", "mappings:\n  \".\": \"octo/base\"\n  \"api\": \"octo/api/docs\"\n");
    project.write("AGENTS.local.md", "# Local\nproject specifics\n");
    let remote = FakeRemote::new(&[
        ("octo/base", "# Base\n"),
        ("octo/api/docs", "# API\n"),
        ("octo/web", "# Web"),
    ]);

    add_mapping(project.root(), "octo/web", "web", &remote).unwrap();

    assert_eq!(
        project.read("AGENTS.md"),
        "# Base\n\n# API\n\n# Web\n\n# Local\nproject specifics\n".to_string()
    );
}

#[test]
fn readding_a_key_updates_in_place() {
    let project = TestProject::new();
    project.write("agmd.yml", "mappings:\n  \"a\": \"octo/one\"\n  \"b\": \"octo/two\"\n");
    let remote = FakeRemote::new(&[("octo/one", "one"), ("octo/two", "two"), ("octo/new", "new")]);

    add_mapping(project.root(), "octo/new", "./a/", &remote).unwrap();

    assert_eq!(
        project.read("agmd.yml"),
        "mappings:\n  \"a\": \"octo/new\"\n  \"b\": \"octo/two\"\n".to_string()
    );
    assert_eq!(project.read("AGENTS.md"), "new\n\ntwo\n".to_string());
}

#[test]
fn fetch_failure_keeps_updated_manifest_and_previous_document() {
    let project = TestProject::new();
    project.init();
    project.write("AGENTS.md", "previous\n");
    let remote = FakeRemote::new(&[]);

    let err = add_mapping(project.root(), "octo/missing", ".", &remote).unwrap_err();

    assert!(matches!(err, AgmdError::Fetch { .. }));
    assert_eq!(project.read("agmd.yml"), "mappings:\n  \".\": \"octo/missing\"\n".to_string());
    assert_eq!(project.read("AGENTS.md"), "previous\n".to_string());
}

#[test]
fn invalid_slug_is_persisted_before_failing() {
    let project = TestProject::new();
    project.init();

    let err = add_mapping(project.root(), "octo", ".", &FakeRemote::new(&[])).unwrap_err();

    assert!(matches!(err, AgmdError::InvalidSlug { .. }));
    assert_eq!(project.read("agmd.yml"), "mappings:\n  \".\": \"octo\"\n".to_string());
}

#[test]
fn path_outside_root_leaves_manifest_untouched() {
    let project = TestProject::new();
    project.init();

    let err =
        add_mapping(project.root(), "octo/repo", "../../etc", &FakeRemote::new(&[])).unwrap_err();

    assert!(matches!(err, AgmdError::OutOfRoot { .. }));
    assert_eq!(project.read("agmd.yml"), "mappings: {}\n".to_string());
}

#[test]
fn nested_start_directory_resolves_paths_from_project_root() {
    let project = TestProject::new();
    project.init();
    let nested = project.root().join("crates").join("core");
    fs::create_dir_all(&nested).expect("nested dir");
    let remote = FakeRemote::new(&[("octo/repo", "content")]);

    let outcome = add_mapping(&nested, "  octo/repo  ", "crates/core", &remote).unwrap();

    assert_eq!(outcome.key, "crates/core".to_string());
    assert_eq!(outcome.slug, "octo/repo".to_string());
    assert_eq!(
        project.read("agmd.yml"),
        "mappings:\n  \"crates/core\": \"octo/repo\"\n".to_string()
    );
    assert!(!nested.join("AGENTS.md").exists());
}

#[test]
fn init_creates_once_and_never_overwrites() {
    let project = TestProject::new();

    let first = init_manifest(project.root()).unwrap();
    assert_eq!(first, InitOutcome::Created(project.root().join("agmd.yml")));
    assert_eq!(project.read("agmd.yml"), "mappings: {}\n".to_string());

    project.write("agmd.yml", "mappings:\n  \"a\": \"b/c\"\n");
    let second = init_manifest(project.root()).unwrap();
    assert_eq!(second, InitOutcome::AlreadyExists(project.root().join("agmd.yml")));
    assert_eq!(project.read("agmd.yml"), "mappings:\n  \"a\": \"b/c\"\n".to_string());
}

#[test]
fn empty_composition_writes_empty_document() {
    let project = TestProject::new();
    project.init();
    let remote = FakeRemote::new(&[("octo/blank", "   \n")]);

    add_mapping(project.root(), "octo/blank", ".", &remote).unwrap();

    assert!(project.root().join("AGENTS.md").exists());
    assert_eq!(project.read("AGENTS.md"), String::new());
}

#[test]
fn non_utf8_remote_fails_without_writing_document() {
    let project = TestProject::new();
    project.init();

    let err = add_mapping(project.root(), "octo/repo", ".", &BinaryRemote).unwrap_err();

    assert!(matches!(err, AgmdError::InvalidUtf8 { .. }));
    assert_eq!(project.read("agmd.yml"), "mappings:\n  \".\": \"octo/repo\"\n".to_string());
    assert!(!project.root().join("AGENTS.md").exists());
}

struct BinaryRemote;

impl AgentsSource for BinaryRemote {
    fn fetch_agents_file(&self, _slug: &str) -> Result<Vec<u8>> {
        Ok(vec![b'#', b' ', 0xff, 0xfe, b'x'])
    }
}

struct FakeRemote {
    files: HashMap<String, String>,
}

impl FakeRemote {
    fn new(files: &[(&str, &str)]) -> Self {
        Self { files: files.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect() }
    }
}

impl AgentsSource for FakeRemote {
    fn fetch_agents_file(&self, slug: &str) -> Result<Vec<u8>> {
        let url = agmd::fetch::GithubSlug::parse(slug)?.raw_url("https://raw.example.test");
        match self.files.get(slug) {
            Some(body) => Ok(body.clone().into_bytes()),
            None => Err(AgmdError::Fetch {
                slug: slug.to_string(),
                url,
                source: "HTTP status client error (404 Not Found)".into(),
            }),
        }
    }
}

struct TestProject {
    temp: TempDir,
}

impl TestProject {
    fn new() -> Self {
        let temp = TempDir::new().expect("temp project");
        fs::create_dir(temp.path().join(".git")).expect("git marker");
        Self { temp }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn init(&self) {
        init_manifest(self.root()).expect("init manifest");
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.root().join(name), content).expect("write fixture file");
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root().join(name)).expect("read project file")
    }
}
