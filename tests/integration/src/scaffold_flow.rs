//! End-to-end flow through the library layers: request -> plan -> execute.

use scaffold_core::{Manifest, ScaffoldRequest, scaffold};
use scaffold_fs::{NormalizedPath, checksum};
use scaffold_templates::TemplateSource;
use scaffold_test_utils::TestParent;
use scaffold_tools::ToolSelection;
use std::fs;

fn request(parent: &TestParent, name: &str, tools: &str) -> ScaffoldRequest {
    ScaffoldRequest {
        name: name.to_string(),
        tools: ToolSelection::parse(tools).unwrap(),
        parent: parent.root().to_path_buf(),
        git: false,
        template_source: TemplateSource::Builtin,
    }
}

#[test]
fn builtin_scaffold_creates_selected_dirs_only() {
    let parent = TestParent::new();

    let report = scaffold(request(&parent, "demo", "claude")).unwrap();

    parent.assert_file_exists("demo/.claude/CLAUDE.md");
    parent.assert_file_exists("demo/.claude/settings.json");
    parent.assert_file_exists("demo/.claude/commands/review.md");
    parent.assert_file_exists("demo/README.md");
    parent.assert_file_exists("demo/.scaffold/manifest.toml");
    parent.assert_file_not_exists("demo/.cursor");
    parent.assert_file_not_exists("demo/.agent");
    parent.assert_file_not_exists("demo/.git");

    assert_eq!(report.created_dirs, vec![".claude"]);
    assert!(report.project_root.ends_with("demo"));
}

#[test]
fn all_tools_create_three_template_dirs() {
    let parent = TestParent::new();

    let report = scaffold(request(&parent, "demo", "all")).unwrap();

    parent.assert_file_exists("demo/.claude");
    parent.assert_file_exists("demo/.cursor/rules/general.mdc");
    parent.assert_file_exists("demo/.agent/AGENT.md");
    assert_eq!(report.created_dirs.len(), 3);
    assert_eq!(report.tools.len(), 4);
}

#[test]
fn manifest_checksums_match_files_on_disk() {
    let parent = TestParent::new();

    scaffold(request(&parent, "demo", "claude,cursor")).unwrap();

    let root = NormalizedPath::new(parent.project("demo"));
    let manifest = Manifest::load(&root).unwrap();
    assert!(!manifest.files.is_empty());

    for file in &manifest.files {
        let on_disk = parent.project("demo").join(&file.path);
        let actual = checksum::compute_file_checksum(&on_disk).unwrap();
        assert_eq!(actual, file.checksum, "checksum drift for {}", file.path);
    }
}

#[test]
fn directory_template_source_is_copied_verbatim() {
    let parent = TestParent::new();
    let templates = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(templates.path().join(".claude/commands")).unwrap();
    fs::write(templates.path().join(".claude/CLAUDE.md"), "custom rules\n").unwrap();
    fs::write(
        templates.path().join(".claude/commands/ship.md"),
        "ship it\n",
    )
    .unwrap();

    let mut req = request(&parent, "demo", "claude");
    req.template_source = TemplateSource::Directory(NormalizedPath::new(templates.path()));
    scaffold(req).unwrap();

    parent.assert_file_contains("demo/.claude/CLAUDE.md", "custom rules");
    parent.assert_file_contains("demo/.claude/commands/ship.md", "ship it");
    // Builtin content must not leak into a directory-sourced scaffold
    parent.assert_file_not_exists("demo/.claude/settings.json");
}

#[test]
fn directory_source_missing_tool_dir_fails_after_creating_target() {
    let parent = TestParent::new();
    let templates = tempfile::TempDir::new().unwrap();
    // Template root exists but holds no .cursor directory

    let mut req = request(&parent, "demo", "cursor");
    req.template_source = TemplateSource::Directory(NormalizedPath::new(templates.path()));
    let result = scaffold(req);

    assert!(result.is_err());
}

#[test]
fn existing_target_fails_without_touching_it() {
    let parent = TestParent::new();
    parent.occupy("demo");
    fs::write(parent.project("demo").join("keep.txt"), "precious").unwrap();

    let result = scaffold(request(&parent, "demo", "claude"));

    assert!(result.is_err());
    parent.assert_file_contains("demo/keep.txt", "precious");
    parent.assert_file_not_exists("demo/.claude");
    parent.assert_file_not_exists("demo/README.md");
}

#[test]
fn git_flag_initializes_repository_with_swallowed_commit_failures() {
    let parent = TestParent::new();

    let mut req = request(&parent, "demo", "claude");
    req.git = true;
    let report = scaffold(req).unwrap();

    assert!(report.git_initialized);
    parent.assert_file_exists("demo/.git");
    // Whatever happened with git-secrets and the initial commit, the run
    // succeeded; failures may only appear as warnings.
    assert!(git2::Repository::open(parent.project("demo")).is_ok());
}

#[test]
fn readme_carries_the_project_name() {
    let parent = TestParent::new();

    scaffold(request(&parent, "my-service", "gemini")).unwrap();

    parent.assert_file_contains("my-service/README.md", "# my-service");
    parent.assert_file_exists("my-service/.agent/AGENT.md");
}
