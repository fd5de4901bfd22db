//! Golden-file tests using test-fixtures/
//!
//! A copy of `test-fixtures/rules-root` is used as the workspace so the
//! fixture itself is never modified.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rules_blocks::{BlockKind, Category, blocks_equal, extract};
use rules_core::workflow::{self, CompareOutcome};
use rules_core::{
    DiffPresenter, DiffStrategy, FileSelector, Result, ScriptedInput, Workspace, layout,
};
use rules_fs::{FileStore, NormalizedPath};
use tempfile::TempDir;

// Menu numbering across all categories:
// 1 cline, 2 general, 3 system/linux, 4 system/windows, 5 project,
// 6 language PYTHON, 7 language RUST
const LINUX: &str = "3";
const WINDOWS: &str = "4";

/// Normalize line endings to LF for cross-platform comparison.
fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n")
}

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            let content = fs::read_to_string(entry.path()).unwrap();
            fs::write(&target, normalize_line_endings(&content)).unwrap();
        }
    }
}

/// Fresh copy of the fixture root plus the external file.
fn setup() -> (TempDir, Workspace, NormalizedPath) {
    let temp = TempDir::new().unwrap();
    copy_tree(&fixtures_dir().join("rules-root"), temp.path());
    copy_tree(&fixtures_dir().join("external"), &temp.path().join("external"));

    let workspace = Workspace::load(temp.path()).unwrap();
    let external = NormalizedPath::new(temp.path().join("external/.clinerules"));
    (temp, workspace, external)
}

fn read(path: &NormalizedPath) -> String {
    FileStore::new().read(path).unwrap()
}

struct Recorder {
    seen: Rc<RefCell<Vec<(String, String)>>>,
}

impl DiffStrategy for Recorder {
    fn show(&self, external: &str, local: &str, _kind: &BlockKind) -> Result<()> {
        self.seen.borrow_mut().push((external.to_string(), local.to_string()));
        Ok(())
    }
}

fn recording_presenter() -> (DiffPresenter, Rc<RefCell<Vec<(String, String)>>>) {
    let seen: Rc<RefCell<Vec<(String, String)>>> = Rc::default();
    let presenter = DiffPresenter::with_strategies(
        Box::new(Recorder { seen: seen.clone() }),
        Box::new(Recorder { seen: seen.clone() }),
    );
    (presenter, seen)
}

// ==========================================================================
// Fixture Validity Tests
// ==========================================================================

#[test]
fn test_fixture_layout_is_complete() {
    let (_temp, workspace, _) = setup();
    layout::validate(&workspace).unwrap();

    let counts: Vec<(Category, usize)> = FileSelector::new(&workspace)
        .files_by_category()
        .into_iter()
        .map(|(category, files)| (category, files.len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            (Category::Cline, 1),
            (Category::General, 1),
            (Category::System, 2),
            (Category::Project, 1),
            (Category::Language, 2),
        ]
    );
}

#[test]
fn test_every_fixture_rule_holds_its_own_block() {
    let (_temp, workspace, _) = setup();
    let catalog = workspace.catalog();

    for (_, files) in FileSelector::new(&workspace).files_by_category() {
        for file in files {
            let kind = file.kind(&catalog).unwrap();
            let block = extract(&read(&file.path), kind.category, file.path.as_str()).unwrap();
            assert_eq!(Some(block.marker), kind.marker());
        }
    }
}

// ==========================================================================
// Golden Output
// ==========================================================================

#[test]
fn test_create_matches_expected_output() {
    let (_temp, workspace, _) = setup();

    // cline, general, linux, project, then RUST before PYTHON
    let mut input = ScriptedInput::new(["1", "1", "1", "1", "2", "1"]);
    let written = workflow::create(&workspace, &mut input).unwrap();

    let expected = fs::read_to_string(fixtures_dir().join("expected/.clinerules")).unwrap();
    assert_eq!(read(&written), normalize_line_endings(&expected));
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_created_output_compares_identical_per_block() {
    let (_temp, workspace, _) = setup();
    let mut input = ScriptedInput::new(["1", "1", "1", "1", "2", "1"]);
    let output = workflow::create(&workspace, &mut input).unwrap();

    let (presenter, seen) = recording_presenter();
    for choice in ["1", "2", LINUX, "5", "6", "7"] {
        let mut input = ScriptedInput::new([choice]);
        let outcome = workflow::compare(&workspace, &output, &mut input, &presenter).unwrap();
        assert!(matches!(outcome, CompareOutcome::Identical { .. }), "choice {}", choice);
    }
    assert!(seen.borrow().is_empty());
}

// ==========================================================================
// Synchronization Round Trip
// ==========================================================================

#[test]
fn test_compare_shows_system_difference() {
    let (_temp, workspace, external) = setup();
    let (presenter, seen) = recording_presenter();

    let mut input = ScriptedInput::new([LINUX, "1"]);
    let outcome = workflow::compare(&workspace, &external, &mut input, &presenter).unwrap();

    let CompareOutcome::Different { summary, .. } = outcome else {
        panic!("expected a difference, got {:?}", outcome);
    };
    assert_eq!((summary.inserted, summary.deleted), (1, 1));
    assert_eq!(
        seen.borrow()[0],
        (
            "### BEGIN SYSTEM\n- Shell: zsh\n- Paths use forward slashes.".to_string(),
            "### BEGIN SYSTEM\n- Shell: bash\n- Paths use forward slashes.".to_string(),
        )
    );
}

#[test]
fn test_update_external_then_compare_identical() {
    let (_temp, workspace, external) = setup();

    let mut input = ScriptedInput::new([LINUX]);
    workflow::update_external(&workspace, &external, &mut input).unwrap();

    let content = read(&external);
    assert!(content.contains(
        "### BEGIN SYSTEM\n- Shell: bash\n- Paths use forward slashes.\n\n### BEGIN PROJECT"
    ));
    assert!(content.starts_with("### BEGIN GENERAL RULES\n"));

    let (presenter, _) = recording_presenter();
    let mut input = ScriptedInput::new([LINUX]);
    let outcome = workflow::compare(&workspace, &external, &mut input, &presenter).unwrap();
    assert!(matches!(outcome, CompareOutcome::Identical { .. }));
}

#[test]
fn test_update_local_adopts_external_block() {
    let (_temp, workspace, external) = setup();

    let mut input = ScriptedInput::new([WINDOWS]);
    let report = workflow::update_local(&workspace, &external, &mut input).unwrap();

    assert!(report.target.as_str().ends_with("system/clinerules_windows.md"));
    let local = read(&report.target);
    assert_eq!(local, "### BEGIN SYSTEM\n- Shell: zsh\n- Paths use forward slashes.\n");

    let external_block = extract(&read(&external), Category::System, "external").unwrap();
    assert!(blocks_equal(&local, &external_block.text));
}

#[test]
fn test_language_block_missing_from_external() {
    let (_temp, workspace, external) = setup();
    let before = read(&external);

    let mut input = ScriptedInput::new(["7"]);
    let result = workflow::update_external(&workspace, &external, &mut input);

    assert!(result.is_err());
    assert_eq!(read(&external), before);
}
