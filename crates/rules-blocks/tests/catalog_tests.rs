//! Integration tests for category inference and marker resolution.

use rstest::rstest;
use rules_blocks::{BlockKind, Category, CategoryCatalog, category_of, language_of, marker_for};

#[rstest]
#[case("/home/u/rules/clinerules/general/clinerules_base.md", Some(Category::General))]
#[case("/home/u/rules/clinerules/system/clinerules_core.md", Some(Category::System))]
#[case("/home/u/rules/clinerules/project/clinerules_app.md", Some(Category::Project))]
#[case("/home/u/clinerules/languages/clinerules_language_PYTHON.md", Some(Category::Language))]
#[case("/home/u/rules/clinerules/cline/clinerules_cline.md", Some(Category::Cline))]
#[case("/home/u/rules/clinerules/other/clinerules_x.md", None)]
#[case("/home/u/rules/system/clinerules_core.md", None)]
#[case("clinerules_core.md", None)]
#[case("/u/clinerules/clinerules/system/clinerules_core.md", Some(Category::System))]
#[case("/u/clinerules/project/clinerules/languages/a.md", Some(Category::Language))]
#[case("/u/clinerules/system/clinerules/notes.md", Some(Category::System))]
fn test_category_of(#[case] path: &str, #[case] expected: Option<Category>) {
    assert_eq!(category_of(path), expected);
}

#[rstest]
#[case(Category::General, "clinerules_general.md", Some("### BEGIN GENERAL RULES"))]
#[case(Category::System, "clinerules_core.md", Some("### BEGIN SYSTEM"))]
#[case(Category::Project, "clinerules_app.md", Some("### BEGIN PROJECT"))]
#[case(Category::Cline, "clinerules_cline.md", Some("### BEGIN CLINE"))]
#[case(Category::Language, "clinerules_language_python.md", Some("### BEGIN LANGUAGE PYTHON"))]
#[case(Category::Language, "CLINERULES_LANGUAGE_Ts.MD", Some("### BEGIN LANGUAGE TS"))]
#[case(Category::Language, "clinerules_python.md", None)]
fn test_marker_for(
    #[case] category: Category,
    #[case] filename: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(marker_for(category, filename).as_deref(), expected);
}

#[test]
fn test_language_tag_from_full_path() {
    let path = "/r/clinerules/languages/clinerules_language_PYTHON.md";
    let kind = CategoryCatalog::default().kind_of(path).unwrap();
    assert_eq!(kind.category, Category::Language);
    assert_eq!(kind.language.as_deref(), Some("PYTHON"));
}

#[test]
fn test_language_tag_only_for_language_category() {
    let kind = BlockKind::new(Category::System, "clinerules_language_python.md");
    assert_eq!(kind.language, None);
    assert_eq!(kind.marker().as_deref(), Some("### BEGIN SYSTEM"));
}

#[test]
fn test_language_of_with_digits_and_underscores() {
    assert_eq!(language_of("clinerules_language_c_99.md").as_deref(), Some("C_99"));
}

#[test]
fn test_custom_anchor() {
    let catalog = CategoryCatalog::new("rules");
    assert_eq!(catalog.category_of("/x/rules/project/a.md"), Some(Category::Project));
    assert_eq!(catalog.category_of("/x/clinerules/project/a.md"), None);
}

#[test]
fn test_dir_names_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_dir_name(category.dir_name()), Some(category));
    }
}
