//! Mapping from file locations to block categories and start markers.
//!
//! Files live under `<root>/clinerules/<category-dir>/`. The directory
//! right after the `clinerules` anchor decides the category, and the
//! category (plus, for languages, the file name) decides the marker that
//! opens the file's block.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix shared by every block marker. The next occurrence of it ends a block.
pub const MARKER_PREFIX: &str = "### BEGIN";

/// Directory segment that anchors category inference.
pub const DEFAULT_ANCHOR: &str = "clinerules";

/// Language file names: `clinerules_language_<LANG>.md`, any case.
static LANGUAGE_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)clinerules_language_(\w+)\.md").expect("Invalid language file regex")
});

/// Block category of a rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    General,
    System,
    Project,
    Language,
    Cline,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 5] = [
        Category::Cline,
        Category::General,
        Category::System,
        Category::Project,
        Category::Language,
    ];

    /// Upper-case tag used in markers and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::System => "SYSTEM",
            Self::Project => "PROJECT",
            Self::Language => "LANGUAGE",
            Self::Cline => "CLINE",
        }
    }

    /// Directory holding this category's files, below the anchor.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::System => "system",
            Self::Project => "project",
            Self::Language => "languages",
            Self::Cline => "cline",
        }
    }

    /// Title-case name for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::System => "System",
            Self::Project => "Project",
            Self::Language => "Language",
            Self::Cline => "Cline",
        }
    }

    /// One-line description of what the category holds.
    pub fn description(&self) -> &'static str {
        match self {
            Self::General => "General rules that apply to all projects",
            Self::System => "System-specific rule files",
            Self::Project => "Project-specific rule files",
            Self::Language => "Language-specific rule files",
            Self::Cline => "Cline-specific rule files",
        }
    }

    /// Inverse of [`Category::dir_name`], case-insensitive.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.dir_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a block together with its language tag, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockKind {
    pub category: Category,
    pub language: Option<String>,
}

impl BlockKind {
    pub fn new(category: Category, filename: &str) -> Self {
        let language = match category {
            Category::Language => language_of(filename),
            _ => None,
        };
        Self { category, language }
    }

    /// Start marker for this kind, `None` for a language block without a tag.
    pub fn marker(&self) -> Option<String> {
        match (self.category, &self.language) {
            (Category::General, _) => Some(format!("{} GENERAL RULES", MARKER_PREFIX)),
            (Category::Language, Some(lang)) => {
                Some(format!("{} LANGUAGE {}", MARKER_PREFIX, lang))
            }
            (Category::Language, None) => None,
            (category, _) => Some(format!("{} {}", MARKER_PREFIX, category)),
        }
    }

    /// Lower-case identifier, e.g. `system` or `language_python`.
    pub fn slug(&self) -> String {
        match &self.language {
            Some(lang) => format!("language_{}", lang.to_lowercase()),
            None => self.category.as_str().to_lowercase(),
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "{} {}", self.category, lang),
            None => write!(f, "{}", self.category),
        }
    }
}

/// Category inference anchored on a directory segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    anchor: String,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR)
    }
}

impl CategoryCatalog {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }

    /// Determine the category of a path from the segment after the anchor.
    ///
    /// Both `/` and `\` separate segments. The innermost anchor followed by
    /// a category directory wins, so ancestors that share the anchor's name
    /// do not matter. Returns `None` when no anchor is followed by a known
    /// category directory.
    pub fn category_of(&self, path: &str) -> Option<Category> {
        let segments: Vec<&str> = path.split(['/', '\\']).filter(|s| !s.is_empty()).collect();
        segments.windows(2).rev().find_map(|pair| match pair {
            [anchor, dir] if anchor.eq_ignore_ascii_case(&self.anchor) => {
                Category::from_dir_name(dir)
            }
            _ => None,
        })
    }

    /// Full block kind of a path: category plus language tag.
    pub fn kind_of(&self, path: &str) -> Option<BlockKind> {
        let category = self.category_of(path)?;
        Some(BlockKind::new(category, file_name(path)))
    }
}

/// [`CategoryCatalog::category_of`] with the default `clinerules` anchor.
pub fn category_of(path: &str) -> Option<Category> {
    CategoryCatalog::default().category_of(path)
}

/// Language tag of a language file name, upper-cased.
///
/// ```
/// use rules_blocks::language_of;
///
/// assert_eq!(language_of("clinerules_language_python.md").as_deref(), Some("PYTHON"));
/// assert_eq!(language_of("clinerules_core.md"), None);
/// ```
pub fn language_of(filename: &str) -> Option<String> {
    LANGUAGE_FILE_REGEX
        .captures(file_name(filename))
        .and_then(|caps| caps.get(1))
        .map(|lang| lang.as_str().to_uppercase())
}

/// Start marker of a block of `category` in the file `filename`.
///
/// `filename` may be a bare name or a full path; only the last segment is
/// inspected.
pub fn marker_for(category: Category, filename: &str) -> Option<String> {
    BlockKind::new(category, filename).marker()
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
