// Display names and link fragments
//
// Pure functions mapping raw filesystem entry names to the titles and
// link fragments used in generated home pages.

/// Extensions removed before a name is humanized
const KNOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

/// Convert a raw entry name into a space separated, title cased display name.
///
/// `getting-started_guide.md` becomes `Getting Started Guide`. Only the first
/// character of each word is changed, so acronyms survive (`API-v2` -> `API V2`).
pub fn humanize(raw_name: &str) -> String {
    let stem = KNOWN_EXTENSIONS
        .iter()
        .find_map(|ext| raw_name.strip_suffix(ext))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(raw_name);

    stem.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip the markdown suffix from a name, if present
pub fn strip_markdown_suffix<'a>(raw_name: &'a str, suffix: &str) -> &'a str {
    raw_name.strip_suffix(suffix).unwrap_or(raw_name)
}

/// Compose a folder display name from its ancestor's display name
pub fn folder_display_name(raw_name: &str, ancestor_display_name: &str) -> String {
    let own = humanize(raw_name);
    if ancestor_display_name.is_empty() {
        own
    } else {
        format!("{} > {}", ancestor_display_name, own)
    }
}

/// How a node's link fragment is built, chosen once per node by depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStrategy {
    /// Direct children of the scan root: the raw name, usable as a wiki page target
    Verbatim,
    /// Deeper entries: ancestor link plus the percent-encoded, suffix-stripped name
    Nested,
}

impl LinkStrategy {
    pub fn for_depth(depth: usize) -> Self {
        if depth == 0 {
            LinkStrategy::Verbatim
        } else {
            LinkStrategy::Nested
        }
    }
}

/// Builds link fragments for the configured markdown suffix
#[derive(Debug, Clone)]
pub struct LinkDeriver {
    suffix: String,
    strip_root_suffix: bool,
}

impl LinkDeriver {
    pub fn new(suffix: impl Into<String>, strip_root_suffix: bool) -> Self {
        Self {
            suffix: suffix.into(),
            strip_root_suffix,
        }
    }

    /// Derive the link fragment for an entry at `depth` below `ancestor_link`
    pub fn derive(&self, raw_name: &str, ancestor_link: &str, depth: usize) -> String {
        match LinkStrategy::for_depth(depth) {
            LinkStrategy::Verbatim if self.strip_root_suffix => {
                strip_markdown_suffix(raw_name, &self.suffix).to_string()
            }
            LinkStrategy::Verbatim => raw_name.to_string(),
            LinkStrategy::Nested => {
                let segment = urlencoding::encode(strip_markdown_suffix(raw_name, &self.suffix));
                format!("{}/{}", ancestor_link, segment)
            }
        }
    }
}

impl Default for LinkDeriver {
    fn default() -> Self {
        Self::new(".md", false)
    }
}
