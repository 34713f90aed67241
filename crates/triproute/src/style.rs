// File: src/style.rs
// Purpose: Content globs handed to the utility-CSS build tool

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Directories never scanned for class names
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist", ".git", "target"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid content glob `{glob}`: {message}")]
    InvalidGlob { glob: String, message: String },

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to render build config: {0}")]
    Render(#[from] serde_json::Error),
}

/// Dark mode strategy of the build tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    #[default]
    Off,
    Media,
    Class,
}

/// Build tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Globs over the source tree, relative to the project root
    #[serde(default = "default_content")]
    pub content: Vec<String>,

    #[serde(default)]
    pub dark_mode: DarkMode,

    /// Passed through untouched as `theme.extend`
    #[serde(default)]
    pub theme_extend: BTreeMap<String, toml::Value>,

    /// Plugin package names
    #[serde(default)]
    pub plugins: Vec<String>,

    /// File extensions that may carry class names
    #[serde(default = "default_class_extensions")]
    pub class_extensions: Vec<String>,

    /// Globs excluded from the coverage check (tooling config files)
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

fn default_content() -> Vec<String> {
    vec![
        "./index.html".to_string(),
        "./src/**/*.{vue,js,ts,jsx,tsx}".to_string(),
    ]
}

fn default_class_extensions() -> Vec<String> {
    ["html", "vue", "js", "ts", "jsx", "tsx"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_ignore() -> Vec<String> {
    vec!["*.config.{js,cjs,mjs,ts}".to_string()]
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            dark_mode: DarkMode::default(),
            theme_extend: BTreeMap::new(),
            plugins: Vec::new(),
            class_extensions: default_class_extensions(),
            ignore: default_ignore(),
        }
    }
}

impl StyleConfig {
    /// Compiles the content globs
    pub fn scanner(&self) -> Result<ContentScanner, StyleError> {
        ContentScanner::new(&self.content)
    }

    /// Files that may carry class names but no content glob covers
    pub fn uncovered_files(&self, root: &Path) -> Result<Vec<PathBuf>, StyleError> {
        let ignored = ContentScanner::new(&self.ignore)?;

        Ok(self
            .scanner()?
            .uncovered_files(root, &self.class_extensions)?
            .into_iter()
            .filter(|path| !ignored.is_covered(path))
            .collect())
    }

    /// Renders the `tailwind.config.js` module read by the build tool
    ///
    /// ```
    /// use triproute::StyleConfig;
    ///
    /// let js = StyleConfig::default().render_build_config().unwrap();
    /// assert!(js.contains(r#""./src/**/*.{vue,js,ts,jsx,tsx}","#));
    /// assert!(js.contains("darkMode: false,"));
    /// ```
    pub fn render_build_config(&self) -> Result<String, StyleError> {
        let mut out = String::from("/** @type {import('tailwindcss').Config} */\nmodule.exports = {\n");

        out.push_str("  content: [\n");
        for glob in &self.content {
            out.push_str(&format!("    {},\n", serde_json::to_string(glob)?));
        }
        out.push_str("  ],\n");

        let dark_mode = match self.dark_mode {
            DarkMode::Off => "false".to_string(),
            DarkMode::Media => serde_json::to_string("media")?,
            DarkMode::Class => serde_json::to_string("class")?,
        };
        out.push_str(&format!("  darkMode: {},\n", dark_mode));

        out.push_str("  theme: {\n");
        out.push_str(&format!(
            "    extend: {},\n",
            serde_json::to_string(&self.theme_extend)?
        ));
        out.push_str("  },\n");

        let plugins = self
            .plugins
            .iter()
            .map(|name| serde_json::to_string(name).map(|quoted| format!("require({})", quoted)))
            .collect::<Result<Vec<_>, _>>()?;
        out.push_str(&format!("  plugins: [{}],\n", plugins.join(", ")));

        out.push_str("}\n");
        Ok(out)
    }
}

/// Compiled content globs
#[derive(Debug, Clone)]
pub struct ContentScanner {
    patterns: Vec<Pattern>,
}

impl ContentScanner {
    /// Compiles globs, expanding `{a,b}` alternatives first
    ///
    /// A leading `./` is stripped; globs are relative to the scanned root.
    pub fn new<I, S>(globs: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();

        for glob in globs {
            let glob = glob.as_ref();
            let relative = glob.trim_start_matches("./");

            for expanded in expand_braces(relative) {
                let pattern = Pattern::new(&expanded).map_err(|e| StyleError::InvalidGlob {
                    glob: glob.to_string(),
                    message: e.to_string(),
                })?;
                patterns.push(pattern);
            }
        }

        Ok(Self { patterns })
    }

    /// Whether a root-relative path is covered by any glob
    pub fn is_covered(&self, relative: &Path) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path_with(relative, MATCH_OPTIONS))
    }

    /// Root-relative files the build tool would scan, sorted
    pub fn matched_files(&self, root: &Path) -> Result<Vec<PathBuf>, StyleError> {
        let mut files = Vec::new();
        for path in walk_files(root) {
            let path = path?;
            if self.is_covered(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Root-relative files with a class-bearing extension that no glob covers
    pub fn uncovered_files(
        &self,
        root: &Path,
        extensions: &[String],
    ) -> Result<Vec<PathBuf>, StyleError> {
        let mut files = Vec::new();
        for path in walk_files(root) {
            let path = path?;
            let class_bearing = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| e == ext));

            if class_bearing && !self.is_covered(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Regular files under `root`, relative to it
fn walk_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, StyleError>> + '_ {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry))
        .filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_file() => entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|relative| Ok(relative.to_path_buf())),
            Ok(_) => None,
            Err(e) => Some(Err(StyleError::Walk(e))),
        })
}

/// Expands shell-style `{a,b}` alternatives, which `glob` does not support
///
/// ```
/// use triproute::style::expand_braces;
///
/// assert_eq!(
///     expand_braces("src/**/*.{vue,ts}"),
///     vec!["src/**/*.vue", "src/**/*.ts"]
/// );
/// assert_eq!(expand_braces("index.html"), vec!["index.html"]);
/// ```
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0usize;
    let mut bounds = vec![open];
    let mut close = None;

    for (offset, c) in pattern[open..].char_indices() {
        let index = open + offset;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(index);
                    break;
                }
            }
            ',' if depth == 1 => bounds.push(index),
            _ => {}
        }
    }

    // Unbalanced braces are left for the glob compiler to reject
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };
    bounds.push(close);

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];

    bounds
        .windows(2)
        .flat_map(|w| expand_braces(&format!("{}{}{}", prefix, &pattern[w[0] + 1..w[1]], suffix)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_expand_nested_and_multiple() {
        assert_eq!(
            expand_braces("{src,lib}/*.{js,ts}"),
            vec!["src/*.js", "src/*.ts", "lib/*.js", "lib/*.ts"]
        );
        assert_eq!(
            expand_braces("a.{j{s,sx},ts}"),
            vec!["a.js", "a.jsx", "a.ts"]
        );
    }

    #[test]
    fn test_expand_unbalanced_left_alone() {
        assert_eq!(expand_braces("src/{a,b"), vec!["src/{a,b"]);
    }

    #[rstest]
    #[case("index.html")]
    #[case("src/App.vue")]
    #[case("src/main.ts")]
    #[case("src/router/index.ts")]
    #[case("src/views/Homepage.vue")]
    #[case("src/components/TripCard.tsx")]
    #[case("src/lib/format.js")]
    #[case("src/lib/Widget.jsx")]
    fn test_default_globs_cover(#[case] file: &str) {
        let scanner = StyleConfig::default().scanner().unwrap();
        assert!(scanner.is_covered(Path::new(file)));
    }

    #[rstest]
    #[case("public/index.html")]
    #[case("src/styles/main.css")]
    #[case("components/Orphan.vue")]
    #[case("main.ts")]
    fn test_default_globs_miss(#[case] file: &str) {
        let scanner = StyleConfig::default().scanner().unwrap();
        assert!(!scanner.is_covered(Path::new(file)));
    }

    #[test]
    fn test_invalid_glob() {
        let err = ContentScanner::new(["src/[.vue"]).unwrap_err();
        assert!(matches!(err, StyleError::InvalidGlob { .. }));
    }

    #[test]
    fn test_dark_mode_parsing() {
        #[derive(Deserialize)]
        struct Wrapper {
            dark_mode: DarkMode,
        }

        let w: Wrapper = toml::from_str(r#"dark_mode = "class""#).unwrap();
        assert_eq!(w.dark_mode, DarkMode::Class);
        assert!(toml::from_str::<Wrapper>(r#"dark_mode = "sometimes""#).is_err());
    }

    #[test]
    fn test_render_default_build_config() {
        let expected = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    "./index.html",
    "./src/**/*.{vue,js,ts,jsx,tsx}",
  ],
  darkMode: false,
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;
        pretty_assertions::assert_eq!(
            StyleConfig::default().render_build_config().unwrap(),
            expected
        );
    }

    #[test]
    fn test_render_with_options() {
        let config: StyleConfig = toml::from_str(
            r##"
            content = ["./src/**/*.vue"]
            dark_mode = "media"
            plugins = ["@tailwindcss/forms"]

            [theme_extend.colors]
            brand = "#0f766e"
            "##,
        )
        .unwrap();

        let js = config.render_build_config().unwrap();
        assert!(js.contains(r#"darkMode: "media","#));
        assert!(js.contains(r##"extend: {"colors":{"brand":"#0f766e"}},"##));
        assert!(js.contains(r#"plugins: [require("@tailwindcss/forms")],"#));
        assert!(!js.contains("index.html"));
    }
}
