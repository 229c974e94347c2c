//! Syntax highlighter using syntect.

use crate::traits::{HighlightError, SyntaxHighlighter};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Theme used when none (or an unknown one) is requested.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Declared snippet languages and the syntect extension that handles them.
const LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[("JAVA", "java")];

/// Handles syntax highlighting for snippet content.
///
/// Produces HTML with inline styles. Source text is escaped by syntect.
pub struct DiffHighlighter {
    /// Syntax definitions.
    syntax_set: SyntaxSet,
    /// Current theme.
    theme: Theme,
    /// Cache of highlighted lines by (language, line_content) hash.
    cache: Mutex<HashMap<u64, String>>,
    /// Maximum cache size.
    max_cache_size: usize,
}

impl std::fmt::Debug for DiffHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffHighlighter")
            .field("cache_size", &self.cache_size())
            .field("max_cache_size", &self.max_cache_size)
            .finish()
    }
}

impl Default for DiffHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffHighlighter {
    /// Create a new highlighter with default settings.
    pub fn new() -> Self {
        Self::with_theme_name(DEFAULT_THEME)
    }

    /// Create a highlighter with a specific theme name.
    ///
    /// Unknown names fall back to [`DEFAULT_THEME`].
    pub fn with_theme_name(theme_name: &str) -> Self {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                log::warn!(
                    "Unknown highlight theme '{}', using {}",
                    theme_name,
                    DEFAULT_THEME
                );
                theme_set.themes.remove(DEFAULT_THEME).unwrap_or_default()
            }
        };
        Self::with_theme(theme)
    }

    /// Create a highlighter with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_nonewlines(),
            theme,
            cache: Mutex::new(HashMap::new()),
            max_cache_size: 5000,
        }
    }

    /// Set the maximum cache size.
    pub fn with_max_cache(mut self, size: usize) -> Self {
        self.max_cache_size = size.max(1);
        self
    }

    /// Get available theme names.
    pub fn available_themes() -> Vec<&'static str> {
        vec![
            "base16-ocean.dark",
            "base16-ocean.light",
            "base16-eighties.dark",
            "base16-mocha.dark",
            "InspiredGitHub",
            "Solarized (dark)",
            "Solarized (light)",
        ]
    }

    /// Clear the highlight cache.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    /// Get current cache size.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Resolve the syntax for a declared language.
    fn syntax_for(&self, language: &str) -> Result<&SyntaxReference, HighlightError> {
        LANGUAGE_EXTENSIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(language.trim()))
            .and_then(|(_, ext)| self.syntax_set.find_syntax_by_extension(ext))
            .ok_or_else(|| HighlightError::UnsupportedLanguage(language.to_string()))
    }

    /// Highlight one line with an existing parser state.
    fn highlight_with(
        &self,
        highlighter: &mut HighlightLines<'_>,
        line: &str,
    ) -> Result<String, HighlightError> {
        let ranges = highlighter
            .highlight_line(line, &self.syntax_set)
            .map_err(|e| HighlightError::Engine(e.to_string()))?;
        styled_line_to_highlighted_html(&ranges, IncludeBackground::No)
            .map_err(|e| HighlightError::Engine(e.to_string()))
    }

    fn store(&self, key: u64, html: &str) {
        let Ok(mut cache) = self.cache.lock() else {
            return;
        };
        // Evict 20% of the entries once full to avoid thrashing
        if cache.len() >= self.max_cache_size {
            let to_remove = (self.max_cache_size / 5).max(1);
            let keys_to_remove: Vec<_> = cache.keys().take(to_remove).copied().collect();
            for key in keys_to_remove {
                cache.remove(&key);
            }
        }
        cache.insert(key, html.to_string());
    }

    /// Compute a cache key for a language and content.
    fn cache_key(language: &str, content: &str) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        language.to_ascii_uppercase().hash(&mut hasher);
        content.hash(&mut hasher);
        hasher.finish()
    }
}

impl SyntaxHighlighter for DiffHighlighter {
    fn supports(&self, language: &str) -> bool {
        self.syntax_for(language).is_ok()
    }

    /// Highlight a single line. Results are cached.
    fn highlight_line(&self, language: &str, line: &str) -> Result<String, HighlightError> {
        let key = Self::cache_key(language, line);
        if let Some(html) = self
            .cache
            .lock()
            .ok()
            .and_then(|cache| cache.get(&key).cloned())
        {
            return Ok(html);
        }

        let syntax = self.syntax_for(language)?;
        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let html = self.highlight_with(&mut highlighter, line)?;
        self.store(key, &html);
        Ok(html)
    }

    /// Highlight a block keeping parser state across lines, so constructs
    /// like block comments span lines correctly.
    fn highlight_block(&self, language: &str, code: &str) -> Result<String, HighlightError> {
        let syntax = self.syntax_for(language)?;
        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        code.split('\n')
            .map(|line| self.highlight_with(&mut highlighter, line))
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| lines.join("\n"))
    }
}
