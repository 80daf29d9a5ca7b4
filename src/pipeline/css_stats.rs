//! Structural statistics of minified CSS
//!
//! The counts are lexical approximations, not a parse. They are exact only for
//! single-line minified CSS without comments or nested blocks; `@media` and
//! other block at-rules inflate the declaration count.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static CLASS_RE: OnceLock<Regex> = OnceLock::new();
static DECLARATION_RE: OnceLock<Regex> = OnceLock::new();
static COLOR_RE: OnceLock<Regex> = OnceLock::new();

/// Selector and declaration counts for one stylesheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CssStats {
    /// Blocks whose selector starts with a class (`.name{`)
    pub classes: usize,
    /// Every selector block (`anything{`)
    pub declarations: usize,
    /// Blocks opening with `color`, `background-color` or `border-color`
    pub color_declarations: usize,
}

/// Strategy for deriving [`CssStats`] from stylesheet text
///
/// Lets the regex heuristic be swapped for a real parser without touching the
/// pipeline.
pub trait CssStatsStrategy {
    /// Compute statistics for `css`
    fn analyze(&self, css: &str) -> CssStats;
}

/// Regex-based approximation over raw minified text
///
/// # Examples
///
/// ```
/// use css_bench::pipeline::css_stats::{CssStatsStrategy, PatternCssStats};
///
/// let stats = PatternCssStats.analyze(".a{color:red}.b{background-color:blue}div{color:green}");
/// assert_eq!(stats.classes, 2);
/// assert_eq!(stats.declarations, 3);
/// assert_eq!(stats.color_declarations, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternCssStats;

impl PatternCssStats {
    fn class_re() -> &'static Regex {
        CLASS_RE.get_or_init(|| Regex::new(r"\.[^{}\s]*\{").expect("class regex is valid"))
    }

    fn declaration_re() -> &'static Regex {
        DECLARATION_RE
            .get_or_init(|| Regex::new(r"[^{}\s]*\{").expect("declaration regex is valid"))
    }

    fn color_re() -> &'static Regex {
        COLOR_RE.get_or_init(|| {
            Regex::new(r"\{(?:background-color|border-color|color)").expect("color regex is valid")
        })
    }
}

impl CssStatsStrategy for PatternCssStats {
    fn analyze(&self, css: &str) -> CssStats {
        // find_iter yields nothing on no match, so every count bottoms out at 0
        CssStats {
            classes: Self::class_re().find_iter(css).count(),
            declarations: Self::declaration_re().find_iter(css).count(),
            color_declarations: Self::color_re().find_iter(css).count(),
        }
    }
}
