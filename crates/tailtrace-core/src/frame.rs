//! Vendor/application classification of stack-frame lines.
//!
//! Classification is a strategy: anything implementing [`FrameClassifier`]
//! (including a plain closure) can be handed to the formatter. The default
//! [`PathClassifier`] matches on path substrings, with an escape hatch for
//! dispatch shims that call straight into application code.

use regex::Regex;
use std::sync::LazyLock;

use crate::ansi::CONCEALED_VENDOR_MARK;
use crate::error::Result;

/// Default library path segment
pub const DEFAULT_VENDOR_PATH: &str = "/vendor/";

/// Default application-boundary pattern: the container's `BoundMethod` shim
/// invoking an `App\` callable.
pub const DEFAULT_APP_BOUNDARY: &str = r"BoundMethod\.php\([0-9]+\): App";

/// Terminal frame of a PHP trace
const MAIN_FRAME: &str = "{main}";

/// Matches a stack-frame record: `#<digits> `
pub static FRAME_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9]+ ").expect("Invalid FRAME_NUMBER_REGEX"));

/// Decides whether a stack-frame line comes from library code.
pub trait FrameClassifier {
    fn is_vendor_frame(&self, line: &str) -> bool;
}

impl<F> FrameClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_vendor_frame(&self, line: &str) -> bool {
        self(line)
    }
}

/// Returns true when `line` looks like a stack-frame record.
pub fn is_stack_frame(line: &str) -> bool {
    FRAME_NUMBER_REGEX.is_match(line)
}

/// Path-substring classifier.
///
/// A line is vendor when it carries the concealed vendor mark, when it
/// contains one of `vendor_paths` and matches none of `app_boundaries`, or
/// when it is the `{main}` frame.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    vendor_paths: Vec<String>,
    app_boundaries: Vec<Regex>,
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self {
            vendor_paths: vec![DEFAULT_VENDOR_PATH.to_string()],
            app_boundaries: vec![
                Regex::new(DEFAULT_APP_BOUNDARY).expect("Invalid DEFAULT_APP_BOUNDARY")
            ],
        }
    }
}

impl PathClassifier {
    /// Build a classifier from configured path segments and boundary patterns.
    pub fn new<P, B>(vendor_paths: P, app_boundaries: B) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let app_boundaries = app_boundaries
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            vendor_paths: vendor_paths.into_iter().map(Into::into).collect(),
            app_boundaries,
        })
    }

    fn is_library_path(&self, line: &str) -> bool {
        self.vendor_paths
            .iter()
            .any(|segment| line.contains(segment.as_str()))
    }

    fn crosses_into_app(&self, line: &str) -> bool {
        self.app_boundaries.iter().any(|re| re.is_match(line))
    }
}

impl FrameClassifier for PathClassifier {
    fn is_vendor_frame(&self, line: &str) -> bool {
        line.contains(CONCEALED_VENDOR_MARK)
            || (self.is_library_path(line) && !self.crosses_into_app(line))
            || line.trim_end().ends_with(MAIN_FRAME)
    }
}
