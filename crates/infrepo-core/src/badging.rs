//! Badging dump parsing
//!
//! `aapt dump badging` prints one fact per line, e.g.
//!
//! ```text
//! package: name='com.example.plugin' versionCode='42' versionName='1.2.0'
//! sdkVersion:'21'
//! application-label:'Example Plugin'
//! application-icon-160:'res/drawable-mdpi/ic_launcher.png'
//! meta-data: name='plugin-api' value='com.atakmap.app@4.10.0.CIV'
//! ```
//!
//! [`BadgingParser`] maps recognized lines to [`BadgingInfo`] fields through a
//! table of [`LineRule`]s. Unrecognized lines are skipped and missing markers
//! leave their field unset.

/// Icon density extracted when nothing else is configured.
pub const DEFAULT_ICON_DENSITY: u32 = 160;

/// Metadata recovered from one badging dump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgingInfo {
    pub package_name: Option<String>,
    pub version_name: Option<String>,
    pub version_code: Option<String>,
    pub min_sdk: Option<String>,
    pub label: Option<String>,
    /// Description with commas already replaced by periods
    pub description: Option<String>,
    pub prerequisite: Option<String>,
    /// Icon path inside the package archive
    pub icon_path: Option<String>,
    /// Number of lines that matched at least one rule
    pub recognized_lines: usize,
}

impl BadgingInfo {
    /// The parsed label, or `fallback` (the package file stem) when absent
    pub fn label_or(&self, fallback: &str) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// The parsed description, or a synthesized one naming `label`
    pub fn description_or(&self, label: &str) -> String {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => desc.to_string(),
            _ => format!("No description for {label}"),
        }
    }

    /// Whether the dump contained any recognized line at all
    pub fn is_empty(&self) -> bool {
        self.recognized_lines == 0
    }
}

/// How a rule's marker is located in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerMatch {
    Prefix,
    Contains,
}

/// Field extraction applied to a matching line
type Extract = fn(&mut BadgingInfo, &str, &str);

/// One entry of the parser's rule table
#[derive(Clone)]
struct LineRule {
    marker: String,
    matching: MarkerMatch,
    extract: Extract,
}

impl LineRule {
    fn new(marker: impl Into<String>, matching: MarkerMatch, extract: Extract) -> Self {
        Self {
            marker: marker.into(),
            matching,
            extract,
        }
    }

    fn matches(&self, line: &str) -> bool {
        match self.matching {
            MarkerMatch::Prefix => line.starts_with(&self.marker),
            MarkerMatch::Contains => line.contains(&self.marker),
        }
    }
}

impl std::fmt::Debug for LineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRule")
            .field("marker", &self.marker)
            .field("matching", &self.matching)
            .finish()
    }
}

/// Table-driven parser for badging dumps
#[derive(Debug, Clone)]
pub struct BadgingParser {
    rules: Vec<LineRule>,
}

impl Default for BadgingParser {
    fn default() -> Self {
        Self::with_icon_density(DEFAULT_ICON_DENSITY)
    }
}

impl BadgingParser {
    /// Create a parser extracting the 160 dpi icon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser extracting the icon of the given density
    pub fn with_icon_density(density: u32) -> Self {
        let rules = vec![
            LineRule::new("package:", MarkerMatch::Prefix, extract_package),
            LineRule::new("sdkVersion:", MarkerMatch::Prefix, |info, line, _| {
                if let Some(sdk) = first_quoted(line) {
                    info.min_sdk = Some(sdk.to_string());
                }
            }),
            LineRule::new("application-label:", MarkerMatch::Contains, |info, line, _| {
                if let Some(label) = first_quoted(line) {
                    info.label = Some(label.to_string());
                }
            }),
            LineRule::new("app_desc", MarkerMatch::Contains, |info, line, _| {
                if let Some(desc) = meta_value(line) {
                    info.description = Some(desc.replace(',', "."));
                }
            }),
            LineRule::new("plugin-api", MarkerMatch::Contains, |info, line, _| {
                if let Some(prerequisite) = meta_value(line) {
                    info.prerequisite = Some(prerequisite.to_string());
                }
            }),
            LineRule::new(
                format!("application-icon-{density}:"),
                MarkerMatch::Contains,
                extract_icon,
            ),
        ];
        Self { rules }
    }

    /// Parse a complete dump
    ///
    /// Every rule is tried against every line; when a marker repeats, the
    /// last occurrence carrying a value wins.
    pub fn parse(&self, text: &str) -> BadgingInfo {
        let mut info = BadgingInfo::default();

        for line in text.lines() {
            let mut recognized = false;
            for rule in &self.rules {
                if rule.matches(line) {
                    (rule.extract)(&mut info, line, &rule.marker);
                    recognized = true;
                }
            }
            if recognized {
                info.recognized_lines += 1;
            }
        }

        info
    }
}

fn extract_package(info: &mut BadgingInfo, line: &str, _marker: &str) {
    if let Some(name) = attribute(line, "name") {
        info.package_name = Some(name.to_string());
    }
    if let Some(version_name) = attribute(line, "versionName") {
        info.version_name = Some(version_name.to_string());
    }
    if let Some(version_code) = attribute(line, "versionCode") {
        info.version_code = Some(version_code.to_string());
    }
}

fn extract_icon(info: &mut BadgingInfo, line: &str, marker: &str) {
    let Some((_, rest)) = line.split_once(marker) else {
        return;
    };
    let path = rest.trim().trim_matches('\'');
    if !path.is_empty() {
        info.icon_path = Some(path.to_string());
    }
}

/// First single-quoted substring of `line`.
///
/// An opening quote without a closing one yields the rest of the line.
fn first_quoted(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once('\'')?;
    Some(rest.split_once('\'').map_or(rest, |(value, _)| value))
}

/// Value of `key='...'` where `key` starts a whitespace-separated token.
fn attribute<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let pattern = format!("{key}='");
    let mut search_from = 0;

    while let Some(offset) = line[search_from..].find(&pattern) {
        let start = search_from + offset;
        let at_boundary = line[..start]
            .chars()
            .next_back()
            .is_none_or(|c| c.is_whitespace() || c == ':');
        if at_boundary {
            let value_start = start + pattern.len();
            let rest = &line[value_start..];
            return Some(rest.split_once('\'').map_or(rest, |(value, _)| value));
        }
        search_from = start + pattern.len();
    }

    None
}

/// `value='...'` of a meta-data line, otherwise the first quoted substring.
fn meta_value(line: &str) -> Option<&str> {
    attribute(line, "value").or_else(|| first_quoted(line))
}
