/*!
 * Legacy service definition updater
 *
 * Rewrites a custom service written against the old daemon service API so
 * it loads on current daemons. The rewrite is line based: attributes lose
 * their leading underscore, `dirs` becomes `directories`, the
 * `CoreService` import is normalized, the four callback signatures are
 * renamed, and lines that register services or import `ipaddr` helpers are
 * dropped. The result is written next to the input as `<file>.update`.
 */

use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

const SERVICE_IMPORT: &str = "from core.services.coreservices import CoreService";

/// Compiled rewrite rules
pub struct ServiceUpdater {
    attribute: Regex,
    dirs: Regex,
    import: Regex,
    signatures: Vec<(Regex, &'static str)>,
    dropped: Vec<Regex>,
}

impl ServiceUpdater {
    pub fn new() -> std::result::Result<Self, regex::Error> {
        let signatures = [
            (
                r"def generateconfig\(cls, node, filename, services\)",
                "def generate_config(cls, node, filename)",
            ),
            (
                r"def getvalidate\(cls, node, services\)",
                "def get_validate(cls, node)",
            ),
            (
                r"def getstartup\(cls, node, services\)",
                "def get_startup(cls, node)",
            ),
            (
                r"def getconfigfilenames\(cls, nodenum, services\)",
                "def get_configs(cls, node)",
            ),
        ];
        let dropped = [
            r"addservice\(",
            r"from.+\.ipaddr|import ipaddr",
            r"from.+\.ipaddress|import ipaddress",
        ];

        Ok(Self {
            attribute: Regex::new(r"^(\s+)_([a-z])")?,
            dirs: Regex::new(r"^(\s+)dirs")?,
            import: Regex::new(r"^.+import.+CoreService.+$")?,
            signatures: signatures
                .into_iter()
                .map(|(pattern, replacement)| Regex::new(pattern).map(|regex| (regex, replacement)))
                .collect::<std::result::Result<_, _>>()?,
            dropped: dropped
                .into_iter()
                .map(Regex::new)
                .collect::<std::result::Result<_, _>>()?,
        })
    }

    /// Rewrite one line, or `None` when the line is dropped
    ///
    /// `line` carries no line terminator.
    pub fn update_line(&self, line: &str) -> Option<String> {
        let line = self.attribute.replace(line, "${1}${2}");
        let line = self.dirs.replace(&line, "${1}directories");
        let line = self.import.replace(&line, SERVICE_IMPORT);
        let mut line = line.into_owned();
        for (pattern, replacement) in &self.signatures {
            line = pattern.replace(&line, *replacement).into_owned();
        }

        if self.dropped.iter().any(|pattern| pattern.is_match(&line)) {
            return None;
        }
        Some(line)
    }

    /// Rewrite a whole service file, keeping its line terminators
    pub fn update(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        for raw in source.split_inclusive('\n') {
            let (line, ending) = split_terminator(raw);
            if let Some(updated) = self.update_line(line) {
                out.push_str(&updated);
                out.push_str(ending);
            }
        }
        out
    }

    /// Rewrite `path` into `<path>.update` and return the new path
    pub fn update_file(&self, path: &Path) -> Result<PathBuf> {
        let source = std::fs::read_to_string(path)?;
        let updated = self.update(&source);

        let mut target = path.as_os_str().to_owned();
        target.push(".update");
        let target = PathBuf::from(target);

        std::fs::write(&target, updated)?;
        debug!("Wrote updated service to {}", target.display());
        Ok(target)
    }
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}
