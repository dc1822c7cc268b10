//! The diagnostic catalogue.
//!
//! [`Code`] and its table are generated from `data/diagnostics.json`. Each
//! variant indexes its own row, so lookups by code never search.

use std::fmt;

use serde::Serialize;

use crate::Severity;

struct Entry {
    code: Code,
    id: &'static str,
    severity: Severity,
    summary: &'static str,
    description: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/catalogue.rs"));

impl Code {
    fn entry(self) -> &'static Entry {
        &CATALOGUE[self as usize]
    }

    /// Every code, rejections first, in ID order.
    pub fn all() -> impl Iterator<Item = Code> {
        CATALOGUE.iter().map(|e| e.code)
    }

    /// Look up an ID such as `"ADDR1007"`. Case is ignored.
    pub fn from_id(id: &str) -> Option<Code> {
        CATALOGUE
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(id.trim()))
            .map(|e| e.code)
    }

    /// The stable `ADDRnnnn` ID.
    pub fn id(self) -> &'static str {
        self.entry().id
    }

    /// [`Severity::Error`] for rejections, [`Severity::Warn`] for warnings.
    pub fn severity(self) -> Severity {
        self.entry().severity
    }

    /// One-sentence summary.
    pub fn summary(self) -> &'static str {
        self.entry().summary
    }

    /// Longer explanation, shown by `rfc822 explain` and as report help.
    pub fn explain(self) -> &'static str {
        self.entry().description
    }

    /// Whether this code reports a rejected address.
    pub fn is_rejection(self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
