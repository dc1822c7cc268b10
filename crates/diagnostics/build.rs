//! Turns `data/diagnostics.json` into the `Code` enum and its catalogue table.
//!
//! The catalogue is ordered by ID. `ADDR1nnn` entries are rejections and must
//! be `error`; `ADDR2nnn` entries are warnings about legal but unusual syntax
//! and must be `warn`. Variant names are the CamelCase form of `constName`.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct Catalogue {
    diagnostics: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct Entry {
    id: String,
    const_name: String,
    severity: String,
    summary: String,
    description: String,
}

fn main() {
    let path = Path::new("data/diagnostics.json");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    let catalogue: Catalogue = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("{} is malformed: {e}", path.display()));

    let variants = check_catalogue(&catalogue.diagnostics);

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR")).join("catalogue.rs");
    fs::write(&out, render(&catalogue.diagnostics, &variants))
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", out.display()));
}

/// Enforce the catalogue rules and return the variant name of each entry.
fn check_catalogue(entries: &[Entry]) -> Vec<String> {
    assert!(!entries.is_empty(), "the catalogue has no entries");
    let mut names = HashSet::new();
    let mut previous: Option<&str> = None;

    entries
        .iter()
        .map(|e| {
            let number = e
                .id
                .strip_prefix("ADDR")
                .filter(|n| n.len() == 4 && n.bytes().all(|b| b.is_ascii_digit()))
                .unwrap_or_else(|| panic!("{}: IDs look like ADDRnnnn", e.id));
            let expected = match number.as_bytes()[0] {
                b'1' => "error",
                b'2' => "warn",
                _ => panic!("{}: only ADDR1nnn rejections and ADDR2nnn warnings exist", e.id),
            };
            assert_eq!(e.severity, expected, "{}: severity must be {expected}", e.id);
            if let Some(prev) = previous {
                assert!(prev < e.id.as_str(), "{}: IDs must be strictly ascending", e.id);
            }
            previous = Some(e.id.as_str());
            assert!(
                !e.summary.is_empty() && !e.description.is_empty(),
                "{}: summary and description are required",
                e.id
            );

            let variant = camel_case(&e.const_name)
                .unwrap_or_else(|| panic!("{}: constName {:?} is not SCREAMING_SNAKE_CASE", e.id, e.const_name));
            assert!(names.insert(variant.clone()), "{}: duplicate constName {}", e.id, e.const_name);
            variant
        })
        .collect()
}

/// `MISSING_AT_SIGN` becomes `MissingAtSign`.
fn camel_case(screaming: &str) -> Option<String> {
    let valid = screaming.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
        && screaming
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_');
    if !valid {
        return None;
    }
    let mut out = String::with_capacity(screaming.len());
    for word in screaming.split('_').filter(|w| !w.is_empty()) {
        out.push_str(&word[..1]);
        out.push_str(&word[1..].to_ascii_lowercase());
    }
    Some(out)
}

// `{:?}` on a `str` yields a valid Rust string literal.
fn render(entries: &[Entry], variants: &[String]) -> String {
    let mut out = String::from("// Generated by build.rs from data/diagnostics.json.\n\n");

    out.push_str("/// A catalogued finding: one code per rejection kind and per warning.\n");
    out.push_str("///\n/// Serializes as its `ADDRnnnn` ID.\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]\n");
    out.push_str("pub enum Code {\n");
    for (e, variant) in entries.iter().zip(variants) {
        out.push_str(&format!("    #[doc = {:?}]\n", e.summary));
        out.push_str(&format!("    #[serde(rename = {:?})]\n", e.id));
        out.push_str(&format!("    {variant},\n"));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("static CATALOGUE: [Entry; {}] = [\n", entries.len()));
    for (e, variant) in entries.iter().zip(variants) {
        let severity = if e.severity == "error" { "Error" } else { "Warn" };
        out.push_str(&format!(
            "    Entry {{ code: Code::{variant}, id: {:?}, severity: Severity::{severity}, summary: {:?}, description: {:?} }},\n",
            e.id, e.summary, e.description
        ));
    }
    out.push_str("];\n");
    out
}
