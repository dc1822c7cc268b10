pub use rfc822_diagnostics::{Code, Diagnostic, FoldPosition, Severity, Span};
