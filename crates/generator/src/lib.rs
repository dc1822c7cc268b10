//! Random generator of valid addr-spec addresses.
//!
//! Each grammar production has a generating method, so every emitted string
//! is an address the recognizer must accept. Generators own their RNG and
//! are seeded explicitly; the same seed always yields the same sequence.
//!
//! ```
//! use rfc822_generator::AddressGenerator;
//!
//! let mut generator = AddressGenerator::from_seed(7);
//! let address = generator.generate();
//! assert!(rfc822_core::validate(&address).is_ok());
//! ```

#![warn(missing_docs)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rfc822_core::grammar::chars;

/// Knobs for [`AddressGenerator`].
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Sprinkle whitespace and (possibly nested) comments at token junctions.
    pub comments: bool,
}

impl GeneratorOptions {
    /// Enable or disable comment and whitespace insertion.
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }
}

/// Seeded, grammar-driven address generator.
#[derive(Debug, Clone)]
pub struct AddressGenerator {
    rng: StdRng,
    options: GeneratorOptions,
    buf: String,
}

impl AddressGenerator {
    /// Generator with default options and a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_options(seed, GeneratorOptions::default())
    }

    /// Generator with explicit options and a fixed seed.
    pub fn with_options(seed: u64, options: GeneratorOptions) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            options,
            buf: String::new(),
        }
    }

    /// Produce the next address.
    pub fn generate(&mut self) -> String {
        self.buf.clear();
        self.addr_spec();
        self.buf.clone()
    }

    // ── Productions ─────────────────────────────────────────────────────

    fn addr_spec(&mut self) {
        self.cfws();
        self.local_part();
        self.buf.push('@');
        self.cfws();
        self.domain();
        self.cfws();
    }

    fn local_part(&mut self) {
        self.word();
        for _ in 0..self.rng.gen_range(0..3) {
            self.cfws();
            self.buf.push('.');
            self.cfws();
            self.word();
        }
        self.cfws();
    }

    fn word(&mut self) {
        if self.one_in(5) {
            self.quoted_string();
        } else {
            self.atom();
        }
    }

    fn quoted_string(&mut self) {
        self.buf.push('"');
        for _ in 0..self.rng.gen_range(0..10) {
            if self.one_in(20) {
                self.quoted_pair();
            } else {
                let c = self.char_where(chars::is_qtext);
                self.buf.push(c);
            }
        }
        self.buf.push('"');
    }

    fn quoted_pair(&mut self) {
        self.buf.push('\\');
        let c = self.printable();
        self.buf.push(c);
    }

    fn atom(&mut self) {
        for _ in 0..self.rng.gen_range(1..=10) {
            let c = self.char_where(chars::is_atom_char);
            self.buf.push(c);
        }
    }

    fn domain(&mut self) {
        self.sub_domain();
        for _ in 0..self.rng.gen_range(0..5) {
            self.cfws();
            self.buf.push('.');
            self.cfws();
            self.sub_domain();
        }
    }

    fn sub_domain(&mut self) {
        if self.one_in(10) {
            self.domain_literal();
        } else {
            self.atom();
        }
    }

    fn domain_literal(&mut self) {
        self.buf.push('[');
        for _ in 0..self.rng.gen_range(0..20) {
            if self.one_in(20) {
                self.quoted_pair();
            } else {
                let c = self.char_where(chars::is_dtext);
                self.buf.push(c);
            }
        }
        self.buf.push(']');
    }

    /// Optional CFWS at a junction; only emitted when comments are enabled.
    fn cfws(&mut self) {
        if !self.options.comments || !self.one_in(4) {
            return;
        }
        if self.one_in(2) {
            self.buf.push(' ');
        } else {
            self.comment(0);
        }
    }

    fn comment(&mut self, depth: usize) {
        self.buf.push('(');
        for _ in 0..self.rng.gen_range(0..8) {
            if depth < 3 && self.one_in(8) {
                self.comment(depth + 1);
            } else if self.one_in(20) {
                self.quoted_pair();
            } else {
                let c = self.char_where(chars::is_ctext);
                self.buf.push(c);
            }
        }
        self.buf.push(')');
    }

    // ── Randomness helpers ──────────────────────────────────────────────

    fn one_in(&mut self, n: u32) -> bool {
        self.rng.gen_range(0..n) == 0
    }

    /// A printable ASCII character, space included.
    fn printable(&mut self) -> char {
        char::from(self.rng.gen_range(32u8..=126))
    }

    fn char_where(&mut self, class: fn(u8) -> bool) -> char {
        loop {
            let c = self.printable();
            if class(c as u8) {
                return c;
            }
        }
    }
}

impl Iterator for AddressGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate())
    }
}
