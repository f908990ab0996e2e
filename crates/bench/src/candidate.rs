//! Candidate hash bindings and their registry.

use std::fmt::{self, Display};

use anyhow::Result;

/// Column width candidate names are padded to in report lines.
pub(crate) const NAME_WIDTH: usize = 24;

/// The hash family a candidate claims to implement.
///
/// Informational only: two candidates may both claim the same family, and
/// nothing validates that their outputs agree. Cross-checking is the
/// operator's job, by reading the correctness-pass output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFamily {
    Pedersen,
    Keccak,
}

impl Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashFamily::Pedersen => f.write_str("pedersen"),
            HashFamily::Keccak => f.write_str("keccak"),
        }
    }
}

/// A hash input as a decimal-string numeral.
///
/// This is the generic interchange form; each binding converts it into
/// whatever encoding its implementation expects (a parsed field element, a
/// fixed-width little-endian buffer, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral(String);

impl Numeral {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_u32(value: u32) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The output of a candidate invocation. Opaque: only ever printed or
/// discarded, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single capability a hash binding must provide.
///
/// An error return aborts the entire run; there is no per-candidate
/// recovery anywhere in the harness.
pub trait HashFn {
    fn invoke(&self, a: &Numeral, b: &Numeral) -> Result<Digest>;
}

impl<F> HashFn for F
where
    F: Fn(&Numeral, &Numeral) -> Result<Digest>,
{
    fn invoke(&self, a: &Numeral, b: &Numeral) -> Result<Digest> {
        self(a, b)
    }
}

/// One named hash binding under comparison. Immutable once registered.
pub struct Candidate {
    name: String,
    family: HashFamily,
    binding: Box<dyn HashFn>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, family: HashFamily, binding: impl HashFn + 'static) -> Self {
        Self {
            name: name.into(),
            family,
            binding: Box::new(binding),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> HashFamily {
        self.family
    }

    pub fn invoke(&self, a: &Numeral, b: &Numeral) -> Result<Digest> {
        self.binding.invoke(a, b)
    }
}

/// Ordered list of candidates.
///
/// Registration order determines both correctness-check order and
/// benchmark-report order; candidates are never reordered.
#[derive(Default)]
pub struct Registry {
    candidates: Vec<Candidate>,
}

impl Registry {
    pub fn register(
        &mut self,
        name: impl Into<String>,
        family: HashFamily,
        binding: impl HashFn + 'static,
    ) {
        self.candidates.push(Candidate::new(name, family, binding));
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions_sorted::assert_eq;

    #[test]
    fn registration_order_is_preserved() {
        let stub = |_: &Numeral, _: &Numeral| -> Result<Digest> { Ok(Digest::new("stub")) };

        let mut registry = Registry::default();
        registry.register("first", HashFamily::Pedersen, stub);
        registry.register("second", HashFamily::Pedersen, stub);
        registry.register("third", HashFamily::Keccak, stub);

        let names: Vec<_> = registry.candidates().iter().map(Candidate::name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn same_family_registers_twice() {
        let mut registry = Registry::default();
        registry.register(
            "a",
            HashFamily::Pedersen,
            |_: &Numeral, _: &Numeral| -> Result<Digest> { Ok(Digest::new("1")) },
        );
        registry.register(
            "b",
            HashFamily::Pedersen,
            |_: &Numeral, _: &Numeral| -> Result<Digest> { Ok(Digest::new("2")) },
        );

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.candidates()[0].family(), HashFamily::Pedersen);
        assert_eq!(registry.candidates()[1].family(), HashFamily::Pedersen);
    }
}
