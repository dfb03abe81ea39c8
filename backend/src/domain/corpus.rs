//! Word corpus backing the email generator.
//!
//! Two line-delimited resources — a word list and a domain list — are read
//! once at startup into fixed, ordered sequences. The corpus is immutable
//! after load and safe for unsynchronised concurrent reads. Loading is
//! fallible and decided by the caller; the service fails startup on a
//! missing or empty resource rather than degrading to an empty corpus.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Errors raised while loading corpus resources.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// A resource file could not be opened or read.
    #[error("failed to read corpus resource {path}: {source}")]
    Io {
        /// Path of the resource that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A resource file contained no usable entries.
    #[error("corpus resource {path} contains no entries")]
    Empty {
        /// Path of the resource that was empty.
        path: PathBuf,
    },
}

/// Fixed, ordered word and domain sequences used for email synthesis.
///
/// ## Invariants
/// - Both sequences are non-empty; [`WordCorpus::load`] rejects empty
///   resources so positional lookups are total.
/// - Entry order matches file order; entries are trimmed and blank lines
///   are dropped.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: Vec<String>,
    domains: Vec<String>,
}

impl WordCorpus {
    /// Read both resources into an immutable corpus.
    ///
    /// One entry is produced per non-blank line, trimmed, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] when a resource cannot be read and
    /// [`CorpusError::Empty`] when a resource yields no entries.
    pub fn load(
        words_path: impl AsRef<Path>,
        domains_path: impl AsRef<Path>,
    ) -> Result<Self, CorpusError> {
        Ok(Self {
            words: read_entries(words_path.as_ref())?,
            domains: read_entries(domains_path.as_ref())?,
        })
    }

    /// Build a corpus from in-memory sequences, bypassing resource I/O.
    #[cfg(any(test, feature = "test-support"))]
    pub fn from_parts(words: Vec<String>, domains: Vec<String>) -> Self {
        assert!(!words.is_empty() && !domains.is_empty(), "corpus parts must be non-empty");
        Self { words, domains }
    }

    /// Entry from the word list at `index`, wrapping modulo the list length.
    pub fn word_at(&self, index: usize) -> &str {
        // Total by the non-empty invariant established at load.
        &self.words[index % self.words.len()]
    }

    /// Entry from the domain list at `index`, wrapping modulo the list length.
    pub fn domain_at(&self, index: usize) -> &str {
        &self.domains[index % self.domains.len()]
    }

    /// Loaded word entries, in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Loaded domain entries, in file order.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

fn read_entries(path: &Path) -> Result<Vec<String>, CorpusError> {
    let io_error = |source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(io_error)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            entries.push(trimmed.to_owned());
        }
    }
    if entries.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use rstest::rstest;

    fn resource(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("create resource");
        file.write_all(contents.as_bytes()).expect("write resource");
        path
    }

    #[rstest]
    fn load_preserves_file_order_and_trims_blanks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let words = resource(&dir, "words.txt", "alpha\n\n  beta  \ngamma\n");
        let domains = resource(&dir, "domains.txt", "example.com\ntest.org\n");

        let corpus = WordCorpus::load(&words, &domains).expect("corpus loads");

        assert_eq!(corpus.words(), ["alpha", "beta", "gamma"]);
        assert_eq!(corpus.domains(), ["example.com", "test.org"]);
    }

    #[rstest]
    fn lookups_wrap_modulo_length() {
        let dir = tempfile::tempdir().expect("tempdir");
        let words = resource(&dir, "words.txt", "alpha\nbeta\n");
        let domains = resource(&dir, "domains.txt", "example.com\n");
        let corpus = WordCorpus::load(&words, &domains).expect("corpus loads");

        assert_eq!(corpus.word_at(0), "alpha");
        assert_eq!(corpus.word_at(3), "beta");
        assert_eq!(corpus.domain_at(99), "example.com");
    }

    #[rstest]
    fn load_rejects_empty_resource() {
        let dir = tempfile::tempdir().expect("tempdir");
        let words = resource(&dir, "words.txt", "\n   \n");
        let domains = resource(&dir, "domains.txt", "example.com\n");

        let err = WordCorpus::load(&words, &domains).expect_err("empty words rejected");

        assert!(matches!(err, CorpusError::Empty { path } if path == words));
    }

    #[rstest]
    fn load_reports_missing_resource() {
        let dir = tempfile::tempdir().expect("tempdir");
        let domains = resource(&dir, "domains.txt", "example.com\n");
        let missing = dir.path().join("absent.txt");

        let err = WordCorpus::load(&missing, &domains).expect_err("missing file rejected");

        assert!(matches!(err, CorpusError::Io { path, .. } if path == missing));
    }
}
