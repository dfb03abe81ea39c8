//! Pseudo-random email synthesis over the word corpus.
//!
//! One index is drawn per pick from a uniform source and reused for modulo
//! indexing into the fixed-size table. The source is not cryptographic and
//! does not need to be; nothing depends on distribution quality. Generated
//! addresses carry no uniqueness guarantee — the store accepts duplicates.

use std::sync::Arc;

use rand::Rng;

use crate::domain::corpus::WordCorpus;

/// Exclusive upper bound for a single index draw.
const INDEX_SPAN: usize = 100;

/// Produces `<word>@<domain>` strings from the loaded corpus.
///
/// Cloning is cheap; the corpus is shared read-only. Randomness comes from
/// the calling thread's RNG, so concurrent handlers never contend on a
/// shared generator state.
#[derive(Clone)]
pub struct EmailGenerator {
    corpus: Arc<WordCorpus>,
}

impl EmailGenerator {
    /// Create a generator over a shared corpus.
    pub fn new(corpus: Arc<WordCorpus>) -> Self {
        Self { corpus }
    }

    fn draw_index(&self) -> usize {
        rand::thread_rng().gen_range(0..INDEX_SPAN)
    }

    /// Synthesise one email-like string.
    pub fn generate(&self) -> String {
        let word = self.corpus.word_at(self.draw_index());
        let domain = self.corpus.domain_at(self.draw_index());
        format!("{word}@{domain}")
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn shipped_corpus() -> WordCorpus {
        let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
        WordCorpus::load(base.join("words.txt"), base.join("domains.txt"))
            .expect("shipped resources load")
    }

    #[test]
    fn generated_emails_are_members_of_the_corpora() {
        let corpus = shipped_corpus();
        let generator = EmailGenerator::new(Arc::new(corpus.clone()));

        for _ in 0..200 {
            let email = generator.generate();
            let (word, domain) = email.split_once('@').expect("word@domain shape");
            assert!(corpus.words().iter().any(|w| w == word), "unknown word {word:?}");
            assert!(
                corpus.domains().iter().any(|d| d == domain),
                "unknown domain {domain:?}"
            );
        }
    }

    #[test]
    fn generator_works_over_single_entry_corpus() {
        let corpus = WordCorpus::from_parts(
            vec!["only".to_owned()],
            vec!["example.com".to_owned()],
        );
        let generator = EmailGenerator::new(Arc::new(corpus));

        assert_eq!(generator.generate(), "only@example.com");
    }
}
