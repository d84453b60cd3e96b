//! Statistics and CheckStats.

/// A snapshot of what a single check looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckStats {
    /// Raw dictionary entries supplied by the caller.
    pub dictionary_entries: usize,
    /// Entries that survived cleaning.
    pub dictionary_words: usize,
    /// Distinct words after case folding.
    pub distinct_words: usize,
    /// Words the tokenizer produced from the document.
    pub document_words: usize,
    /// Document words missing from the dictionary, duplicates included.
    pub unmatched: usize,
}

impl CheckStats {
    /// Dictionary entries dropped during cleaning.
    pub fn discarded_entries(&self) -> usize {
        self.dictionary_entries.saturating_sub(self.dictionary_words)
    }

    /// Share of document words found in the dictionary, in `0.0..=1.0`.
    ///
    /// An empty document counts as fully matched.
    pub fn match_ratio(&self) -> f32 {
        if self.document_words == 0 {
            return 1.0;
        }
        let matched = self.document_words.saturating_sub(self.unmatched);
        matched as f32 / self.document_words as f32
    }
}

impl core::fmt::Display for CheckStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} dictionary entries ({} kept, {} distinct), {} document words, {} unmatched",
            self.dictionary_entries,
            self.dictionary_words,
            self.distinct_words,
            self.document_words,
            self.unmatched
        )?;

        if self.document_words > 0 {
            write!(f, " ({:.1}% matched)", self.match_ratio() * 100.0)?;
        }

        Ok(())
    }
}
