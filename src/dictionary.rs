//! dictionary.rs — fixed-capacity anagram hash table
//!
//! The dictionary is a bucketed hash table keyed on the *canonical* form of a
//! word (see `canonical.rs`), so every anagram of the same letter multiset
//! lands in the same bucket. It is built once with a caller-chosen capacity
//! (no resizing), bulk-loaded from a line-oriented word source, and then
//! queried read-only.
//!
//! Loading API mirrors the word-list split used elsewhere in this codebase:
//! - `load_from_str(...)` — pure, in-memory, works on any pre-fetched text.
//! - `load_from_reader(...)` — any `BufRead` source.
//! - `load_from_path(...)` — convenience wrapper over a file path.
//!
//! Lookups take `&self` and return a freshly filtered `Vec<&str>`; the
//! backing bucket is never touched, so repeated identical queries return
//! identical results and shared references may query concurrently.

use std::collections::HashSet;
use std::io::BufRead;

use crate::canonical::{canon, is_permutation};
use crate::errors::DictionaryError;

/// Hash seed and per-character multiplier. The index of a word is
/// `fold(seed, |h, ch| (MULTIPLIER*h + ch) % capacity)` over its canonical
/// form, reduced modulo capacity after *every* character so intermediate
/// values stay below `MULTIPLIER * capacity + char::MAX`.
const HASH_SEED: u64 = 31;
const HASH_MULTIPLIER: u64 = 503;

/// Read-only counters describing a loaded dictionary, consumed by the
/// reporting side (`report.rs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Total words stored (duplicates counted individually).
    pub stored: usize,
    /// Buckets holding at least one word.
    pub used_buckets: usize,
    /// Buckets holding nothing.
    pub empty_buckets: usize,
    /// Sum over non-empty buckets of (distinct canonical keys - 1).
    pub collisions: usize,
}

/// A fixed-capacity anagram dictionary.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// `capacity` buckets of original-case words, append-ordered.
    buckets: Vec<Vec<String>>,
    /// Running count of stored words.
    stored: usize,
}

impl Dictionary {
    /// Create an empty dictionary with `capacity` buckets.
    ///
    /// Capacity is fixed for the dictionary's lifetime; choose it to roughly
    /// match the expected word count for an acceptable collision rate.
    ///
    /// # Errors
    ///
    /// `DictionaryError::InvalidCapacity` if `capacity` is 0 (every hash is
    /// reduced modulo capacity, so 0 is unusable).
    pub fn new(capacity: usize) -> Result<Self, DictionaryError> {
        if capacity == 0 {
            return Err(DictionaryError::InvalidCapacity);
        }
        Ok(Self {
            buckets: vec![Vec::new(); capacity],
            stored: 0,
        })
    }

    /// Number of buckets (fixed at construction).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Total words stored so far.
    #[must_use]
    pub fn stored(&self) -> usize {
        self.stored
    }

    /// Bucket index for a canonical key.
    ///
    /// Polynomial rolling hash, identical at load time and query time; it is
    /// applied to the canonical form, which is what guarantees anagrams of the
    /// same multiset share a bucket.
    #[must_use]
    pub fn hash_index(&self, key: &str) -> usize {
        let capacity = self.buckets.len() as u64;
        let mut hash = HASH_SEED % capacity;
        for ch in key.chars() {
            hash = (HASH_MULTIPLIER * hash + u64::from(u32::from(ch))) % capacity;
        }
        hash as usize
    }

    /// Insert a single word: the original string goes into the bucket at the
    /// hash of its canonical form. Duplicates are kept (multiset semantics).
    fn insert(&mut self, word: &str) {
        let index = self.hash_index(&canon(word));
        self.buckets[index].push(word.to_string());
        self.stored += 1;
    }

    /// Load every line of `contents` as one word. Infallible: an in-memory
    /// string has no read errors, and blank lines are stored like any other
    /// word (whitespace is the caller's concern).
    pub fn load_from_str(&mut self, contents: &str) {
        for word in contents.lines() {
            self.insert(word);
        }
    }

    /// Load one word per line from any buffered reader.
    ///
    /// # Errors
    ///
    /// `DictionaryError::SourceRead` if the underlying read fails. Words
    /// already inserted before the failure are NOT rolled back; on error the
    /// dictionary holds a partial load.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<(), DictionaryError> {
        for line in reader.lines() {
            let word = line?;
            self.insert(&word);
        }
        Ok(())
    }

    /// Convenience: open `path` and load it line by line.
    ///
    /// # Errors
    ///
    /// `DictionaryError::SourceRead` if the file cannot be opened or read;
    /// see `load_from_reader` for the partial-load contract.
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        &mut self,
        path: P,
    ) -> Result<(), DictionaryError> {
        let file = std::fs::File::open(path)?;
        self.load_from_reader(std::io::BufReader::new(file))
    }

    /// Find every stored word formable from exactly the given tiles.
    ///
    /// Computes the tiles' canonical key, hashes to a bucket, and filters the
    /// bucket by canonical equality (the bucket may also hold words of other
    /// keys that merely collided). Results come back in insertion order. An
    /// empty result is a normal outcome, not an error.
    ///
    /// Takes `&self` and builds a new vector; the bucket itself is never
    /// modified, so the same query always returns the same words.
    #[must_use]
    pub fn lookup(&self, tiles: &str) -> Vec<&str> {
        let index = self.hash_index(&canon(tiles));
        self.buckets[index]
            .iter()
            .filter(|word| is_permutation(word, tiles))
            .map(String::as_str)
            .collect()
    }

    /// Visit every bucket in index order. Read-only; used by reporting.
    pub fn for_each_bucket<F: FnMut(usize, &[String])>(&self, mut f: F) {
        for (index, bucket) in self.buckets.iter().enumerate() {
            f(index, bucket);
        }
    }

    /// Words in one bucket, for inspection. Panics if `index >= capacity()`.
    #[must_use]
    pub fn bucket(&self, index: usize) -> &[String] {
        &self.buckets[index]
    }

    /// Compute the summary counters over the whole table.
    ///
    /// A bucket's collision count is the number of distinct canonical keys it
    /// holds minus one; duplicate words share a key and do not collide.
    #[must_use]
    pub fn stats(&self) -> DictionaryStats {
        let mut stats = DictionaryStats {
            stored: self.stored,
            used_buckets: 0,
            empty_buckets: 0,
            collisions: 0,
        };
        for bucket in &self.buckets {
            if bucket.is_empty() {
                stats.empty_buckets += 1;
            } else {
                stats.used_buckets += 1;
                let keys: HashSet<String> = bucket.iter().map(|w| canon(w)).collect();
                stats.collisions += keys.len() - 1;
            }
        }
        stats
    }
}
