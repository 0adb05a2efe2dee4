//! report.rs — console reporting for the dictionary and for turns
//!
//! The dictionary only *computes* its counters; everything that formats or
//! prints lives here, as free functions over `io::Write` so tests can render
//! into a buffer and the CLI can hand in stdout.

use std::io::{self, Write};

use crate::dictionary::Dictionary;

/// Print the hash table and its summary statistics.
///
/// With `stats_only` set, the per-bucket dump (one line per index, words
/// quoted and tab-separated) is skipped — for a full-size word list the dump
/// is hundreds of thousands of lines.
///
/// # Errors
///
/// Propagates any write failure on `out`.
pub fn dump_table<W: Write>(dict: &Dictionary, out: &mut W, stats_only: bool) -> io::Result<()> {
    if !stats_only {
        let mut result = Ok(());
        dict.for_each_bucket(|index, words| {
            if result.is_err() {
                return;
            }
            result = (|| {
                write!(out, "{index}:")?;
                for word in words {
                    write!(out, "\t'{word}'")?;
                }
                writeln!(out)
            })();
        });
        result?;
    }

    let stats = dict.stats();
    let used_percent = (stats.used_buckets as f64 / dict.capacity() as f64) * 100.0;
    let collision_percent = if stats.stored == 0 {
        0.0
    } else {
        (stats.collisions as f64 / stats.stored as f64) * 100.0
    };

    writeln!(out, "\nValues stored: {}", stats.stored)?;
    writeln!(out, "Slots used: {}", stats.used_buckets)?;
    writeln!(out, "Slots empty: {}", stats.empty_buckets)?;
    writeln!(out, "Number of collisions: {}", stats.collisions)?;
    writeln!(out, "{used_percent:.2}% of capacity is being used.")?;
    writeln!(out, "{collision_percent:.2}% collision rate.\n")
}

/// Announce a drawn rack of tiles.
///
/// # Errors
///
/// Propagates any write failure on `out`.
pub fn announce_draw<W: Write>(tiles: &str, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "The {} tiles you drew are: ", tiles.chars().count())?;
    for tile in tiles.chars() {
        write!(out, "'{tile}' ")?;
    }
    writeln!(out)
}

/// Print the words found for a tile string (or that none were found).
///
/// # Errors
///
/// Propagates any write failure on `out`.
pub fn report_matches<W: Write>(tiles: &str, words: &[&str], out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    if words.is_empty() {
        writeln!(out, "No possible words for '{tiles}'.")?;
    } else {
        writeln!(out, "The possible words for '{tiles}' are:")?;
        for word in words {
            writeln!(out, "{word}")?;
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_reports_counters_and_percentages() {
        let mut dict = Dictionary::new(4).unwrap();
        dict.load_from_str("cat\nact");
        let out = rendered(|buf| dump_table(&dict, buf, true));
        assert!(out.contains("Values stored: 2"));
        assert!(out.contains("Number of collisions: 0"));
        assert!(out.contains("% of capacity is being used."));
        // stats_only suppresses the bucket dump
        assert!(!out.contains("0:"));
    }

    #[test]
    fn full_dump_lists_every_bucket() {
        let mut dict = Dictionary::new(2).unwrap();
        dict.load_from_str("cat");
        let out = rendered(|buf| dump_table(&dict, buf, false));
        assert!(out.contains("'cat'"));
        assert!(out.lines().filter(|l| l.ends_with(':') || l.contains(":\t")).count() >= 2);
    }

    #[test]
    fn empty_dictionary_has_zero_collision_rate() {
        let dict = Dictionary::new(3).unwrap();
        let out = rendered(|buf| dump_table(&dict, buf, true));
        assert!(out.contains("Values stored: 0"));
        assert!(out.contains("0.00% collision rate."));
    }

    #[test]
    fn draw_announcement_quotes_each_tile() {
        let out = rendered(|buf| announce_draw("abc", buf));
        assert!(out.contains("The 3 tiles you drew are: 'a' 'b' 'c'"));
    }

    #[test]
    fn match_report_handles_hits_and_misses() {
        let hit = rendered(|buf| report_matches("tac", &["cat", "act"], buf));
        assert!(hit.contains("The possible words for 'tac' are:"));
        assert!(hit.contains("cat\nact"));

        let miss = rendered(|buf| report_matches("xyz", &[], buf));
        assert!(miss.contains("No possible words for 'xyz'."));
    }
}
