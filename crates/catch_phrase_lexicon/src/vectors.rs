//! Word embeddings loaded from the word2vec text format.

use crate::{LexiconError, SimilarityOracle};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Unit-normalized word vectors with brute-force cosine search.
#[derive(Debug, Clone, Default)]
pub struct WordVectors {
    dimensions: usize,
    words: Vec<String>,
    index: HashMap<String, usize>,
    /// Row-major, one unit vector per word.
    vectors: Vec<f32>,
}

impl WordVectors {
    /// Loads at most `limit` vectors from a word2vec text file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>, limit: usize) -> Result<Self, LexiconError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            LexiconError::new(format!(
                "Failed to open word vectors {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let vectors = Self::parse(BufReader::new(file), limit)?;
        info!(
            words = vectors.len(),
            dimensions = vectors.dimensions,
            "Word vectors loaded"
        );
        Ok(vectors)
    }

    /// Parses word2vec text: an optional `count dims` header, then one
    /// `word v1 v2 ...` line per word.
    pub fn parse(reader: impl BufRead, limit: usize) -> Result<Self, LexiconError> {
        let mut vectors = Self::default();
        for (line_no, line) in reader.lines().enumerate() {
            if vectors.len() >= limit {
                break;
            }
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let values = fields
                .map(str::parse::<f32>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    LexiconError::new(format!("Bad vector on line {}: {}", line_no + 1, e))
                })?;

            if line_no == 0 && values.len() == 1 && word.parse::<usize>().is_ok() {
                debug!("Skipping word2vec header");
                continue;
            }
            vectors.push(word, values, line_no + 1)?;
        }
        Ok(vectors)
    }

    fn push(
        &mut self,
        word: &str,
        mut values: Vec<f32>,
        line_no: usize,
    ) -> Result<(), LexiconError> {
        if self.dimensions == 0 {
            self.dimensions = values.len();
        }
        if values.is_empty() || values.len() != self.dimensions {
            return Err(LexiconError::new(format!(
                "Line {} has {} dimensions, expected {}",
                line_no,
                values.len(),
                self.dimensions
            )));
        }
        if self.index.contains_key(word) {
            warn!(word, "Duplicate word vector ignored");
            return Ok(());
        }
        normalize(&mut values);
        self.index.insert(word.to_string(), self.words.len());
        self.words.push(word.to_string());
        self.vectors.extend(values);
        Ok(())
    }

    /// Number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn row(&self, i: usize) -> &[f32] {
        &self.vectors[i * self.dimensions..(i + 1) * self.dimensions]
    }
}

fn normalize(values: &mut [f32]) {
    let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        values.iter_mut().for_each(|v| *v /= norm);
    }
}

impl SimilarityOracle for WordVectors {
    #[instrument(skip(self), fields(vocabulary = self.len()))]
    fn nearest(&self, anchors: &[String], k: usize) -> Vec<(String, f32)> {
        let known: HashSet<usize> = anchors
            .iter()
            .filter_map(|a| self.index.get(a.as_str()).copied())
            .collect();
        if known.is_empty() || k == 0 {
            return Vec::new();
        }

        let mut mean = vec![0.0f32; self.dimensions];
        for &i in &known {
            mean.iter_mut().zip(self.row(i)).for_each(|(m, v)| *m += v);
        }
        normalize(&mut mean);

        let mut scored: Vec<(usize, f32)> = (0..self.words.len())
            .filter(|i| !known.contains(i))
            .map(|i| (i, self.row(i).iter().zip(&mean).map(|(a, b)| a * b).sum()))
            .collect();
        let by_score = |a: &(usize, f32), b: &(usize, f32)| b.1.total_cmp(&a.1);
        if scored.len() > k {
            scored.select_nth_unstable_by(k - 1, by_score);
            scored.truncate(k);
        }
        scored.sort_by(|a, b| match by_score(a, b) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        });

        scored
            .into_iter()
            .map(|(i, score)| (self.words[i].clone(), score))
            .collect()
    }

    fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }
}
