//! Fixed-corpus retrieval that seasons scoring prompts with research hints.

/// Relevance-ranked sentence retrieval over a small fixed corpus.
///
/// A stand-in for a real literature retrieval service: matching is plain
/// lowercase word overlap, with the corpus head as the fallback when
/// nothing overlaps.
#[derive(Debug, Clone)]
pub struct Advisor {
    corpus: Vec<String>,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(vec![
            "Linear attention mechanisms can reduce the quadratic complexity \
             of standard self-attention by approximating the softmax kernel."
                .to_string(),
            "Increasing the number of layers and hidden size typically improves \
             model capacity but also increases compute requirements."
                .to_string(),
            "Novel architectures should balance expressiveness with efficiency.".to_string(),
        ])
    }
}

impl Advisor {
    /// Create an advisor over the given corpus.
    pub fn new(corpus: Vec<String>) -> Self {
        Self { corpus }
    }

    /// Return up to `top_k` corpus sentences ranked by word overlap with
    /// the question (corpus order on ties). When no sentence overlaps at
    /// all, the first `top_k` sentences are returned instead, so the
    /// result is empty only if the corpus is.
    pub fn query(&self, question: &str, top_k: usize) -> Vec<String> {
        let question = question.to_lowercase();
        let words: Vec<&str> = question.split_whitespace().collect();

        let mut ranked: Vec<(usize, &String)> = self
            .corpus
            .iter()
            .filter_map(|sentence| {
                let lower = sentence.to_lowercase();
                let overlap = words.iter().filter(|word| lower.contains(**word)).count();
                (overlap > 0).then_some((overlap, sentence))
            })
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        if ranked.is_empty() {
            return self.corpus.iter().take(top_k).cloned().collect();
        }
        ranked
            .into_iter()
            .take(top_k)
            .map(|(_, sentence)| sentence.clone())
            .collect()
    }
}
