//! Tokenisation and TF-IDF keyword similarity

use crate::error::{CareerMatcherError, Result};
use regex::Regex;
use std::collections::{HashMap, HashSet};

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    token_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        // Words of two or more word characters; single letters never become terms
        let token_regex = Regex::new(r"\b\w\w+\b").expect("Invalid token regex");

        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            token_regex,
        }
    }

    /// Lowercase, split into word tokens and drop stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = self
            .token_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect();
        tokens
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    /// Cosine similarity of the TF-IDF vectors of two documents, as a
    /// percentage rounded to two decimals.
    ///
    /// IDF is fitted on the pair itself with add-one smoothing, so terms
    /// shared by both documents weigh less than terms unique to one. Fails
    /// when neither document contributes a single term.
    pub fn semantic_similarity(&self, document: &str, reference: &str) -> Result<f64> {
        let doc_counts = term_counts(self.tokenize(document));
        let ref_counts = term_counts(self.tokenize(reference));

        if doc_counts.is_empty() && ref_counts.is_empty() {
            return Err(CareerMatcherError::Similarity(
                "empty vocabulary; documents contain only stop words".to_string(),
            ));
        }

        let idf = |term: &str| {
            let df = doc_counts.contains_key(term) as u32 + ref_counts.contains_key(term) as u32;
            (3.0 / (1.0 + df as f64)).ln() + 1.0
        };

        let doc_vector = weighted(&doc_counts, &idf);
        let ref_vector = weighted(&ref_counts, &idf);

        let doc_norm = norm(&doc_vector);
        let ref_norm = norm(&ref_vector);
        if doc_norm == 0.0 || ref_norm == 0.0 {
            return Ok(0.0);
        }

        let dot: f64 = doc_vector
            .iter()
            .filter_map(|(term, weight)| ref_vector.get(term).map(|other| weight * other))
            .sum();

        let cosine = (dot / (doc_norm * ref_norm)).clamp(0.0, 1.0);
        Ok(super::round2(cosine * 100.0))
    }
}

fn term_counts(tokens: Vec<String>) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn weighted<F>(counts: &HashMap<String, u32>, idf: &F) -> HashMap<String, f64>
where
    F: Fn(&str) -> f64,
{
    counts
        .iter()
        .map(|(term, &count)| (term.clone(), count as f64 * idf(term)))
        .collect()
}

fn norm(vector: &HashMap<String, f64>) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}
