//! Stop filter implementation.
//!
//! Removes common words that carry little evidence for any category. The
//! built-in English list holds several hundred function words and fillers.
//!
//! # Examples
//!
//! ```
//! use bayestag::analysis::token_filter::Filter;
//! use bayestag::analysis::token_filter::stop::StopFilter;
//! use bayestag::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec![
//!     Token::new("greetings", 0),
//!     Token::new("mary", 1),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "mary");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "able", "about", "above", "abroad", "according", "accordingly", "across", "actually",
    "adj", "after", "afterwards", "again", "against", "ago", "ahead", "ain't", "all", "allow",
    "allows", "almost", "alone", "along", "alongside", "already", "also", "although", "always",
    "am", "amid", "amidst", "among", "amongst", "an", "and", "another", "any", "anybody", "anyhow",
    "anyone", "anything", "anyway", "anyways", "anywhere", "apart", "appear", "appreciate",
    "appropriate", "are", "aren't", "around", "as", "a's", "aside", "ask", "asking", "associated",
    "at", "available", "away", "awfully", "b", "back", "backward", "backwards", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "begin", "behind",
    "being", "believe", "below", "beside", "besides", "best", "better", "between", "beyond",
    "both", "brief", "but", "by", "c", "came", "can", "cannot", "cant", "can't", "caption",
    "cause", "causes", "certain", "certainly", "changes", "clearly", "c'mon", "co", "co.", "com",
    "come", "comes", "concerning", "consequently", "consider", "considering", "contain",
    "containing", "contains", "corresponding", "could", "couldn't", "course", "c's", "currently",
    "d", "dare", "daren't", "definitely", "described", "despite", "did", "didn't", "different",
    "directly", "do", "does", "doesn't", "doing", "done", "don't", "down", "downwards", "during",
    "e", "each", "edu", "eg", "eight", "eighty", "either", "else", "elsewhere", "end", "ending",
    "enough", "entirely", "especially", "et", "etc", "even", "ever", "evermore", "every",
    "everybody", "everyone", "everything", "everywhere", "ex", "exactly", "example", "except", "f",
    "fairly", "far", "farther", "few", "fewer", "fifth", "first", "five", "followed", "following",
    "follows", "for", "forever", "former", "formerly", "forth", "forward", "found", "four", "from",
    "further", "furthermore", "g", "get", "gets", "getting", "given", "gives", "go", "goes",
    "going", "gone", "got", "gotten", "greetings", "h", "had", "hadn't", "half", "happens",
    "hardly", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "hello", "help",
    "hence", "her", "here", "hereafter", "hereby", "herein", "here's", "hereupon", "hers",
    "herself", "he's", "hi", "him", "himself", "his", "hither", "hopefully", "how", "howbeit",
    "however", "hundred", "i", "i'd", "ie", "if", "ignored", "i'll", "i'm", "immediate", "in",
    "inasmuch", "inc", "inc.", "indeed", "indicate", "indicated", "indicates", "inner", "inside",
    "insofar", "instead", "into", "inward", "is", "isn't", "it", "it'd", "it'll", "its", "it's",
    "itself", "i've", "j", "just", "k", "keep", "keeps", "kept", "know", "known", "knows", "l",
    "last", "lately", "later", "latter", "latterly", "least", "less", "lest", "let", "let's",
    "like", "liked", "likely", "likewise", "little", "look", "looking", "looks", "low", "lower",
    "ltd", "m", "made", "mainly", "make", "makes", "many", "may", "maybe", "mayn't", "me", "mean",
    "meantime", "meanwhile", "merely", "might", "mightn't", "mine", "minus", "miss", "more",
    "moreover", "most", "mostly", "mr", "mrs", "much", "must", "mustn't", "my", "myself", "n",
    "name", "namely", "nd", "near", "nearly", "necessary", "need", "needn't", "needs", "neither",
    "never", "neverf", "neverless", "nevertheless", "new", "next", "nine", "ninety", "no",
    "nobody", "non", "none", "nonetheless", "noone", "no-one", "nor", "normally", "not", "nothing",
    "notwithstanding", "novel", "now", "nowhere", "o", "obviously", "of", "off", "often", "oh",
    "ok", "okay", "old", "on", "once", "one", "ones", "one's", "only", "onto", "opposite", "or",
    "other", "others", "otherwise", "ought", "oughtn't", "our", "ours", "ourselves", "out",
    "outside", "over", "overall", "own", "p", "particular", "particularly", "past", "per",
    "perhaps", "placed", "please", "plus", "possible", "presumably", "probably", "provided",
    "provides", "q", "que", "quite", "qv", "r", "rather", "rd", "re", "really", "reasonably",
    "recent", "recently", "regarding", "regardless", "regards", "relatively", "respectively",
    "right", "round", "s", "said", "same", "saw", "say", "saying", "says", "second", "secondly",
    "see", "seeing", "seem", "seemed", "seeming", "seems", "seen", "self", "selves", "sensible",
    "sent", "serious", "seriously", "seven", "several", "shall", "shan't", "she", "she'd",
    "she'll", "she's", "should", "shouldn't", "since", "six", "so", "some", "somebody", "someday",
    "somehow", "someone", "something", "sometime", "sometimes", "somewhat", "somewhere", "soon",
    "sorry", "specified", "specify", "specifying", "still", "sub", "such", "sup", "sure", "t",
    "take", "taken", "taking", "tell", "tends", "th", "than", "thank", "thanks", "thanx", "that",
    "that'll", "thats", "that's", "that've", "the", "their", "theirs", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "there'd", "therefore", "therein",
    "there'll", "there're", "theres", "there's", "thereupon", "there've", "these", "they",
    "they'd", "they'll", "they're", "they've", "thing", "things", "think", "third", "thirty",
    "this", "thorough", "thoroughly", "those", "though", "three", "through", "throughout", "thru",
    "thus", "till", "to", "together", "too", "took", "toward", "towards", "tried", "tries",
    "truly", "try", "trying", "t's", "twice", "two", "u", "un", "under", "underneath", "undoing",
    "unfortunately", "unless", "unlike", "unlikely", "until", "unto", "up", "upon", "upwards",
    "us", "use", "used", "useful", "uses", "using", "usually", "v", "value", "various", "versus",
    "very", "via", "viz", "vs", "w", "want", "wants", "was", "wasn't", "way", "we", "we'd",
    "welcome", "well", "we'll", "went", "were", "we're", "weren't", "we've", "what", "whatever",
    "what'll", "what's", "what've", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "where's", "whereupon", "wherever", "whether", "which", "whichever",
    "while", "whilst", "whither", "who", "who'd", "whoever", "whole", "who'll", "whom", "whomever",
    "who's", "whose", "why", "will", "willing", "wish", "with", "within", "without", "wonder",
    "won't", "would", "wouldn't", "x", "y", "yes", "yet", "you", "you'd", "you'll", "your",
    "you're", "yours", "yourself", "yourselves", "you've", "z", "zero", "successful", "greatest",
    "began", "including", "close",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Which stop-word set a stop filter is built from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWords {
    /// The built-in English list.
    #[default]
    English,
    /// No stop words; every token is kept.
    None,
    /// A caller-supplied list.
    Custom(Vec<String>),
}

impl StopWords {
    /// Materialize this choice as a word set.
    pub fn to_set(&self) -> HashSet<String> {
        match self {
            StopWords::English => DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
            StopWords::None => HashSet::new(),
            StopWords::Custom(words) => words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

/// A filter that removes stop words from the token stream.
///
/// Stop words can either be removed entirely (the default) or marked as
/// stopped while kept in the stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use bayestag::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Create a stop filter from a [`StopWords`] choice.
    pub fn from_stop_words(stop_words: &StopWords) -> Self {
        Self::with_stop_words(stop_words.to_set())
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
