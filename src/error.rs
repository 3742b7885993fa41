/// Runtime input errors for phrase conversion.
///
/// All failures are deterministic functions of the input; no operation is
/// retried internally and no partial result accompanies an error.
#[derive(Debug, thiserror::Error)]
pub enum MnemonicsError {
    #[error("input has length 0 - not valid for conversion")]
    EmptyInput,

    #[error("language not recognized: {0}")]
    UnknownLanguage(String),

    #[error("word not found in dictionary for given language: {0}")]
    UnknownWord(String),
}

/// Dictionary construction errors.
///
/// These indicate malformed word-list data, not invalid caller input, and
/// are reported once at construction time rather than per conversion.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary has wrong size: expected {expected}, got {got}")]
    WrongSize { expected: usize, got: usize },

    #[error("word {word:?} at index {index} is shorter than the unique prefix length")]
    ShortWord { word: String, index: usize },

    #[error("duplicate unique prefix {prefix:?} at index {index}")]
    PrefixConflict { prefix: String, index: usize },
}
