/// Default locations, relative to the configured base directory.
/// Raw text lives under `rawCorpus/`, cleaned output mirrors it under `cleanCorpus/`.
pub const DEFAULT_RAW_DIR: &str = "rawCorpus";
pub const DEFAULT_CLEAN_DIR: &str = "cleanCorpus";
pub const DEFAULT_CORPUS_FILE: &str = "fairy_tales.txt";

// Config discovery
pub const DEFAULT_CONFIG_FILE: &str = "corpus_cleaner.toml";

// Logging
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "corpus_cleaner.log";
pub const DEFAULT_LOG_FILTER: &str = "corpus_cleaner=info";
pub const VERBOSE_LOG_FILTER: &str = "corpus_cleaner=debug";

/// Number of entries shown by `stats` when `--top` is not given
pub const DEFAULT_TOP_WORDS: usize = 10;
