pub mod ports;
pub mod clean_corpus_use_case;
pub mod corpus_stats_use_case;
