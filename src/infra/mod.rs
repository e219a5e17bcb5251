pub mod fs_corpus_adapter;

pub use fs_corpus_adapter::FsCorpusAdapter;
