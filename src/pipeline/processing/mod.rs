// Pipeline processing: text normalization and corpus inspection

pub mod corpus;
pub mod normalize;
