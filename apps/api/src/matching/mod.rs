// Resume Matching Engine
// Implements: tokenization, synonym expansion, keyword matching, job recommendation, scoring.
// Everything below `handlers` is pure and synchronous; no request state survives a call.

pub mod composer;
pub mod handlers;
pub mod keywords;
pub mod recommender;
pub mod scorer;
pub mod synonyms;
pub mod tokenizer;
