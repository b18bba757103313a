// Screening core: normalization, filter, scoring, ranking and summaries.
// Everything below `handlers` is pure and synchronous; handlers own the I/O.

pub mod filter;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod summary;
