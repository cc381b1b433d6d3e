//! Ready-made rewriters built on [`Rewriter`](crate::rewrite::Rewriter).

mod insert_guids;
mod kind_counter;
mod rebase_uri;

pub use insert_guids::GuidInserter;
pub use kind_counter::KindCounter;
pub use rebase_uri::RebaseUriRewriter;
