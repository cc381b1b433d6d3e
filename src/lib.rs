pub mod digest;
pub mod error;
pub mod kind;
pub mod model;
pub mod node;
pub mod rewrite;
pub mod storage;
pub mod structural;
pub mod visitors;

pub use error::SarifError;
pub use kind::NodeKind;
pub use node::{AnyNode, SarifNode};
pub use rewrite::{Rewriter, rewrite_root};
pub use structural::Structural;
