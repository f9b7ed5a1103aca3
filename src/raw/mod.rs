mod arena;
mod handle;
mod node;
mod stamp;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
pub(crate) use node::{LEFT, Node, RIGHT};
pub(crate) use stamp::Stamp;
