pub mod class;
pub mod node;
pub mod opcode;
pub mod repeat;

pub use self::{
    class::{Category, Class, ClassItem},
    node::{AtCode, Node},
    opcode::Opcode,
    repeat::{MAXREPEAT, Repeat},
};

/// A parsed pattern: the top-level node sequence plus the number of groups.
#[derive(Debug, Default, Clone)]
pub struct AstRoot {
    tree: Vec<Node>,
    group_count: usize,
}

impl AstRoot {
    #[must_use]
    pub(crate) fn new(tree: Vec<Node>, group_count: usize) -> Self {
        Self { tree, group_count }
    }

    /// The number of capturing groups in the pattern.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.tree
    }
}

impl std::ops::Deref for AstRoot {
    type Target = [Node];

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl PartialEq<&[Node]> for AstRoot {
    fn eq(&self, other: &&[Node]) -> bool {
        self.tree == *other
    }
}

impl<const N: usize> PartialEq<[Node; N]> for AstRoot {
    fn eq(&self, other: &[Node; N]) -> bool {
        self.tree == other
    }
}
