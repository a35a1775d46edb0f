use crate::command::args::ArgumentConsumer;
use crate::command::tree::{CommandTree, Node, NodeType};
use crate::command::CommandSender;

use super::CommandExecutor;

impl CommandTree {
    /// Add a child [Node] to the root of this [`CommandTree`].
    #[must_use]
    pub fn with_child(mut self, child: impl NodeBuilder) -> Self {
        let node = child.build(&mut self);
        self.children.push(self.nodes.len());
        self.nodes.push(node);
        self
    }

    /// provide at least one name
    #[must_use]
    pub fn new<const NAME_COUNT: usize>(
        names: [&'static str; NAME_COUNT],
        description: &'static str,
    ) -> Self {
        assert!(NAME_COUNT > 0);

        Self {
            nodes: Vec::new(),
            children: Vec::new(),
            names: names.to_vec(),
            description,
        }
    }

    /// Executes if a command terminates at this [Node], i.e. without any arguments.
    ///
    /// Also see [`NonLeafNodeBuilder::execute`].
    #[must_use]
    pub fn execute(mut self, executor: &'static dyn CommandExecutor) -> Self {
        let node = Node {
            node_type: NodeType::ExecuteLeaf { executor },
            children: Vec::new(),
        };

        self.children.push(self.nodes.len());
        self.nodes.push(node);

        self
    }
}

pub trait NodeBuilder {
    fn build(self, tree: &mut CommandTree) -> Node;
}

struct LeafNodeBuilder {
    node_type: NodeType,
}

impl NodeBuilder for LeafNodeBuilder {
    fn build(self, _tree: &mut CommandTree) -> Node {
        Node {
            children: Vec::new(),
            node_type: self.node_type,
        }
    }
}

pub struct NonLeafNodeBuilder {
    node_type: NodeType,
    child_nodes: Vec<NonLeafNodeBuilder>,
    leaf_nodes: Vec<LeafNodeBuilder>,
}

impl NodeBuilder for NonLeafNodeBuilder {
    fn build(self, tree: &mut CommandTree) -> Node {
        let mut child_indices = Vec::new();

        for node_builder in self.child_nodes {
            let node = node_builder.build(tree);
            child_indices.push(tree.nodes.len());
            tree.nodes.push(node);
        }

        for node_builder in self.leaf_nodes {
            let node = node_builder.build(tree);
            child_indices.push(tree.nodes.len());
            tree.nodes.push(node);
        }

        Node {
            children: child_indices,
            node_type: self.node_type,
        }
    }
}

impl NonLeafNodeBuilder {
    const fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            child_nodes: Vec::new(),
            leaf_nodes: Vec::new(),
        }
    }

    /// Add a child [Node] to this one.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.child_nodes.push(child);
        self
    }

    /// Executes if a command terminates at this [Node].
    ///
    /// Also see [`CommandTree::execute`].
    #[must_use]
    pub fn execute(mut self, executor: &'static dyn CommandExecutor) -> Self {
        self.leaf_nodes.push(LeafNodeBuilder {
            node_type: NodeType::ExecuteLeaf { executor },
        });

        self
    }
}

/// Matches a string literal.
pub const fn literal(string: &'static str) -> NonLeafNodeBuilder {
    NonLeafNodeBuilder::new(NodeType::Literal { string })
}

/// `name` identifies this argument in [`ConsumedArgs`](super::args::ConsumedArgs).
///
/// The consumer must remove the arg(s) it uses from [`RawArgs`](super::tree::RawArgs) and
/// return `None` if they are invalid. [`RawArgs`](super::tree::RawArgs) is reversed, so
/// [`Vec::pop`] yields args in ltr order.
pub const fn argument(
    name: &'static str,
    consumer: &'static dyn ArgumentConsumer,
) -> NonLeafNodeBuilder {
    NonLeafNodeBuilder::new(NodeType::Argument { name, consumer })
}

/// `predicate` should return `false` if the requirement for reaching following [Node]s
/// is not met.
pub const fn require(predicate: fn(&CommandSender) -> bool) -> NonLeafNodeBuilder {
    NonLeafNodeBuilder::new(NodeType::Require { predicate })
}
