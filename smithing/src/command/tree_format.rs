use crate::command::tree::{CommandTree, NodeType};
use std::fmt::{Display, Formatter};

impl CommandTree {
    /// One line per executable path, e.g. `/smithing preview <template> <base> <addition>`.
    pub(crate) fn usages(&self) -> Vec<String> {
        self.iter_paths()
            .map(|path| {
                let mut usage = format!("/{}", self.names[0]);
                for node in path.iter().map(|&i| &self.nodes[i]) {
                    match node.node_type {
                        NodeType::Literal { string } => {
                            usage.push(' ');
                            usage.push_str(string);
                        }
                        NodeType::Argument { name, .. } => {
                            usage.push_str(&format!(" <{name}>"));
                        }
                        // not visible in usage hints
                        NodeType::ExecuteLeaf { .. } | NodeType::Require { .. } => {}
                    }
                }
                usage
            })
            .collect()
    }
}

impl Display for CommandTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.usages().join(" | "))
    }
}
