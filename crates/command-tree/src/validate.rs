//! Structural checks over a command tree.

use crate::{ArgKind, CommandNode};

/// How serious a structural issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// The tree cannot be used as written.
    Error,
    /// The tree works, but some part of it can never produce suggestions.
    Warn,
    /// Informational note.
    Info,
}

/// The kind of structural issue found on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The trigger is empty.
    EmptyTrigger,
    /// The trigger contains whitespace.
    TriggerWhitespace,
    /// The trigger contains uppercase characters.
    TriggerNotLowercase,
    /// The node declares both arguments and sub-commands.
    ArgumentsWithSubCommands,
    /// A static list argument has no items.
    EmptyStaticList {
        /// 0-based argument position.
        index: usize,
    },
    /// A dynamic list argument has an empty fetch URL.
    EmptyFetchUrl {
        /// 0-based argument position.
        index: usize,
    },
    /// A named argument was declared; it will be ignored.
    NamedArgument {
        /// 0-based argument position.
        index: usize,
        /// The declared name.
        name: String,
    },
}

impl IssueKind {
    /// Fixed severity for this kind of issue.
    pub fn severity(&self) -> IssueSeverity {
        match self {
            IssueKind::EmptyTrigger
            | IssueKind::TriggerWhitespace
            | IssueKind::ArgumentsWithSubCommands
            | IssueKind::EmptyFetchUrl { .. } => IssueSeverity::Error,
            IssueKind::TriggerNotLowercase | IssueKind::EmptyStaticList { .. } => {
                IssueSeverity::Warn
            }
            IssueKind::NamedArgument { .. } => IssueSeverity::Info,
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::EmptyTrigger => write!(f, "trigger is empty"),
            IssueKind::TriggerWhitespace => write!(f, "trigger contains whitespace"),
            IssueKind::TriggerNotLowercase => write!(f, "trigger is not lowercase"),
            IssueKind::ArgumentsWithSubCommands => {
                write!(f, "node declares both arguments and sub-commands")
            }
            IssueKind::EmptyStaticList { index } => {
                write!(f, "argument {index}: static list has no items")
            }
            IssueKind::EmptyFetchUrl { index } => {
                write!(f, "argument {index}: dynamic list has no fetch URL")
            }
            IssueKind::NamedArgument { index, name } => {
                write!(f, "argument {index}: named argument `{name}` is not supported")
            }
        }
    }
}

/// A structural issue located at a node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeIssue {
    /// Slash-joined trigger path (e.g. `"jira/create"`).
    pub path: String,
    /// What is wrong.
    pub kind: IssueKind,
}

/// Check every node in the tree, depth first, in declaration order.
pub fn validate(nodes: &[CommandNode]) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    for node in nodes {
        validate_node(node, "", &mut issues);
    }
    issues
}

fn validate_node(node: &CommandNode, parent: &str, issues: &mut Vec<TreeIssue>) {
    let path = if parent.is_empty() {
        node.trigger.clone()
    } else {
        format!("{parent}/{}", node.trigger)
    };
    let mut push = |kind| {
        issues.push(TreeIssue {
            path: path.clone(),
            kind,
        })
    };

    if node.trigger.is_empty() {
        push(IssueKind::EmptyTrigger);
    } else if node.trigger.chars().any(char::is_whitespace) {
        push(IssueKind::TriggerWhitespace);
    }
    if node.trigger.chars().any(char::is_uppercase) {
        push(IssueKind::TriggerNotLowercase);
    }
    if !node.arguments.is_empty() && !node.sub_commands.is_empty() {
        push(IssueKind::ArgumentsWithSubCommands);
    }

    for (index, arg) in node.arguments.iter().enumerate() {
        if !arg.is_positional() {
            push(IssueKind::NamedArgument {
                index,
                name: arg.name.clone(),
            });
        }
        match &arg.kind {
            ArgKind::Text { .. } => {}
            ArgKind::StaticList { items } => {
                if items.is_empty() {
                    push(IssueKind::EmptyStaticList { index });
                }
            }
            ArgKind::DynamicList { fetch_url } => {
                if fetch_url.trim().is_empty() {
                    push(IssueKind::EmptyFetchUrl { index });
                }
            }
        }
    }

    for child in &node.sub_commands {
        validate_node(child, &path, issues);
    }
}
