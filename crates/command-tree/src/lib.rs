//! Command tree data model for slash-complete.
//!
//! Defines the [`CommandNode`] tree that the autocomplete engine walks, the
//! closed set of argument kinds ([`ArgKind`]), and the [`ListItem`] values
//! offered by list arguments. Trees are usually deserialized from JSON with
//! [`CommandTree::from_json`], which also enforces the structural invariants
//! checked by [`validate`].

mod validate;

pub use validate::{IssueKind, IssueSeverity, TreeIssue, validate};

use serde::{Deserialize, Serialize};

/// Current format version written by [`CommandTree::to_json`].
pub const TREE_FORMAT_VERSION: &str = "1.0.0";

/// Errors produced while loading or constructing a command tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The input is not valid command tree JSON.
    #[error("invalid command tree JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The tree violates a structural invariant.
    #[error("invalid command tree at `{path}`: {reason}")]
    Invalid {
        /// Slash-joined trigger path of the offending node.
        path: String,
        /// Human-readable description of the violation.
        reason: String,
    },
}

// ── Nodes ───────────────────────────────────────────────────────────────

/// One command or sub-command in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandNode {
    /// Literal token identifying the command (e.g. `"jira"`).
    pub trigger: String,
    /// Visibility tag. Empty means public.
    #[serde(default)]
    pub role_id: String,
    /// Short display hint (e.g. `"[command]"`).
    #[serde(default)]
    pub hint: String,
    /// Description shown next to the suggestion.
    #[serde(default)]
    pub help_text: String,
    /// Positional (and unsupported named) arguments, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
    /// Child commands, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_commands: Vec<CommandNode>,
}

impl CommandNode {
    /// Create a public node with the given trigger and nothing else.
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            role_id: String::new(),
            hint: String::new(),
            help_text: String::new(),
            arguments: Vec::new(),
            sub_commands: Vec::new(),
        }
    }

    /// Set the display hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Set the help text.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    /// Restrict visibility to the given role.
    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    /// Append an argument.
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Append a sub-command.
    pub fn with_sub_command(mut self, node: CommandNode) -> Self {
        self.sub_commands.push(node);
        self
    }

    /// Whether the node is visible to everyone.
    pub fn is_public(&self) -> bool {
        self.role_id.is_empty()
    }
}

// ── Arguments ───────────────────────────────────────────────────────────

/// An argument definition attached to a command node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    /// Empty for positional arguments. Named arguments are not parsed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Description used for every suggestion this argument produces.
    #[serde(default)]
    pub help_text: String,
    /// Kind and kind-specific payload.
    #[serde(flatten)]
    pub kind: ArgKind,
}

impl Argument {
    /// A free-text argument.
    pub fn text(help_text: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            help_text: help_text.into(),
            kind: ArgKind::Text { hint: hint.into() },
        }
    }

    /// An argument whose values come from a fixed list.
    pub fn static_list(help_text: impl Into<String>, items: Vec<ListItem>) -> Self {
        Self {
            name: String::new(),
            help_text: help_text.into(),
            kind: ArgKind::StaticList { items },
        }
    }

    /// An argument whose values are fetched from `fetch_url` at suggestion time.
    pub fn dynamic_list(help_text: impl Into<String>, fetch_url: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            help_text: help_text.into(),
            kind: ArgKind::DynamicList {
                fetch_url: fetch_url.into(),
            },
        }
    }

    /// Turn this into a named argument.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the argument is matched by position.
    pub fn is_positional(&self) -> bool {
        self.name.is_empty()
    }
}

/// The closed set of argument kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ArgKind {
    /// Free text; a single word or a `"quoted multi word"` value.
    Text {
        /// Display hint while the value is being typed.
        #[serde(default)]
        hint: String,
    },
    /// One of a fixed, ordered list of items.
    StaticList {
        /// Candidate items, in declaration order.
        items: Vec<ListItem>,
    },
    /// One of a list of items fetched from an external source.
    #[serde(rename_all = "camelCase")]
    DynamicList {
        /// Locator handed to the list fetcher (usually a URL).
        fetch_url: String,
    },
}

impl ArgKind {
    /// Short lowercase name of the kind, as used in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            ArgKind::Text { .. } => "text",
            ArgKind::StaticList { .. } => "staticList",
            ArgKind::DynamicList { .. } => "dynamicList",
        }
    }
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single candidate value of a list argument.
///
/// Field names also accept the capitalised form (`Item`, `Hint`, `HelpText`)
/// so that list endpoints written for older servers decode unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// The literal value inserted into the input.
    #[serde(alias = "Item")]
    pub item: String,
    /// Display hint for this item.
    #[serde(default, alias = "Hint")]
    pub hint: String,
    /// Optional per-item help text.
    #[serde(default, alias = "HelpText", skip_serializing_if = "String::is_empty")]
    pub help_text: String,
}

impl ListItem {
    /// Create an item with a hint and no help text.
    pub fn new(item: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            hint: hint.into(),
            help_text: String::new(),
        }
    }
}

/// Decode the list-item wire format: a JSON array of [`ListItem`] objects.
pub fn list_items_from_json(json: &str) -> Result<Vec<ListItem>, serde_json::Error> {
    serde_json::from_str(json)
}

// ── Tree container ──────────────────────────────────────────────────────

/// A validated, immutable set of top-level command nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandTree {
    /// Format version of the document the tree was loaded from.
    pub format_version: String,
    commands: Vec<CommandNode>,
}

/// Wrapped on-disk shape accepted by [`CommandTree::from_json`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreeDocument {
    #[serde(default = "default_format_version")]
    format_version: String,
    commands: Vec<CommandNode>,
}

fn default_format_version() -> String {
    TREE_FORMAT_VERSION.to_string()
}

impl CommandTree {
    /// Build a tree, rejecting the first error-severity structural issue.
    pub fn new(commands: Vec<CommandNode>) -> Result<Self, TreeError> {
        Self::with_version(default_format_version(), commands)
    }

    fn with_version(format_version: String, commands: Vec<CommandNode>) -> Result<Self, TreeError> {
        if let Some(issue) = validate(&commands)
            .into_iter()
            .find(|i| i.kind.severity() == IssueSeverity::Error)
        {
            return Err(TreeError::Invalid {
                path: issue.path,
                reason: issue.kind.to_string(),
            });
        }
        Ok(Self {
            format_version,
            commands,
        })
    }

    /// Parse and validate a tree from JSON.
    ///
    /// Accepts either `{"formatVersion": .., "commands": [..]}` or a bare
    /// array of command nodes.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let (format_version, commands) = Self::parse_document(json)?;
        Self::with_version(format_version, commands)
    }

    /// Parse JSON into nodes without structural validation.
    ///
    /// Used by tooling that wants to report every issue instead of failing
    /// on the first one.
    pub fn nodes_from_json(json: &str) -> Result<Vec<CommandNode>, TreeError> {
        Ok(Self::parse_document(json)?.1)
    }

    fn parse_document(json: &str) -> Result<(String, Vec<CommandNode>), TreeError> {
        if json.trim_start().starts_with('[') {
            let commands: Vec<CommandNode> = serde_json::from_str(json)?;
            return Ok((default_format_version(), commands));
        }
        let doc: TreeDocument = serde_json::from_str(json)?;
        Ok((doc.format_version, doc.commands))
    }

    /// Serialize the tree back to its wrapped JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Top-level command nodes in declaration order.
    pub fn commands(&self) -> &[CommandNode] {
        &self.commands
    }

    /// Follow a trigger path (e.g. `["jira", "create"]`) from the roots.
    pub fn find(&self, path: &[&str]) -> Option<&CommandNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.commands.iter().find(|c| c.trigger == *first)?;
        for trigger in rest {
            node = node.sub_commands.iter().find(|c| c.trigger == *trigger)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_kind_deserializes_from_type_tag() {
        let arg: Argument = serde_json::from_str(
            r#"{"type":"dynamicList","helpText":"pick","fetchUrl":"/lists/projects"}"#,
        )
        .expect("valid argument");
        assert!(arg.is_positional());
        assert_eq!(
            arg.kind,
            ArgKind::DynamicList {
                fetch_url: "/lists/projects".into()
            }
        );
        assert_eq!(arg.help_text, "pick");
    }

    #[test]
    fn static_list_without_items_is_rejected() {
        let res = serde_json::from_str::<Argument>(r#"{"type":"staticList"}"#);
        assert!(res.is_err(), "items are required for static lists");
    }

    #[test]
    fn unknown_arg_type_is_rejected() {
        let res = serde_json::from_str::<Argument>(r#"{"type":"number"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn list_item_accepts_capitalised_fields() {
        let items = list_items_from_json(
            r#"[{"Item":"open","Hint":"state","HelpText":"Open issues"},{"item":"closed"}]"#,
        )
        .expect("valid items");
        assert_eq!(items[0].item, "open");
        assert_eq!(items[0].hint, "state");
        assert_eq!(items[0].help_text, "Open issues");
        assert_eq!(items[1], ListItem::new("closed", ""));
    }

    #[test]
    fn node_defaults_fill_optional_fields() {
        let node: CommandNode = serde_json::from_str(r#"{"trigger":"echo"}"#).unwrap();
        assert_eq!(node, CommandNode::new("echo"));
        assert!(node.is_public());
    }

    #[test]
    fn builder_matches_json() {
        let built = CommandNode::new("echo")
            .with_hint("[text]")
            .with_help_text("Echo text back")
            .with_argument(Argument::text("the message", "message"));
        let parsed: CommandNode = serde_json::from_str(
            r#"{"trigger":"echo","hint":"[text]","helpText":"Echo text back",
                "arguments":[{"type":"text","helpText":"the message","hint":"message"}]}"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn arg_kind_display() {
        assert_eq!(ArgKind::Text { hint: String::new() }.to_string(), "text");
        assert_eq!(ArgKind::StaticList { items: vec![] }.to_string(), "staticList");
    }
}
