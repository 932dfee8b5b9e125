//! Format-agnostic data model for extracted documentation.

use std::collections::HashMap;
use std::fmt;

/// A documented `typedef enum`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDoc {
    /// The `typedef` alias, e.g. `device_t`. Key of the [`EnumTable`].
    pub alias: String,
    /// Declared tag name, e.g. `Device`.
    pub tag: Option<String>,
    /// Underlying type after `:`.
    pub extends: Option<String>,
    pub docstring: String,
    pub constants: Vec<EnumConstant>,
    /// Link to this enum's heading, e.g. ``[`DY::device_t`](#typedef-enum-class-dydevice_t)``
    pub anchor: String,
}

impl EnumDoc {
    /// Tagged enums are documented as `enum class`.
    pub fn is_class(&self) -> bool {
        self.tag.is_some()
    }

    /// Name used when qualifying constants.
    pub fn scope_name(&self) -> &str {
        self.tag.as_deref().unwrap_or(&self.alias)
    }

    pub fn has_descriptions(&self) -> bool {
        self.constants.iter().any(|c| !c.description.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstant {
    pub name: String,
    /// Explicit initializer verbatim, or the zero-padded hex index.
    pub value: String,
    /// Trailing `//` comments, whitespace collapsed.
    pub description: String,
}

/// Enums keyed by alias, kept in declaration order.
///
/// Re-inserting an alias replaces the earlier enum but keeps its position.
#[derive(Debug, Default)]
pub struct EnumTable {
    entries: Vec<EnumDoc>,
    index: HashMap<String, usize>,
}

impl EnumTable {
    /// Insert `doc`, returning the enum it replaced, if any.
    pub fn insert(&mut self, doc: EnumDoc) -> Option<EnumDoc> {
        match self.index.get(&doc.alias) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], doc)),
            None => {
                self.index.insert(doc.alias.clone(), self.entries.len());
                self.entries.push(doc);
                None
            }
        }
    }

    pub fn get(&self, alias: &str) -> Option<&EnumDoc> {
        self.index.get(alias).map(|&pos| &self.entries[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnumDoc> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A type as shown in method headings and definition tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A known enum, shown as a link to its section.
    Enum { anchor: String },
    /// Anything else, shown as inline code.
    Raw(String),
}

impl TypeRef {
    pub fn resolve(name: &str, enums: &EnumTable) -> Self {
        match enums.get(name) {
            Some(doc) => TypeRef::Enum {
                anchor: doc.anchor.clone(),
            },
            None => TypeRef::Raw(name.to_string()),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Enum { anchor } => f.write_str(anchor),
            TypeRef::Raw(name) => write!(f, "`{}`", name),
        }
    }
}

/// A documented method declaration.
///
/// The raw fields are not rendered; they keep the declaration as written.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct MethodDoc {
    pub name: String,
    /// Return type as declared; kept alongside the resolved `return_type`.
    pub raw_return_type: String,
    pub return_type: TypeRef,
    /// Parameter list exactly as written between the parentheses.
    pub raw_args: String,
    pub args: ParsedArgs,
    /// Full cleaned comment; rendering uses `description` and `definitions`.
    pub docstring: String,
    /// Docstring text before the first tagged field.
    pub description: String,
    pub definitions: Vec<Definition>,
    /// `@param` names with no matching argument; their rows are dropped.
    pub unknown_params: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Param,
    Return,
    Throw,
}

impl DefinitionKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "param" => Some(DefinitionKind::Param),
            "return" => Some(DefinitionKind::Return),
            "throw" => Some(DefinitionKind::Throw),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Param => "param",
            DefinitionKind::Return => "return",
            DefinitionKind::Throw => "throw",
        }
    }
}

/// One `@param` / `@return` / `@throw` row.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub kind: DefinitionKind,
    /// Parameter name; empty for `@return` and `@throw`.
    pub name: String,
    pub ty: TypeRef,
    pub description: String,
}

/// Parameter list split into `(type, name)` pairs, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub args: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub ty: String,
    pub name: String,
}

impl ParsedArgs {
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.ty.as_str())
    }
}
