//! Method extraction.
//!
//! Recognizes a single-line declaration directly after a doc comment:
//!
//! ```text
//! /**
//!  * Description.
//!  * @param name what it is
//!  * @return what comes back
//!  * @throw Error when it fails
//!  */
//! return_t name(type name, type *other);
//! ```

use super::{collapse_whitespace, DocBlock};
use crate::config::Config;
use crate::error::ExtractError;
use crate::model::{
    Argument, Definition, DefinitionKind, EnumTable, MethodDoc, ParsedArgs, TypeRef,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static RE_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\s*(?P<ret>[A-Za-z_]\w*)[ \t]+(?P<name>[A-Za-z_]\w*)\((?P<args>[^)\n]*)\);")
        .unwrap()
});

// `@returns` and `@throws` are accepted as spellings of `@return` / `@throw`.
static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(?P<tag>param|return|throw)s?\b").unwrap());

// Any Doxygen tag, rendered or not, ends the field before it.
static RE_FIELD_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[A-Za-z]+\b").unwrap());

/// Lazily yields one [`MethodDoc`] per documented declaration, in source order.
///
/// Methods with an unusable argument list come out as `Err` so the caller
/// decides whether to skip them or stop.
pub struct MethodExtractor<'a> {
    blocks: std::slice::Iter<'a, DocBlock<'a>>,
    enums: &'a EnumTable,
    config: &'a Config,
}

impl<'a> MethodExtractor<'a> {
    pub fn new(blocks: &'a [DocBlock<'a>], enums: &'a EnumTable, config: &'a Config) -> Self {
        Self {
            blocks: blocks.iter(),
            enums,
            config,
        }
    }

    fn build(
        &self,
        block: &DocBlock<'_>,
        ret: &str,
        name: &str,
        raw_args: &str,
    ) -> Result<MethodDoc, ExtractError> {
        let args = parse_args(name, raw_args)?;
        let return_type = TypeRef::resolve(ret, self.enums);
        let docstring = block.docstring.clone();
        let description = split_description(&docstring).to_string();

        let mut definitions = Vec::new();
        let mut unknown_params = Vec::new();
        for (kind, body) in tagged_fields(&docstring) {
            match kind {
                DefinitionKind::Param => {
                    let param = body.split_whitespace().next().unwrap_or_default();
                    let Some(ty) = args.type_of(param) else {
                        unknown_params.push(param.to_string());
                        continue;
                    };
                    definitions.push(Definition {
                        kind,
                        name: param.to_string(),
                        ty: TypeRef::resolve(ty, self.enums),
                        description: collapse_whitespace(body),
                    });
                }
                DefinitionKind::Return => definitions.push(Definition {
                    kind,
                    name: String::new(),
                    ty: return_type.clone(),
                    description: collapse_whitespace(body),
                }),
                DefinitionKind::Throw => {
                    let body = body.trim_start();
                    let (exception, rest) = body
                        .split_once(char::is_whitespace)
                        .unwrap_or((body, ""));
                    definitions.push(Definition {
                        kind,
                        name: String::new(),
                        ty: TypeRef::Raw(exception.to_string()),
                        description: collapse_whitespace(rest),
                    });
                }
            }
        }

        debug!(
            method = %self.config.qualify_member(name),
            rows = definitions.len(),
            "extracted method"
        );

        Ok(MethodDoc {
            name: name.to_string(),
            raw_return_type: ret.to_string(),
            return_type,
            raw_args: raw_args.to_string(),
            args,
            docstring,
            description,
            definitions,
            unknown_params,
        })
    }
}

impl Iterator for MethodExtractor<'_> {
    type Item = Result<MethodDoc, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(block) = self.blocks.next() {
            if let Some(caps) = RE_SIGNATURE.captures(block.following) {
                return Some(self.build(block, &caps["ret"], &caps["name"], &caps["args"]));
            }
            // Enum blocks belong to the enum extractor.
            if !block.following.trim_start().starts_with("typedef") {
                debug!("{}", ExtractError::MalformedCommentBlock { line: block.line });
            }
        }
        None
    }
}

/// Docstring text before the first tagged field.
pub fn split_description(docstring: &str) -> &str {
    match RE_TAG.find(docstring) {
        Some(m) => docstring[..m.start()].trim(),
        None => docstring.trim(),
    }
}

/// Every tagged field with its body, the text up to the next `@tag` of any
/// kind.
fn tagged_fields(docstring: &str) -> Vec<(DefinitionKind, &str)> {
    let mut fields = Vec::new();

    for caps in RE_TAG.captures_iter(docstring) {
        let (Some(whole), Some(kind)) = (
            caps.get(0),
            DefinitionKind::from_tag(&caps["tag"]),
        ) else {
            continue;
        };
        let rest = &docstring[whole.end()..];
        let end = RE_FIELD_END.find(rest).map_or(rest.len(), |next| next.start());
        fields.push((kind, rest[..end].trim()));
    }
    fields
}

/// Split `type name, type *name` into pairs, stripping `*`, `[` and `]`
/// from the names.
pub fn parse_args(method: &str, raw: &str) -> Result<ParsedArgs, ExtractError> {
    if raw.trim().is_empty() {
        return Ok(ParsedArgs::default());
    }

    let mut args = Vec::new();
    for argument in raw.split(',') {
        let words: Vec<&str> = argument.split_whitespace().collect();
        let [ty, name] = words[..] else {
            return Err(ExtractError::MalformedArgumentList {
                method: method.to_string(),
                argument: argument.trim().to_string(),
            });
        };
        let name = name.trim_start_matches('*');
        let name = name.split('[').next().unwrap_or(name);
        args.push(Argument {
            ty: ty.to_string(),
            name: name.trim_end_matches(['*', ']']).to_string(),
        });
    }
    Ok(ParsedArgs { args })
}
