//! GitHub-flavored markdown renderer.
//!
//! Each section is a heading, an optional paragraph and an optional table.
//! Sections end with a newline; the caller separates them with a blank line.

use super::table_cell;
use crate::anchor;
use crate::config::Config;
use crate::model::{DefinitionKind, EnumDoc, MethodDoc};

const DEFINITIONS_HEADER: &str = "|           | __Type__ | __Name__ | __Description__  |\n\
                                  |:----------|:---------|:---------|:-----------------|";

const ENUM_HEADER: &str = "| const | value |\n|:------|:------|";

const ENUM_HEADER_DESCRIBED: &str = "| const | value | description |\n\
                                     |:------|:------|:------------|";

pub struct MarkdownRenderer<'a> {
    config: &'a Config,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Heading, description and definitions table of one method.
    pub fn render_method(&self, method: &MethodDoc) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!(
            "{} {} {}(..)\n",
            self.config.heading_marker(),
            method.return_type,
            self.config.qualify_member(&method.name)
        ));

        if !method.description.is_empty() {
            lines.push(method.description.clone());
            lines.push(String::new());
        }

        if !method.definitions.is_empty() {
            lines.push(DEFINITIONS_HEADER.to_string());
            for def in &method.definitions {
                let name = match def.kind {
                    DefinitionKind::Param => format!("`{}`", def.name),
                    DefinitionKind::Return | DefinitionKind::Throw => String::new(),
                };
                lines.push(format!(
                    "| __{}__ | {} | {} | {} |",
                    def.kind.as_str(),
                    def.ty,
                    name,
                    table_cell(&def.description)
                ));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Heading, docstring and constants table of one enum.
    pub fn render_enum(&self, doc: &EnumDoc) -> String {
        let mut lines: Vec<String> = Vec::new();

        let title = anchor::enum_heading_title(&self.config.namespace, &doc.alias, doc.is_class());
        lines.push(format!("{} {}\n", self.config.heading_marker(), title));

        if !doc.docstring.is_empty() {
            lines.push(doc.docstring.clone());
            lines.push(String::new());
        }

        lines.push(self.render_enum_table(doc));

        if let Some(ref base) = doc.extends {
            let kind = if doc.is_class() { "enum class" } else { "enum" };
            lines.push(format!("This {} is based off {}.", kind, base));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Constants table; the description column only appears when used.
    pub fn render_enum_table(&self, doc: &EnumDoc) -> String {
        let described = doc.has_descriptions();
        let mut lines: Vec<String> = Vec::new();

        let header = if described {
            ENUM_HEADER_DESCRIBED
        } else {
            ENUM_HEADER
        };
        lines.push(header.to_string());
        for constant in &doc.constants {
            let name = format!(
                "{}::{}::{}",
                self.config.namespace,
                doc.scope_name(),
                constant.name
            );
            if described {
                lines.push(format!(
                    "| `{}` | `{}` | {} |",
                    name,
                    constant.value,
                    table_cell(&constant.description)
                ));
            } else {
                lines.push(format!("| `{}` | `{}` |", name, constant.value));
            }
        }
        lines.push(String::new());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Definition, EnumConstant, ParsedArgs, TypeRef};

    fn method(return_type: TypeRef, description: &str, definitions: Vec<Definition>) -> MethodDoc {
        MethodDoc {
            name: "play".to_string(),
            raw_return_type: String::new(),
            return_type,
            raw_args: String::new(),
            args: ParsedArgs::default(),
            docstring: String::new(),
            description: description.to_string(),
            definitions,
            unknown_params: Vec::new(),
        }
    }

    fn constant(name: &str, value: &str, description: &str) -> EnumConstant {
        EnumConstant {
            name: name.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn method_with_return_row() {
        let config = Config::default();
        let ty = TypeRef::Raw("uint8_t".to_string());
        let rendered = MarkdownRenderer::new(&config).render_method(&method(
            ty.clone(),
            "Starts playback.",
            vec![Definition {
                kind: DefinitionKind::Return,
                name: String::new(),
                ty,
                description: "status code".to_string(),
            }],
        ));

        assert_eq!(
            rendered,
            "#### `uint8_t` DY::DYPlayer::play(..)\n\
             \n\
             Starts playback.\n\
             \n\
             |           | __Type__ | __Name__ | __Description__  |\n\
             |:----------|:---------|:---------|:-----------------|\n\
             | __return__ | `uint8_t` |  | status code |\n"
        );
    }

    #[test]
    fn method_without_fields_has_no_table() {
        let config = Config::default();
        let rendered = MarkdownRenderer::new(&config).render_method(&method(
            TypeRef::Raw("void".to_string()),
            "Stop.",
            Vec::new(),
        ));
        assert_eq!(rendered, "#### `void` DY::DYPlayer::play(..)\n\nStop.\n");
    }

    #[test]
    fn param_rows_show_code_name() {
        let config = Config {
            heading_level: 2,
            ..Config::default()
        };
        let rendered = MarkdownRenderer::new(&config).render_method(&method(
            TypeRef::Raw("void".to_string()),
            "",
            vec![Definition {
                kind: DefinitionKind::Param,
                name: "len".to_string(),
                ty: TypeRef::Raw("uint8_t".to_string()),
                description: "len of buffer.".to_string(),
            }],
        ));
        assert!(rendered.starts_with("## `void` DY::DYPlayer::play(..)\n\n|"));
        assert!(rendered.contains("| __param__ | `uint8_t` | `len` | len of buffer. |"));
    }

    #[test]
    fn enum_table_without_descriptions() {
        let config = Config::default();
        let doc = EnumDoc {
            alias: "DEVICE_T".to_string(),
            tag: None,
            extends: None,
            docstring: "Status.".to_string(),
            constants: vec![constant("OK", "0x00", ""), constant("FAIL", "1", "")],
            anchor: String::new(),
        };

        assert_eq!(
            MarkdownRenderer::new(&config).render_enum(&doc),
            "#### typedef enum DY::DEVICE_T\n\
             \n\
             Status.\n\
             \n\
             | const | value |\n\
             |:------|:------|\n\
             | `DY::DEVICE_T::OK` | `0x00` |\n\
             | `DY::DEVICE_T::FAIL` | `1` |\n"
        );
    }

    #[test]
    fn enum_table_with_descriptions_and_base() {
        let config = Config::default();
        let doc = EnumDoc {
            alias: "device_t".to_string(),
            tag: Some("Device".to_string()),
            extends: Some("uint8_t".to_string()),
            docstring: String::new(),
            constants: vec![constant("USB", "0x00", "USB | stick."), constant("SD", "0x01", "")],
            anchor: String::new(),
        };
        let rendered = MarkdownRenderer::new(&config).render_enum(&doc);

        assert!(rendered.starts_with("#### typedef enum class DY::device_t\n\n| const | value | description |\n"));
        assert!(rendered.contains("| `DY::Device::USB` | `0x00` | USB \\| stick. |\n"));
        assert!(rendered.contains("| `DY::Device::SD` | `0x01` |  |\n"));
        assert!(rendered.ends_with("\nThis enum class is based off uint8_t.\n"));
    }

    #[test]
    fn plain_enum_base_type_note() {
        let config = Config::default();
        let doc = EnumDoc {
            alias: "mode_t".to_string(),
            tag: None,
            extends: Some("uint8_t".to_string()),
            docstring: String::new(),
            constants: vec![constant("LOOP", "0x00", "")],
            anchor: String::new(),
        };

        assert_eq!(
            MarkdownRenderer::new(&config).render_enum(&doc),
            "#### typedef enum DY::mode_t
             
             | const | value |
             |:------|:------|
             | `DY::mode_t::LOOP` | `0x00` |
             
             This enum is based off uint8_t.
"
        );
    }
}
