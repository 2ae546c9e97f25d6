//! Header file (`.h`) creator

use super::{SourceOptions, SpecialMember, TextCreator, BLOCK_SEPARATOR, INDENT};

/// Renders a class declaration with the selected special members
#[derive(Debug, Clone)]
pub struct HeaderCreator {
    options: SourceOptions,
}

impl HeaderCreator {
    pub fn new(options: SourceOptions) -> Self {
        Self { options }
    }

    fn declaration(&self, member: SpecialMember) -> String {
        let c = &self.options.class_name;
        match member {
            SpecialMember::DefaultConstructor => format!("{c}();"),
            SpecialMember::CopyConstructor => format!("{c}(const {c}& other);"),
            SpecialMember::MoveConstructor => format!("{c}({c}&& other);"),
            SpecialMember::CopyAssignmentOperator => {
                format!("{c}& operator=(const {c}& other);")
            }
            SpecialMember::MoveAssignmentOperator => format!("{c}& operator=({c}&& other);"),
            SpecialMember::Destructor => format!("~{c}();"),
        }
    }

    /// The `class` block, indented by `base`
    fn class_block(&self, base: &str) -> String {
        let member_indent = format!("{base}{INDENT}");
        let declarations: Vec<String> = self
            .options
            .methods
            .enabled()
            .map(|m| format!("{}{}", member_indent, self.declaration(m)))
            .collect();

        let mut lines = vec![
            format!("{base}class {}", self.options.class_name),
            format!("{base}{{"),
            format!("{base}public:"),
        ];
        if !declarations.is_empty() {
            lines.push(declarations.join(BLOCK_SEPARATOR));
        }
        lines.push(format!("{base}}};"));
        lines.join("\n")
    }
}

impl TextCreator for HeaderCreator {
    fn create(&self) -> String {
        // The include block keeps its separators even when empty
        let mut blocks = vec![
            self.options.banner(),
            "#pragma once".to_string(),
            self.options.include_lines(),
        ];

        let namespace = &self.options.namespace;
        if namespace.is_empty() {
            blocks.push(self.class_block(""));
        } else {
            blocks.push(format!(
                "namespace {}\n{{\n{}\n}}",
                namespace,
                self.class_block(INDENT)
            ));
        }

        let mut text = blocks.join(BLOCK_SEPARATOR);
        text.push('\n');
        text
    }
}
