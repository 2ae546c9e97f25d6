//! Implementation file (`.cpp`) creator

use super::{SourceOptions, SpecialMember, TextCreator, BLOCK_SEPARATOR};

/// Renders empty-bodied definitions for the selected special members
#[derive(Debug, Clone)]
pub struct SourceCreator {
    options: SourceOptions,
    using_namespaces: Vec<String>,
}

impl SourceCreator {
    pub fn new(options: SourceOptions) -> Self {
        Self {
            options,
            using_namespaces: Vec::new(),
        }
    }

    pub fn with_using_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.using_namespaces = namespaces;
        self
    }

    /// `ns::` unless the namespace is empty or already pulled in by a using-directive
    fn qualifier(&self) -> String {
        let namespace = &self.options.namespace;
        if namespace.is_empty() || self.using_namespaces.iter().any(|n| n == namespace) {
            String::new()
        } else {
            format!("{}::", namespace)
        }
    }

    fn signature(&self, member: SpecialMember, q: &str) -> String {
        let c = &self.options.class_name;
        match member {
            SpecialMember::DefaultConstructor => format!("{q}{c}::{c}()"),
            SpecialMember::CopyConstructor => format!("{q}{c}::{c}(const {c}& other)"),
            SpecialMember::MoveConstructor => format!("{q}{c}::{c}({c}&& other)"),
            SpecialMember::CopyAssignmentOperator => {
                format!("{q}{c}& {q}{c}::operator=(const {c}& other)")
            }
            SpecialMember::MoveAssignmentOperator => {
                format!("{q}{c}& {q}{c}::operator=({c}&& other)")
            }
            SpecialMember::Destructor => format!("{q}{c}::~{c}()"),
        }
    }

    fn using_lines(&self) -> String {
        self.using_namespaces
            .iter()
            .map(|ns| format!("using namespace {};", ns))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextCreator for SourceCreator {
    fn create(&self) -> String {
        let q = self.qualifier();
        // Bodies stay empty, including the assignment operators
        let definitions: Vec<String> = self
            .options
            .methods
            .enabled()
            .map(|m| format!("{}\n{{\n}}", self.signature(m, &q)))
            .collect();

        // Empty include/using blocks keep their separators
        let blocks = [
            self.options.banner(),
            self.options.include_lines(),
            self.using_lines(),
            definitions.join(BLOCK_SEPARATOR),
        ];

        let mut text = blocks.join(BLOCK_SEPARATOR);
        text.push('\n');
        text
    }
}
