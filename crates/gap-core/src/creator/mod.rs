//! Text creators for each generated file kind
//!
//! This module provides:
//! - The `TextCreator` contract shared by every file kind
//! - The special member model (`SpecialMember`, `MethodConfig`)
//! - Options shared by the C++ creators (`SourceOptions`)
//! - One creator per file kind: header, implementation, Qt UI descriptor

pub mod header;
pub mod source;
pub mod ui;

use crate::author::AuthorInfo;

pub use header::HeaderCreator;
pub use source::SourceCreator;
pub use ui::UiCreator;

/// One level of indentation in generated C++
pub(crate) const INDENT: &str = "    ";

/// Separator between top-level blocks and between member bodies
pub(crate) const BLOCK_SEPARATOR: &str = "\n\n";

/// Renders the full text of one generated file
pub trait TextCreator {
    fn create(&self) -> String;
}

/// The six special member functions, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMember {
    DefaultConstructor,
    CopyConstructor,
    MoveConstructor,
    CopyAssignmentOperator,
    MoveAssignmentOperator,
    Destructor,
}

impl SpecialMember {
    /// Every member in the order it is emitted
    pub const ALL: [SpecialMember; 6] = [
        SpecialMember::DefaultConstructor,
        SpecialMember::CopyConstructor,
        SpecialMember::MoveConstructor,
        SpecialMember::CopyAssignmentOperator,
        SpecialMember::MoveAssignmentOperator,
        SpecialMember::Destructor,
    ];
}

/// Which special members to declare and define
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodConfig {
    pub default_constructor: bool,
    pub copy_constructor: bool,
    pub move_constructor: bool,
    pub copy_assignment_operator: bool,
    pub move_assignment_operator: bool,
    pub destructor: bool,
}

impl MethodConfig {
    /// No special members
    pub fn none() -> Self {
        Self::default()
    }

    /// All six special members
    pub fn all() -> Self {
        Self {
            default_constructor: true,
            copy_constructor: true,
            move_constructor: true,
            copy_assignment_operator: true,
            move_assignment_operator: true,
            destructor: true,
        }
    }

    pub fn is_enabled(&self, member: SpecialMember) -> bool {
        match member {
            SpecialMember::DefaultConstructor => self.default_constructor,
            SpecialMember::CopyConstructor => self.copy_constructor,
            SpecialMember::MoveConstructor => self.move_constructor,
            SpecialMember::CopyAssignmentOperator => self.copy_assignment_operator,
            SpecialMember::MoveAssignmentOperator => self.move_assignment_operator,
            SpecialMember::Destructor => self.destructor,
        }
    }

    pub fn set(&mut self, member: SpecialMember, enabled: bool) {
        let slot = match member {
            SpecialMember::DefaultConstructor => &mut self.default_constructor,
            SpecialMember::CopyConstructor => &mut self.copy_constructor,
            SpecialMember::MoveConstructor => &mut self.move_constructor,
            SpecialMember::CopyAssignmentOperator => &mut self.copy_assignment_operator,
            SpecialMember::MoveAssignmentOperator => &mut self.move_assignment_operator,
            SpecialMember::Destructor => &mut self.destructor,
        };
        *slot = enabled;
    }

    pub fn with(mut self, member: SpecialMember) -> Self {
        self.set(member, true);
        self
    }

    /// Enabled members in emission order, independent of how they were set
    pub fn enabled(&self) -> impl Iterator<Item = SpecialMember> + '_ {
        SpecialMember::ALL
            .into_iter()
            .filter(move |m| self.is_enabled(*m))
    }
}

/// Settings shared by the header and implementation creators
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Class name, used verbatim
    pub class_name: String,

    /// Enclosing namespace; empty means no namespace
    pub namespace: String,

    /// Headers to `#include`, in order
    pub includes: Vec<String>,

    pub author: AuthorInfo,

    pub methods: MethodConfig,
}

impl SourceOptions {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_author(mut self, author: AuthorInfo) -> Self {
        self.author = author;
        self
    }

    pub fn with_methods(mut self, methods: MethodConfig) -> Self {
        self.methods = methods;
        self
    }

    /// Two-line owner banner at the top of every C++ file
    pub(crate) fn banner(&self) -> String {
        format!(
            "// Owner: {}\n// Co-Owner: {}",
            self.author.owner, self.author.co_owner
        )
    }

    /// `#include` lines; empty when there is nothing to include
    pub(crate) fn include_lines(&self) -> String {
        self.includes
            .iter()
            .map(|header| format!("#include \"{}\"", header))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
