//! Planning and writing the files for one class
//!
//! `plan` is pure: it decides which files to produce, their names, and their text.
//! Each `PlannedFile` is then written independently; a failed write leaves earlier
//! files in place.

use crate::author::AuthorInfo;
use crate::creator::{
    HeaderCreator, MethodConfig, SourceCreator, SourceOptions, TextCreator, UiCreator,
};
use crate::{fs, naming, DEFAULT_NAMESPACE};
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Include that must come last in every generated `.cpp`
pub const LAST_CPP_INCLUDE: &str = "EnableCompileWarning_The_LAST_IncludeInCpp.h";

/// Using-directives emitted at the top of every generated `.cpp`
pub const SOURCE_USING_NAMESPACES: &[&str] = &["gcmp", "gap"];

/// Kinds of file that can be generated for a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Header,
    Source,
    Ui,
}

impl FileKind {
    pub fn filename(&self, class_name: &str) -> String {
        match self {
            FileKind::Header => naming::header_filename(class_name),
            FileKind::Source => naming::source_filename(class_name),
            FileKind::Ui => naming::ui_filename(class_name),
        }
    }

    /// C++ sources carry a BOM for the downstream compiler; `.ui` files do not
    pub fn writes_bom(&self) -> bool {
        matches!(self, FileKind::Header | FileKind::Source)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FileKind::Header => "header",
            FileKind::Source => "source",
            FileKind::Ui => "ui",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which file kinds to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSelection {
    pub header: bool,
    pub source: bool,
    pub ui: bool,
}

impl FileSelection {
    pub fn all() -> Self {
        Self {
            header: true,
            source: true,
            ui: true,
        }
    }

    /// Selected kinds in write order
    pub fn kinds(&self) -> Vec<FileKind> {
        let mut kinds = Vec::new();
        if self.header {
            kinds.push(FileKind::Header);
        }
        if self.source {
            kinds.push(FileKind::Source);
        }
        if self.ui {
            kinds.push(FileKind::Ui);
        }
        kinds
    }
}

impl Default for FileSelection {
    /// Header and source, no UI
    fn default() -> Self {
        Self {
            header: true,
            source: true,
            ui: false,
        }
    }
}

/// Everything needed to generate the files for one class
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub class_name: String,
    pub namespace: String,
    pub kinds: FileSelection,
    pub methods: MethodConfig,
}

impl GenerateRequest {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            kinds: FileSelection::default(),
            methods: MethodConfig::none(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_kinds(mut self, kinds: FileSelection) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_methods(mut self, methods: MethodConfig) -> Self {
        self.methods = methods;
        self
    }

    fn source_options(&self, author: &AuthorInfo) -> SourceOptions {
        SourceOptions::new(self.class_name.clone())
            .with_namespace(self.namespace.clone())
            .with_author(author.clone())
            .with_methods(self.methods)
    }

    fn header_includes(&self) -> Vec<String> {
        if self.kinds.ui {
            vec![naming::ui_header_filename(&self.class_name)]
        } else {
            Vec::new()
        }
    }

    fn source_includes(&self) -> Vec<String> {
        let mut includes = vec![naming::header_filename(&self.class_name)];
        if self.kinds.ui {
            includes.push(naming::ui_header_filename(&self.class_name));
        }
        includes.push(LAST_CPP_INCLUDE.to_string());
        includes
    }

    fn render(&self, kind: FileKind, author: &AuthorInfo) -> String {
        match kind {
            FileKind::Header => HeaderCreator::new(
                self.source_options(author)
                    .with_includes(self.header_includes()),
            )
            .create(),
            FileKind::Source => SourceCreator::new(
                self.source_options(author)
                    .with_includes(self.source_includes()),
            )
            .with_using_namespaces(
                SOURCE_USING_NAMESPACES
                    .iter()
                    .map(|ns| ns.to_string())
                    .collect(),
            )
            .create(),
            FileKind::Ui => UiCreator::new(self.class_name.clone()).create(),
        }
    }
}

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub kind: FileKind,
    pub filename: String,
    pub content: String,
}

impl PlannedFile {
    /// Write into `dir`, overwriting any existing file, and return the full path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        if self.kind.writes_bom() {
            fs::write_text_with_bom(&path, &self.content)?;
        } else {
            fs::write_text(&path, &self.content)?;
        }
        tracing::debug!(kind = %self.kind, path = %path.display(), "wrote file");
        Ok(path)
    }
}

/// Render every selected file kind for the request
pub fn plan(request: &GenerateRequest, author: &AuthorInfo) -> Vec<PlannedFile> {
    request
        .kinds
        .kinds()
        .into_iter()
        .map(|kind| PlannedFile {
            kind,
            filename: kind.filename(&request.class_name),
            content: request.render(kind, author),
        })
        .collect()
}
