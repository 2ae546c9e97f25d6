//! GAP Core - Shared library for the GAP source scaffolding CLIs
//!
//! This library renders boilerplate C++/Qt files (header, implementation, Qt Designer
//! UI descriptor) for a class and manages the author identity stamped into them.
//! It is used by two binaries: `gap-create` (file generation) and `gap-config`
//! (author settings).
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Filesystem helpers, config directory resolution,
//!   filename derivation
//! - **Layer 2: Rendering** - `TextCreator` implementations for each file kind
//! - **Layer 3: Orchestration** - `AuthorRegistry` and the `generate` planner used by the CLIs
//!
//! # Example Usage
//!
//! ```ignore
//! use gap_core::{generate, AuthorRegistry, FileSelection, GenerateRequest};
//!
//! let author = AuthorRegistry::from_env()?.load()?;
//! let request = GenerateRequest::new("Foo").with_kinds(FileSelection::all());
//! for file in generate::plan(&request, &author) {
//!     let path = file.write_to(&std::env::current_dir()?)?;
//!     println!("File has been created: {}", path.display());
//! }
//! ```

pub mod author;
pub mod creator;
pub mod fs;
pub mod generate;
pub mod logging;
pub mod naming;
pub mod paths;

// Re-export main types for convenience
pub use author::{AuthorError, AuthorInfo, AuthorRegistry};
pub use creator::{
    HeaderCreator, MethodConfig, SourceCreator, SourceOptions, SpecialMember, TextCreator,
    UiCreator,
};
pub use generate::{FileKind, FileSelection, GenerateRequest, PlannedFile};

/// Namespace generated classes live in unless the caller overrides it
pub const DEFAULT_NAMESPACE: &str = "gap";
