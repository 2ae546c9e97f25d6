//! gap-create - Generate header, source and Qt UI files for a class

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use colored::Colorize;
use gap_core::{
    generate, AuthorInfo, AuthorRegistry, FileSelection, GenerateRequest, MethodConfig,
    DEFAULT_NAMESPACE,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gap-create")]
#[command(about = "Create GAP class files (*.h, *.cpp, *.ui)")]
#[command(version)]
#[command(after_help = "Examples:
  gap-create --cls ModelReviewImpl
  gap-create --cls ModelReviewSettingDialog --all
  gap-create --cls ElementParameterReviewer --dc --dest
  gap-create --cls ElementParameterReviewer --cpp false")]
pub struct Args {
    /// [Required] Name of the class to create
    #[arg(long = "cls", value_name = "CLASS")]
    pub cls: Option<String>,

    /// Create the header file (*.h)
    #[arg(long = "h", value_name = "BOOL", num_args = 0..=1, default_value_t = true,
          default_missing_value = "true", action = ArgAction::Set)]
    pub header: bool,

    /// Create the source file (*.cpp)
    #[arg(long = "cpp", value_name = "BOOL", num_args = 0..=1, default_value_t = true,
          default_missing_value = "true", action = ArgAction::Set)]
    pub source: bool,

    /// Create the Qt user interface file (*.ui)
    #[arg(long = "ui", value_name = "BOOL", num_args = 0..=1, default_value_t = false,
          default_missing_value = "true", action = ArgAction::Set)]
    pub ui: bool,

    /// Create all three files (*.h, *.cpp, *.ui)
    #[arg(long = "all")]
    pub all: bool,

    /// Declare and define the default constructor (DC)
    #[arg(long = "dc", value_name = "BOOL", num_args = 0..=1, default_value_t = false,
          default_missing_value = "true", action = ArgAction::Set)]
    pub default_constructor: bool,

    /// Declare and define the copy constructor (CC)
    #[arg(long = "cc", value_name = "BOOL", num_args = 0..=1, default_value_t = false,
          default_missing_value = "true", action = ArgAction::Set)]
    pub copy_constructor: bool,

    /// Declare and define the move constructor (MC)
    #[arg(long = "mc", value_name = "BOOL", num_args = 0..=1, default_value_t = false,
          default_missing_value = "true", action = ArgAction::Set)]
    pub move_constructor: bool,

    /// Declare and define the copy assignment operator (CAO)
    #[arg(long = "cao", value_name = "BOOL", num_args = 0..=1, default_value_t = false,
          default_missing_value = "true", action = ArgAction::Set)]
    pub copy_assignment_operator: bool,

    /// Declare and define the move assignment operator (MAO)
    #[arg(long = "mao", value_name = "BOOL", num_args = 0..=1, default_value_t = false,
          default_missing_value = "true", action = ArgAction::Set)]
    pub move_assignment_operator: bool,

    /// Declare and define the destructor (DEST)
    #[arg(long = "dest", value_name = "BOOL", num_args = 0..=1, default_value_t = false,
          default_missing_value = "true", action = ArgAction::Set)]
    pub destructor: bool,

    /// Namespace to define the class in (empty for none)
    #[arg(long = "ns", value_name = "NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Directory to write the files to (defaults to the current directory)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Args {
    fn selection(&self) -> FileSelection {
        FileSelection {
            header: self.header || self.all,
            source: self.source || self.all,
            ui: self.ui || self.all,
        }
    }

    fn methods(&self) -> MethodConfig {
        MethodConfig {
            default_constructor: self.default_constructor,
            copy_constructor: self.copy_constructor,
            move_constructor: self.move_constructor,
            copy_assignment_operator: self.copy_assignment_operator,
            move_assignment_operator: self.move_assignment_operator,
            destructor: self.destructor,
        }
    }
}

fn main() -> Result<()> {
    gap_core::logging::init();

    let args = Args::parse();

    // Without a class name there is nothing to do: show usage and exit cleanly
    let Some(class_name) = args.cls.clone().filter(|c| !c.is_empty()) else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    create_files(&args, class_name)
}

fn create_files(args: &Args, class_name: String) -> Result<()> {
    let kinds = args.selection();
    let request = GenerateRequest::new(class_name)
        .with_namespace(args.namespace.clone())
        .with_kinds(kinds)
        .with_methods(args.methods());

    // Only the C++ files carry the author banner
    let author = if kinds.header || kinds.source {
        AuthorRegistry::from_env()?.load()?
    } else {
        AuthorInfo::default()
    };

    // Confirmations report full paths, so anchor relative directories to the cwd
    let cwd = std::env::current_dir()?;
    let output_dir = match &args.output_dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    gap_core::fs::create_dir_all(&output_dir)?;

    tracing::debug!(
        class = %request.class_name,
        namespace = %request.namespace,
        dir = %output_dir.display(),
        "generating files"
    );

    for file in generate::plan(&request, &author) {
        let path = file.write_to(&output_dir)?;
        println!("{} {}", "File has been created:".green(), path.display());
    }

    Ok(())
}
