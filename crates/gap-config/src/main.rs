//! gap-config - Manage the author information stamped into generated files

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use gap_core::{AuthorInfo, AuthorRegistry};

#[derive(Parser, Debug)]
#[command(name = "gap-config")]
#[command(about = "Set the author information used by gap-create")]
#[command(version)]
#[command(after_help = "Examples:
  gap-config --owner tom
  gap-config --owner tom --co-owner jerry
  gap-config --list")]
pub struct Args {
    /// Set the owner
    #[arg(long = "owner", value_name = "NAME")]
    pub owner: Option<String>,

    /// Set the co-owner
    #[arg(long = "co-owner", value_name = "NAME")]
    pub co_owner: Option<String>,

    /// Print the author information
    #[arg(long = "list")]
    pub list: bool,

    /// Clear both owner and co-owner (applied before --owner/--co-owner)
    #[arg(long = "reset")]
    pub reset: bool,
}

impl Args {
    /// Apply requested edits; returns true when anything changed
    fn apply(&self, info: &mut AuthorInfo) -> bool {
        let mut changed = false;
        if self.reset {
            *info = AuthorInfo::default();
            changed = true;
        }
        if let Some(owner) = self.owner.as_deref().filter(|s| !s.is_empty()) {
            info.owner = owner.to_string();
            changed = true;
        }
        if let Some(co_owner) = self.co_owner.as_deref().filter(|s| !s.is_empty()) {
            info.co_owner = co_owner.to_string();
            changed = true;
        }
        changed
    }
}

fn main() -> Result<()> {
    gap_core::logging::init();

    let args = Args::parse();
    let registry = AuthorRegistry::from_env()?;

    let path = registry.config_path();
    tracing::debug!(path = %path.display(), "loading author info");
    let mut info = registry.load()?;

    let changed = args.apply(&mut info);
    tracing::debug!(changed, reset = args.reset, "applied author edits");
    if changed {
        tracing::debug!(path = %path.display(), "saving author info");
        registry.save(Some(&info))?;
        println!("{}", "Author information has been changed!".green());
    }

    if args.list {
        print_author_info(&registry)?;
    }

    Ok(())
}

fn print_author_info(registry: &AuthorRegistry) -> Result<()> {
    // Always report what is on disk, not what this run holds in memory
    let info = registry.load()?;
    tracing::debug!(owner = %info.owner, co_owner = %info.co_owner, "listing author info");
    println!("Author info: {}", registry.config_path().display());
    println!("  Owner: {}", info.owner);
    println!("  Co-Owner: {}", info.co_owner);
    println!();
    Ok(())
}
