//! Command dispatch: file framing around the core tree operations.
//!
//! The core never touches the filesystem; every command here reads the org
//! file into a string, drives the tree through its public operations, and
//! writes the re-encoded text back.

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::instrument;

use crate::bag::RandomBag;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::errors::TreeError;
use crate::tree::OrgTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { file }) => show(file),
        Some(Commands::Hire {
            file,
            supervisor,
            title,
            name,
        }) => hire(file, supervisor, title, name),
        Some(Commands::Fire { file, title }) => fire(file, title),
        Some(Commands::Find { file, title }) => find(file, title),
        Some(Commands::Raffle { file }) => raffle(file),
        Some(Commands::Completion { shell }) => {
            completion(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

fn load(path: &Path) -> CliResult<OrgTree> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut tree = OrgTree::new();
    tree.deserialize(&text)?;
    Ok(tree)
}

fn save(path: &Path, tree: &OrgTree) -> CliResult<()> {
    fs::write(path, tree.serialize()).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument]
fn show(file: &Path) -> CliResult<()> {
    let tree = load(file)?;
    output::info(&tree.render());
    Ok(())
}

#[instrument]
fn hire(file: &Path, supervisor: &str, title: &str, name: &str) -> CliResult<()> {
    let mut tree = load(file)?;
    let boss = tree
        .find(supervisor)
        .ok_or_else(|| TreeError::UnknownTitle(supervisor.to_string()))?;
    tree.hire(boss, title, name)?;
    save(file, &tree)?;
    output::success(&format!("hired {title}, {name} under {supervisor}"));
    Ok(())
}

#[instrument]
fn fire(file: &Path, title: &str) -> CliResult<()> {
    let mut tree = load(file)?;
    tree.fire(title)?;
    save(file, &tree)?;
    output::success(&format!("fired {title}; their reports moved up"));
    Ok(())
}

#[instrument]
fn find(file: &Path, title: &str) -> CliResult<()> {
    let tree = load(file)?;
    match tree.find(title) {
        Some(id) => {
            output::info(tree.employee(id)?);
            Ok(())
        }
        None => Err(TreeError::UnknownTitle(title.to_string()).into()),
    }
}

#[instrument]
fn raffle(file: &Path) -> CliResult<()> {
    let tree = load(file)?;
    let mut bag: RandomBag<String> = tree
        .iter()
        .map(|(_, node)| node.employee.name.clone())
        .collect();
    let winner = bag.draw()?;
    output::info(&winner);
    Ok(())
}

fn completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
