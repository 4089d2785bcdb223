//! Render the instructions of an Anchor program as an SVG diagram.
//!
//! The diagram is built from the IDL that `anchor build` writes to
//! `target/idl/<program>.json`: one column per instruction, listing its
//! signers, mutable and immutable accounts, and arguments.

pub mod config;
pub mod error;
pub mod idl;
pub mod layout;
pub mod render;
pub mod workspace;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use crate::{config::Config, error::Error, layout::Figure, workspace::Workspace};

/// Resolve, lay out and write the figure for `config`, relative to `cwd`.
/// Returns the path of the written SVG.
pub fn visualize(config: &Config, cwd: &Path) -> Result<PathBuf, Error> {
    config.validate()?;

    // Pipeline:
    // 1. find the IDL (explicit path, or looked up in the anchor workspace)
    // 2. parse it and summarize each instruction
    // 3. lay out the figure
    // 4. render and write it

    let idl_path = match &config.idl_path {
        Some(path) => cwd.join(path),
        None => {
            let workspace = Workspace::discover(cwd)?;
            workspace.resolve(config.program_name.as_deref(), cwd)?
        }
    };
    debug!(idl = %idl_path.display(), "loading IDL");

    let figure = figure_from_idl_file(&idl_path, config.width)?;
    debug!(width = figure.width, height = figure.height, "laid out figure");

    let out_dir = match &config.out_dir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };
    let path = render::write(&figure, &out_dir)?;
    info!(program = %figure.name, path = %path.display(), "wrote figure");

    Ok(path)
}

/// Load an IDL file and lay out its figure
pub fn figure_from_idl_file(path: &Path, width: usize) -> Result<Figure, Error> {
    let idl = idl::load(path)?;
    let instructions = idl::summarize(&idl);
    debug!(
        program = %idl.metadata.name,
        instructions = instructions.len(),
        "parsed IDL"
    );
    layout::build(&idl.metadata.name, &idl.metadata.version, &instructions, width)
}
