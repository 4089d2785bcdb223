use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;

/// Tiles per row in each instruction column when none is given
pub const DEFAULT_WIDTH: usize = 2;

/// Command line arguments of the `anchor-viz` binary
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the program to visualize (defaults to the current directory name)
    #[arg(short, long, env = "ANCHOR_VIZ_PROGRAM")]
    pub program_name: Option<String>,

    /// Number of accounts, arguments per instruction column
    #[arg(short, long, env = "ANCHOR_VIZ_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Read this IDL file instead of looking one up in the workspace
    #[arg(short, long, env = "ANCHOR_VIZ_IDL")]
    pub idl: Option<String>,

    /// Directory the figure is written to
    #[arg(short, long, env = "ANCHOR_VIZ_OUT_DIR")]
    pub out_dir: Option<String>,
}

/// Resolved settings for one visualization run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub program_name: Option<String>,
    pub width: usize,
    pub idl_path: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, Error> {
        let config = Self {
            program_name: args.program_name,
            width: args.width,
            idl_path: args.idl.as_deref().map(expand_path),
            out_dir: args.out_dir.as_deref().map(expand_path),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 {
            return Err(Error::Config("width must be at least 1".to_string()));
        }
        if matches!(&self.program_name, Some(name) if name.trim().is_empty()) {
            return Err(Error::Config("program name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program_name: None,
            width: DEFAULT_WIDTH,
            idl_path: None,
            out_dir: None,
        }
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
