use super::{Commands, ConvertCommands, CsfCommands};
use super::{convert, csf};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Csf { command } => command.execute(),
            Commands::Convert { command } => command.execute(),
        }
    }
}

impl CsfCommands {
    /// Execute the selected CSF command.
    ///
    /// # Errors
    /// Returns an error if the underlying CSF operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            CsfCommands::List { path, limit } => csf::list(path, *limit),
            CsfCommands::Get { path, key } => csf::get(path, key),
            CsfCommands::Search {
                path,
                query,
                key,
                limit,
            } => csf::search(path, query, *key, *limit),
            CsfCommands::Set {
                path,
                key,
                text,
                create,
            } => csf::set(path, key, text, *create),
            CsfCommands::Stats { paths } => csf::stats(paths),
        }
    }
}

impl ConvertCommands {
    /// Execute the selected conversion.
    ///
    /// # Errors
    /// Returns an error if the conversion fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            ConvertCommands::ToIni {
                source,
                output,
                section,
                quiet,
            } => convert::to_ini(source, output.as_deref(), section, *quiet),
            ConvertCommands::ToJson { source, output } => {
                convert::to_json(source, output.as_deref())
            }
            ConvertCommands::FromJson { source, output } => {
                convert::from_json(source, output.as_deref())
            }
            ConvertCommands::Batch {
                dir,
                section,
                quiet,
            } => convert::batch(dir, section, *quiet),
        }
    }
}
