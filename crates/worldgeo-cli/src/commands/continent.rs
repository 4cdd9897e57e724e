//! Continent commands

use clap::{Args, Subcommand};
use worldgeo_core::{Continent, ContinentSearch};
use worldgeo_engine::Intent;

#[derive(Debug, Args)]
pub struct ContinentArgs {
    #[command(subcommand)]
    pub command: ContinentCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContinentCommand {
    /// Find continents by exact code and/or name
    Search(SearchArgs),
    /// Show one continent
    Load { id: i64 },
    /// Add a continent; its id is assigned
    Add(FieldArgs),
    /// Overwrite a continent
    Edit {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    #[arg(long, default_value = "")]
    pub code: String,
    #[arg(long, default_value = "")]
    pub name: String,
}

impl FieldArgs {
    fn into_record(self, id: i64) -> Continent {
        Continent::new(id, self.code, self.name)
    }
}

pub fn intent(args: ContinentArgs) -> Intent {
    match args.command {
        ContinentCommand::Search(s) => Intent::SearchContinent(ContinentSearch {
            code: s.code,
            name: s.name,
        }),
        ContinentCommand::Load { id } => Intent::LoadContinent { id },
        ContinentCommand::Add(fields) => Intent::SaveNewContinent(fields.into_record(0)),
        ContinentCommand::Edit { id, fields } => Intent::SaveContinent(fields.into_record(id)),
    }
}
