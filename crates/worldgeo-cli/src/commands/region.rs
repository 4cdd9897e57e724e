//! Region commands

use clap::{Args, Subcommand};
use worldgeo_core::{Region, RegionSearch};
use worldgeo_engine::Intent;

#[derive(Debug, Args)]
pub struct RegionArgs {
    #[command(subcommand)]
    pub command: RegionCommand,
}

#[derive(Debug, Subcommand)]
pub enum RegionCommand {
    /// Find regions by exact region code, local code and/or name
    Search(SearchArgs),
    /// Show one region
    Load { id: i64 },
    /// Add a region; its id is assigned
    Add(FieldArgs),
    /// Overwrite a region
    Edit {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub region_code: Option<String>,
    #[arg(long)]
    pub local_code: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    #[arg(long, default_value = "")]
    pub region_code: String,
    #[arg(long, default_value = "")]
    pub local_code: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long)]
    pub continent_id: i64,
    #[arg(long)]
    pub country_id: i64,
    #[arg(long)]
    pub wikipedia_link: Option<String>,
    #[arg(long)]
    pub keywords: Option<String>,
}

impl FieldArgs {
    fn into_record(self, id: i64) -> Region {
        Region {
            id,
            region_code: self.region_code,
            local_code: self.local_code,
            name: self.name,
            continent_id: self.continent_id,
            country_id: self.country_id,
            wikipedia_link: self.wikipedia_link,
            keywords: self.keywords,
        }
    }
}

pub fn intent(args: RegionArgs) -> Intent {
    match args.command {
        RegionCommand::Search(s) => Intent::SearchRegion(RegionSearch {
            region_code: s.region_code,
            local_code: s.local_code,
            name: s.name,
        }),
        RegionCommand::Load { id } => Intent::LoadRegion { id },
        RegionCommand::Add(fields) => Intent::SaveNewRegion(fields.into_record(0)),
        RegionCommand::Edit { id, fields } => Intent::SaveRegion(fields.into_record(id)),
    }
}
