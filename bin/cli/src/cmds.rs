use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cmds::deploy::DeployFolderCommand;
use crate::cmds::sites::{
    CreateSiteCommand, DeleteAllSitesCommand, DeleteSiteCommand, GetSiteCommand,
    GetSiteFilesCommand, ListSitesCommand,
};

pub mod deploy;
pub mod sites;

#[derive(Debug, Parser)]
#[command(name = "netlifyctl", about = "Interact with the Netlify API")]
pub struct Opt {
    #[arg(
        long,
        env = "NETLIFY_AUTH_TOKEN",
        help = "Netlify authentication token",
        global = true
    )]
    pub auth_token: Option<String>,

    #[arg(long, help = "Path to a settings file", global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "INFO", global = true)]
    pub loglevel: LogLevel,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn into_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "create_site")]
    CreateSite(CreateSiteCommand),

    #[command(name = "get_site")]
    GetSite(GetSiteCommand),

    #[command(name = "get_site_files")]
    GetSiteFiles(GetSiteFilesCommand),

    #[command(name = "list_sites")]
    ListSites(ListSitesCommand),

    #[command(name = "delete_site")]
    DeleteSite(DeleteSiteCommand),

    #[command(name = "delete_all_sites")]
    DeleteAllSites(DeleteAllSitesCommand),

    #[command(name = "deploy_folder")]
    DeployFolder(DeployFolderCommand),
}
