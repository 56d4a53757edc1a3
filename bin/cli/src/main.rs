use clap::Parser;
use netlify_cli::cmd::{deploy, sites};
use netlify_cli::{CliResult, settings};
use netlify_client::Client;
use tracing::error;

use crate::cmds::{Command, Opt};

mod cmds;

fn main() {
    let opt = Opt::parse();

    tracing_subscriber::fmt::fmt()
        .with_max_level(opt.loglevel.into_level())
        .init();

    match run(opt) {
        Ok(output) => {
            if let Some(output) = output {
                println!("{output}");
            }
            std::process::exit(0);
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(opt: Opt) -> CliResult<Option<String>> {
    let settings = settings::load(opt.config.as_deref())?;
    let auth_token = settings::resolve_auth_token(opt.auth_token, &settings)?;
    let client = Client::new(auth_token)?;

    match opt.cmd {
        Command::CreateSite(cmd) => sites::create::invoke(&client, cmd.name, cmd.domain),
        Command::GetSite(cmd) => sites::get::invoke(&client, &cmd.site_id),
        Command::GetSiteFiles(cmd) => sites::files::invoke(&client, &cmd.site_id),
        Command::ListSites(_) => sites::list::invoke(&client),
        Command::DeleteSite(cmd) => sites::delete::invoke(&client, &cmd.site_id),
        Command::DeleteAllSites(_) => sites::delete_all::invoke(&client),
        Command::DeployFolder(cmd) => {
            deploy::invoke(&client, &cmd.folder, cmd.site_id, cmd.force_all)
        }
    }
}
