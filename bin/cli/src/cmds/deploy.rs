use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Create a new deploy from the contents of a folder")]
pub struct DeployFolderCommand {
    #[arg(long, help = "Id of the site to deploy to")]
    pub site_id: String,

    #[arg(
        long,
        help = "Upload every file found under the folder regardless of whether it is already deployed"
    )]
    pub force_all: bool,

    #[arg(help = "The folder to deploy")]
    pub folder: PathBuf,
}
