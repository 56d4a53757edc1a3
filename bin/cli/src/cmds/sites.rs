use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Create a new site")]
pub struct CreateSiteCommand {
    #[arg(long, help = "Site name")]
    pub name: Option<String>,

    #[arg(long, help = "Site custom domain")]
    pub domain: Option<String>,
}

#[derive(Parser, Debug)]
#[command(about = "Show a single site")]
pub struct GetSiteCommand {
    #[arg(help = "Site id or custom domain")]
    pub site_id: String,
}

#[derive(Parser, Debug)]
#[command(about = "List the files deployed to a site")]
pub struct GetSiteFilesCommand {
    #[arg(help = "Site id")]
    pub site_id: String,
}

#[derive(Parser, Debug)]
#[command(about = "List all sites")]
pub struct ListSitesCommand;

#[derive(Parser, Debug)]
#[command(about = "Delete a site")]
pub struct DeleteSiteCommand {
    #[arg(help = "Site id")]
    pub site_id: String,
}

#[derive(Parser, Debug)]
#[command(about = "Delete every site owned by the authenticated account")]
pub struct DeleteAllSitesCommand;
