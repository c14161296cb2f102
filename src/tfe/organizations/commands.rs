//! Organization command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource};
use crate::error::Result;
use crate::output::output_organizations;
use crate::tfe::filter::name_matches;
use crate::tfe::TfeClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the org list command
pub async fn run_org_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    let Command::Get {
        resource: GetResource::Org(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Fetching organizations");

    let spinner = create_spinner("Fetching organizations...", cli.quiet);

    let mut organizations = client.get_organizations().await?;

    finish_spinner(spinner);

    if let Some(filter) = &args.filter {
        organizations.retain(|org| name_matches(org.name(), filter));
        debug!(
            "Filtered to {} organizations matching '{}'",
            organizations.len(),
            filter
        );
    }

    output_organizations(&organizations, &args.output)?;
    Ok(())
}
