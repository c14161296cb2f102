//! Registry module command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource, ModArgs};
use crate::error::Result;
use crate::output::{output_module_rows, output_raw, print_module_detail, ModuleVersionRow};
use crate::tfe::filter::name_matches;
use crate::tfe::TfeClient;
use crate::ui::{create_spinner, finish_spinner};

use super::models::{RegistryModule, RegistryModuleVersion, VersionStatus};
use super::resolver::latest_version;

/// Everything the module command needs, gathered before rendering so the
/// spinner can be cleared first
enum ModuleView {
    List(Vec<ModuleVersionRow>),
    Detail {
        module: RegistryModule,
        versions: Vec<RegistryModuleVersion>,
    },
    Raw(serde_json::Value),
}

/// Run the registry module list/detail command
pub async fn run_mod_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    let Command::Get {
        resource: GetResource::Mod(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let org = cli.require_org()?;

    let spinner = create_spinner(
        &format!("Fetching registry modules from '{}'...", org),
        cli.quiet,
    );

    let view = fetch_module_view(client, org, args).await;

    finish_spinner(spinner);

    match view? {
        ModuleView::List(rows) => output_module_rows(&rows, &args.output),
        ModuleView::Detail { module, versions } => {
            print_module_detail(&module, client.host(), &versions)
        }
        ModuleView::Raw(raw) => output_raw(&raw, &args.output),
    }
}

/// Fetch and assemble the module listing or detail data. No output happens
/// here; the caller renders after clearing the spinner.
async fn fetch_module_view(client: &TfeClient, org: &str, args: &ModArgs) -> Result<ModuleView> {
    let mut modules = client.get_registry_modules(org).await?;

    if let Some(filter) = &args.filter {
        modules.retain(|module| name_matches(module.name(), filter));
        debug!("Filtered to {} modules matching '{}'", modules.len(), filter);
    }

    // A filter narrowing down to exactly one module switches to detail view
    if modules.len() == 1 {
        let module = modules.remove(0);

        if args.output.is_structured() {
            let (_module, raw) = client.get_registry_module(org, &module).await?;
            return Ok(ModuleView::Raw(raw));
        }

        let mut versions = Vec::with_capacity(module.version_statuses().len());
        for status in module.version_statuses() {
            versions.push(
                client
                    .get_module_version(org, &module, &status.version)
                    .await?,
            );
        }
        return Ok(ModuleView::Detail { module, versions });
    }

    let mut rows = Vec::new();
    for module in &modules {
        for status in selected_versions(module, args.all_versions) {
            let detail = client
                .get_module_version(org, module, &status.version)
                .await?;
            rows.push(ModuleVersionRow::new(
                module.address(client.host()),
                status,
                &detail,
            )?);
        }
    }

    Ok(ModuleView::List(rows))
}

/// Versions to render for a module in list mode. Modules with no recorded
/// versions contribute nothing.
fn selected_versions(module: &RegistryModule, all_versions: bool) -> Vec<&VersionStatus> {
    if all_versions {
        module.version_statuses().iter().collect()
    } else {
        latest_version(module.version_statuses())
            .into_iter()
            .collect()
    }
}
