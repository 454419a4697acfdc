use std::path::Path;

use anyhow::{Context, Result};

use kabutor::fetch::HostFacts;
use kabutor::shell::{EntryKind, PROMPT, Shell};
use kabutor::store::FileStore;

use crate::Commands;

pub(crate) fn handle_command(command: Commands, data_dir: &Path, no_open: bool) -> Result<()> {
    let store = FileStore::open(data_dir)?;

    match command {
        Commands::Sites { json } => {
            let sites = kabutor::registry::SiteRegistry::new(store).list();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&sites).context("serialize sites json")?
                );
            } else if sites.is_empty() {
                println!("No sites yet (try `kabutor exec mkdir https://example.com ex`)");
            } else {
                let width = sites.iter().map(|s| s.name.len()).max().unwrap_or(0);
                for site in sites {
                    println!("{: <width$}  {}", site.name, site.url, width = width);
                }
            }
        }
        Commands::Exec { line } => {
            let mut shell = Shell::new(store, HostFacts::detect());
            let nav = shell.run_line(&line.join(" "));

            let mut failed = false;
            for entry in shell.log() {
                match entry.kind {
                    EntryKind::Command => println!("{} {}", PROMPT, entry.text),
                    EntryKind::Error => {
                        failed = true;
                        eprintln!("{}", entry.text);
                    }
                    EntryKind::Output | EntryKind::Success => println!("{}", entry.text),
                }
            }

            if let Some(nav) = nav {
                println!("{}", nav.url);
                if !no_open {
                    kabutor::navigate::system_open(&nav.url)?;
                }
            }
            if failed {
                anyhow::bail!("command failed");
            }
        }
    }

    Ok(())
}
