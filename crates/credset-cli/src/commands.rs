use anyhow::Result;
use credset_config::AppConfig;
use credset_core::{
    BundleManifest, CredentialManager, DeleteOptions, GenerateOptions, ListOptions, ShowOptions,
};
use credset_store::FileSystemStore;
use std::io::Write;
use std::path::Path;

use crate::Commands;
use crate::prompt::DialoguerPrompt;

/// Execute the parsed CLI command.
pub fn execute(command: Commands, config: &AppConfig) -> Result<()> {
    let manager = CredentialManager::new(FileSystemStore::new(config.credentials_dir()));

    match command {
        Commands::Generate { name, silent, file } => cmd_generate(&manager, name, silent, &file),
        Commands::List { output } => {
            let opts = ListOptions::new(output_format(output.as_deref(), config))?;
            with_stdout(|out| Ok(manager.list(&opts, out)?))
        }
        Commands::Show { name, output } => {
            let opts = ShowOptions::new(name, output_format(output.as_deref(), config))?;
            with_stdout(|out| Ok(manager.show(&opts, out)?))
        }
        Commands::Delete { name } => Ok(manager.delete(&DeleteOptions::new(name))?),
    }
}

fn output_format<'a>(flag: Option<&'a str>, config: &'a AppConfig) -> &'a str {
    flag.unwrap_or(&config.default_output)
}

fn with_stdout(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    f(&mut out)?;
    out.flush()?;
    Ok(())
}

fn cmd_generate(
    manager: &CredentialManager<FileSystemStore>,
    name: String,
    silent: bool,
    bundle_file: &Path,
) -> Result<()> {
    let bundle = BundleManifest::from_file(bundle_file)?;
    let opts = GenerateOptions { name, silent };

    let set = manager.generate(&opts, &bundle, &mut DialoguerPrompt)?;

    println!(
        "Generated credential set '{}' for bundle '{}' ({} credential(s))",
        set.name,
        bundle.name,
        set.credentials.len()
    );
    Ok(())
}
