//! `ferry list` command - flat file listing for a repository directory.

use anyhow::Result;
use ferry_core::Config;

use super::utils::build_client;
use crate::output;

/// Run the list command.
pub fn run(directory: Option<&str>, branch: Option<&str>, json: bool) -> Result<()> {
    let config = Config::from_env();
    let client = build_client(&config)?;
    let path = directory.unwrap_or_default();

    let rt = tokio::runtime::Runtime::new()?;
    let files = rt.block_on(async {
        let reference = match branch {
            Some(branch) => branch.to_string(),
            None => client.repo_info().await?.default_branch,
        };
        client.list_files(path, &reference).await
    })?;

    if json {
        print_json(&files)?;
        return Ok(());
    }

    if files.is_empty() {
        output::info("No files found");
        return Ok(());
    }

    print_files(&files);

    Ok(())
}

/// Print one file path per line for piping.
fn print_files(files: &[String]) {
    for file in files {
        output::essential(file);
    }
}

/// Print the listing as a JSON array.
fn print_json(files: &[String]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(files)?;
    println!("{json_output}");
    Ok(())
}
