//! `ferry info` command - show repository metadata.

use anyhow::Result;
use ferry_core::Config;
use ferry_github::RepoInfo;
use serde::Serialize;

use super::utils::build_client;
use crate::output;

/// JSON output structure for the info command.
#[derive(Serialize)]
struct JsonOutput<'a> {
    owner: &'a str,
    repo: &'a str,
    default_branch: &'a str,
}

/// Run the info command.
pub fn run(json: bool) -> Result<()> {
    let config = Config::from_env();
    let client = build_client(&config)?;

    let rt = tokio::runtime::Runtime::new()?;
    let info = rt.block_on(client.repo_info())?;

    if json {
        print_json(&info)?;
    } else {
        print_info(&info);
    }

    Ok(())
}

/// Print repository metadata as key/value lines.
fn print_info(info: &RepoInfo) {
    output::essential(&format!("owner:          {}", info.owner));
    output::essential(&format!("repo:           {}", info.repo));
    output::essential(&format!("default branch: {}", info.default_branch));
}

/// Print repository metadata as JSON.
fn print_json(info: &RepoInfo) -> Result<()> {
    let json_output = serde_json::to_string_pretty(&JsonOutput {
        owner: &info.owner,
        repo: &info.repo,
        default_branch: &info.default_branch,
    })?;
    println!("{json_output}");
    Ok(())
}
