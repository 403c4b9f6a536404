use anyhow::bail;
use colored::Colorize;
use gitinfo_core::{filter_sensitive_info, normalize_branch, normalize_tag, GitInfo};
use serde_json::json;
use tracing::debug;

use crate::cli::*;

pub fn run_command(command: Command, format: OutputFormat) -> anyhow::Result<()> {
    let output = match command {
        Command::Tag(args) => cmd_tag(args, format)?,
        Command::Branch(args) => cmd_branch(args, format)?,
        Command::Scrub(args) => cmd_scrub(args, format),
        Command::Describe(args) => cmd_describe(args, format)?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_tag(args: RefArgs, format: OutputFormat) -> anyhow::Result<String> {
    let Some(tag) = normalize_tag(args.reference.as_str()) else {
        bail!("not a tag reference: {}", args.reference);
    };
    Ok(match format {
        OutputFormat::Text => tag,
        OutputFormat::Json => json!({ "tag": tag }).to_string(),
    })
}

fn cmd_branch(args: RefArgs, format: OutputFormat) -> anyhow::Result<String> {
    let Some(branch) = normalize_branch(args.reference.as_str()) else {
        bail!("not a branch reference: {}", args.reference);
    };
    Ok(match format {
        OutputFormat::Text => branch.to_string(),
        OutputFormat::Json => json!({ "branch": branch }).to_string(),
    })
}

fn cmd_scrub(args: ScrubArgs, format: OutputFormat) -> String {
    let url = filter_sensitive_info(args.url.as_str()).unwrap_or_default();
    match format {
        OutputFormat::Text => url.into_owned(),
        OutputFormat::Json => json!({ "repository_url": url }).to_string(),
    }
}

fn cmd_describe(args: DescribeArgs, format: OutputFormat) -> anyhow::Result<String> {
    debug!(has_ref = args.reference.is_some(), has_url = args.url.is_some(), "describe");
    let info = GitInfo::new(args.reference.as_deref(), args.url.as_deref());
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&info)?,
        OutputFormat::Text => describe_text(&info),
    })
}

fn describe_text(info: &GitInfo) -> String {
    let mut lines = Vec::new();
    if let Some(branch) = &info.branch {
        lines.push(format!("{} {}", "branch:".bold(), branch.green()));
    }
    if let Some(tag) = &info.tag {
        lines.push(format!("{} {}", "tag:".bold(), tag.yellow()));
    }
    if let Some(url) = &info.repository_url {
        lines.push(format!("{} {}", "repository_url:".bold(), url.blue()));
    }
    if lines.is_empty() {
        lines.push("No git information available.".dimmed().to_string());
    }
    lines.join("\n")
}
