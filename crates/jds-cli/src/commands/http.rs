//! Get and post command implementations

use anyhow::Result;
use jds_http::{fetch_all, post_all, Payload};

use crate::cli::{GetArgs, PostArgs};
use crate::commands::common::parse_headers;

/// Execute the get command
pub async fn execute_get(args: &GetArgs) -> Result<()> {
    let headers = parse_headers(&args.headers)?;
    let header_list = vec![headers; args.urls.len()];

    let responses = fetch_all(&args.urls, Some(&header_list)).await?;
    println!("{}", serde_json::to_string_pretty(&responses)?);
    Ok(())
}

/// Execute the post command
pub async fn execute_post(args: &PostArgs) -> Result<()> {
    let headers = parse_headers(&args.headers)?;
    let header_list = vec![headers; args.data.len()];
    let payloads: Vec<Payload> = args.data.iter().map(|d| Payload::from(d.as_str())).collect();

    let responses = post_all(&args.url, payloads, &header_list).await?;
    println!("{}", serde_json::to_string_pretty(&responses)?);
    Ok(())
}
