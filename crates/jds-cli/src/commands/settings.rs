//! Settings command implementation

use anyhow::Result;
use jds_db::SnowflakeUrl;

use crate::cli::GlobalArgs;
use crate::commands::common::{load_settings, print_table};

/// Execute the settings command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let settings = load_settings(global)?;
    let sf = &settings.snowflake;

    let mask = |value: &str| {
        if value.is_empty() {
            String::new()
        } else {
            "***".to_string()
        }
    };

    let rows = vec![
        vec!["SNOWFLAKE_ACCOUNT".to_string(), sf.account.clone()],
        vec!["SNOWFLAKE_USER".to_string(), sf.user.clone()],
        vec!["SNOWFLAKE_PASSWORD".to_string(), mask(&sf.password)],
        vec!["SNOWFLAKE_DATABASE".to_string(), sf.database.clone()],
        vec!["SNOWFLAKE_WAREHOUSE".to_string(), sf.warehouse.clone()],
        vec![
            "SNOWFLAKE_ROLE".to_string(),
            sf.role.clone().unwrap_or_default(),
        ],
        vec![
            "JDS_TEMPLATES_PATH".to_string(),
            settings
                .templates_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        ],
    ];
    print_table(&["KEY", "VALUE"], &rows);

    println!();
    println!("Snowflake URL: {}", SnowflakeUrl::from_config(sf));
    Ok(())
}
