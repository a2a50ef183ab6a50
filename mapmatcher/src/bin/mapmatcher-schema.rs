use mapmatcher_core::config::schema::MapMatcherConfigFile;

/// writes the JSON schema of the map matcher configuration file to stdout
pub fn main() -> Result<(), serde_json::Error> {
    let schema = schemars::schema_for!(MapMatcherConfigFile);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
