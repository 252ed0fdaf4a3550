use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"
[tool.py-header-auditor]
format = "human"
header_phrase = "Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved."
top_level_dirs = ["src", "test", "scripts"]
glob_patterns = ["**/*.py", "**/*.sh"]
"#;

pub fn generate_config() -> Result<()> {
    generate_config_at_path("pyproject.toml")
}

pub fn generate_config_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let pyproject_path = path.as_ref();

    if !pyproject_path.exists() {
        return Err(anyhow::anyhow!(
            "pyproject.toml not found. Please create a project first."
        ));
    }

    add_header_config_to_existing(pyproject_path)?;
    println!("Added [tool.py-header-auditor] section to pyproject.toml");

    Ok(())
}

fn add_header_config_to_existing<P: AsRef<Path>>(path: P) -> Result<()> {
    let existing_content = fs::read_to_string(&path)?;

    // Parse existing TOML
    let mut doc = existing_content.parse::<toml_edit::DocumentMut>()?;

    // Parse embedded config to extract the tool section
    let embedded_doc: toml::Value = toml::from_str(DEFAULT_CONFIG)?;
    let tool_section = embedded_doc
        .get("tool")
        .and_then(|t| t.get("py-header-auditor"))
        .ok_or_else(|| anyhow::anyhow!("Invalid default config format"))?;

    // Ensure tool table exists
    if !doc.contains_key("tool") {
        doc["tool"] = toml_edit::Item::Table(toml_edit::Table::new());
    }

    let tool_item = toml_value_to_edit_item(tool_section)?;
    if let Some(tool_table) = doc["tool"].as_table_mut() {
        tool_table["py-header-auditor"] = tool_item;
    }

    fs::write(&path, doc.to_string())?;
    Ok(())
}

fn toml_value_to_edit_item(value: &toml::Value) -> Result<toml_edit::Item> {
    match value {
        toml::Value::String(s) => Ok(toml_edit::value(s.as_str())),
        toml::Value::Integer(i) => Ok(toml_edit::value(*i)),
        toml::Value::Boolean(b) => Ok(toml_edit::value(*b)),
        toml::Value::Array(arr) => {
            let mut edit_arr = toml_edit::Array::new();
            for item in arr {
                match item {
                    toml::Value::String(s) => edit_arr.push(s.as_str()),
                    _ => return Err(anyhow::anyhow!("Unsupported array item type: {:?}", item)),
                }
            }
            Ok(toml_edit::Item::Value(edit_arr.into()))
        }
        toml::Value::Table(table) => {
            let mut edit_table = toml_edit::Table::new();
            for (key, val) in table {
                edit_table[key] = toml_value_to_edit_item(val)?;
            }
            Ok(toml_edit::Item::Table(edit_table))
        }
        _ => Err(anyhow::anyhow!("Unsupported TOML value type")),
    }
}
