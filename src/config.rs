use crate::error::{Result, RiskError};
use crate::types::config::RiskConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "riskscore.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/riskscore/config.toml";

/// Loads `explicit` alone when given, otherwise the global file overlaid by
/// `riskscore.toml` in the working directory. Missing layers are skipped.
pub fn load_config(explicit: Option<&Path>) -> Result<RiskConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(RiskError::ConfigNotFound(path.display().to_string()));
        }
        return load_layers(&[path]);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let cwd = std::env::current_dir()?;
    load_config_with_global(&cwd, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<RiskConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    let layers = global_path
        .into_iter()
        .chain(std::iter::once(repo_path.as_path()))
        .collect::<Vec<_>>();
    load_layers(&layers)
}

fn load_layers(paths: &[&Path]) -> Result<RiskConfig> {
    let mut merged = Value::Table(Map::new());
    for path in paths {
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: RiskConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RiskError::ConfigParse(e.to_string()))?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RiskError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.output_format(), None);
        assert_eq!(cfg.progress_width(), 40);
    }

    #[test]
    fn load_config_merges_global_then_working_dir() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[output]
format = "md"

[display]
progress_width = 10
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
format = "json"
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(root.path(), Some(global_path.as_path()))
            .expect("load should succeed");

        assert_eq!(cfg.output_format(), Some(OutputFormat::Json));
        assert_eq!(cfg.progress_width(), 10);
    }

    #[test]
    fn merge_toml_merges_nested_tables_key_by_key() {
        let mut base: Value = toml::from_str(
            r#"
[output]
format = "md"

[display]
progress_width = 10

[logging]
level = "warn"
"#,
        )
        .expect("base should parse");
        let overlay: Value = toml::from_str(
            r#"
[display]
progress_width = 20

[logging]
level = "debug"
"#,
        )
        .expect("overlay should parse");

        merge_toml(&mut base, overlay);

        assert_eq!(base["output"]["format"].as_str(), Some("md"));
        assert_eq!(base["display"]["progress_width"].as_integer(), Some(20));
        assert_eq!(base["logging"]["level"].as_str(), Some("debug"));
    }

    #[test]
    fn merge_toml_replaces_scalar_with_table() {
        let mut base: Value = toml::from_str("output = \"json\"\n").expect("base should parse");
        let overlay: Value =
            toml::from_str("[output]\nformat = \"text\"\n").expect("overlay should parse");

        merge_toml(&mut base, overlay);

        assert_eq!(base["output"]["format"].as_str(), Some("text"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(missing.as_path())).expect_err("missing file should fail");
        assert!(matches!(err, RiskError::ConfigNotFound(_)));
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[output\nformat = ").expect("config should write");

        let err = load_config(Some(path.as_path())).expect_err("malformed file should fail");
        assert!(err.to_string().contains("broken.toml"));
    }
}
