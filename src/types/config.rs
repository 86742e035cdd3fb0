use crate::error::RiskError;
use crate::report::OutputFormat;
use serde::Deserialize;

pub const DEFAULT_PROGRESS_WIDTH: u32 = 40;
pub const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    pub output: Option<OutputConfig>,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub progress_width: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl RiskConfig {
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn progress_width(&self) -> u32 {
        self.display
            .as_ref()
            .and_then(|display| display.progress_width)
            .unwrap_or(DEFAULT_PROGRESS_WIDTH)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        let width = self.progress_width();
        if !(1..=200).contains(&width) {
            return Err(RiskError::ConfigParse(format!(
                "display.progress_width must be between 1 and 200 (found {width})"
            )));
        }

        let level = self.log_level();
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(RiskError::ConfigParse(format!(
                "unsupported logging.level: {level} (expected one of {})",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RiskConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.output_format(), None);
        assert_eq!(cfg.progress_width(), DEFAULT_PROGRESS_WIDTH);
        assert_eq!(cfg.log_level(), "warn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[output]
format = "json"

[display]
progress_width = 20

[logging]
level = "debug"
"#;
        let cfg: RiskConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.output_format(), Some(OutputFormat::Json));
        assert_eq!(cfg.progress_width(), 20);
        assert_eq!(cfg.log_level(), "debug");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_output_format_fails_to_parse() {
        let result: Result<RiskConfig, _> = toml::from_str(
            r#"
[output]
format = "xml"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_zero_progress_width() {
        let cfg: RiskConfig = toml::from_str(
            r#"
[display]
progress_width = 0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("display.progress_width"));
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let cfg: RiskConfig = toml::from_str(
            r#"
[logging]
level = "chatty"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported logging.level"));
    }

    #[test]
    fn validate_accepts_width_boundaries() {
        for width in [1, 200] {
            let cfg: RiskConfig =
                toml::from_str(&format!("[display]\nprogress_width = {width}\n"))
                    .expect("config should parse");
            assert!(cfg.validate().is_ok());
        }
    }
}
