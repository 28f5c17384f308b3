pub mod human;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Trait for run results that can be rendered in both human and JSON formats.
pub trait CommandOutput: Serialize {
    fn human_display(&self) -> String;
}

/// Standard JSON envelope printed in `--json` mode.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> JsonEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonEnvelope<()> {
    pub fn failure(message: String) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Print a run result in the requested format.
pub fn print_output<T: CommandOutput>(output: &T, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Human => println!("{}", output.human_display()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&JsonEnvelope::success(output))?)
        }
    }
    Ok(())
}

/// Report a fatal error in the requested format.
pub fn print_error(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Human => human::error(message),
        OutputFormat::Json => match serde_json::to_string_pretty(&JsonEnvelope::failure(message.to_string())) {
            Ok(json) => println!("{json}"),
            Err(_) => human::error(message),
        },
    }
}
