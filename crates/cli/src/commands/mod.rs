pub mod badges;
pub mod check;
pub mod config;
pub mod input;
pub mod profile;
pub mod suggest;
pub mod wattage;

use rigsmith_core::errors::ApplicationError;
use serde::Serialize;

pub const CONFIG_FAILURE_EXIT: u8 = 2;
pub const INPUT_FAILURE_EXIT: u8 = 3;
pub const SERIALIZATION_FAILURE_EXIT: u8 = 1;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

#[derive(Serialize)]
struct CommandReport<'a, T: Serialize> {
    command: &'a str,
    status: &'static str,
    #[serde(flatten)]
    data: &'a T,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            hint: None,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    /// Successful run whose body is `data` flattened next to the envelope fields.
    pub fn report<T: Serialize>(command: &str, data: &T) -> Self {
        let payload = CommandReport { command, status: "ok", data };
        match serde_json::to_string_pretty(&payload) {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure(
                command,
                "serialization",
                error.to_string(),
                SERIALIZATION_FAILURE_EXIT,
            ),
        }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            hint: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn from_error(command: &str, error: &ApplicationError) -> Self {
        let exit_code = match error {
            ApplicationError::Configuration(_) => CONFIG_FAILURE_EXIT,
            ApplicationError::Catalog(_) | ApplicationError::Domain(_) => INPUT_FAILURE_EXIT,
        };
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error.error_class().to_string()),
            message: error.to_string(),
            hint: Some(error.user_message().to_string()),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

#[cfg(test)]
mod tests {
    use serde::ser::Error as _;
    use serde::{Serialize, Serializer};

    use super::{CommandResult, SERIALIZATION_FAILURE_EXIT};

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn unserializable_report_fails_with_serialization_exit_code() {
        let result = CommandResult::report("suggest", &Unserializable);
        assert_eq!(result.exit_code, SERIALIZATION_FAILURE_EXIT);

        let payload: serde_json::Value =
            serde_json::from_str(&result.output).expect("failure output should be valid JSON");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "serialization");
        assert!(payload.get("hint").is_none(), "only application errors carry a hint");
    }
}
