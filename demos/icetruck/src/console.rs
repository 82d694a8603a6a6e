//! Operator input read from stdin, one instruction per line.
//!
//! ```text
//! go 3                     GoToCustomer(3)
//! recall                   Recall
//! temp -7.5 [version]      desired OptimalTemperature
//! desired {"...": ...}     raw desired-properties patch
//! quit
//! ```

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use truck_device::{DesiredChange, DeviceCommand};

#[derive(Debug, PartialEq)]
pub enum ConsoleInput {
    Command(DeviceCommand),
    Desired(DesiredChange),
    Quit,
}

/// Parse one input line.  Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ConsoleInput>> {
    let line = line.trim();
    let Some((word, rest)) = split_word(line) else {
        return Ok(None);
    };

    let input = match word.to_ascii_lowercase().as_str() {
        "go" | "gotocustomer" => {
            let payload = Value::String(rest.to_owned());
            ConsoleInput::Command(DeviceCommand::parse(DeviceCommand::GO_TO_CUSTOMER, &payload)?)
        }
        "recall" => ConsoleInput::Command(DeviceCommand::Recall),
        "temp" => {
            let mut args = rest.split_whitespace();
            let value: f64 = args
                .next()
                .context("usage: temp <celsius> [version]")?
                .parse()
                .context("temperature must be a number")?;
            let version: Option<u64> = args.next().map(str::parse).transpose().context("version must be an integer")?;
            let mut patch = json!({ "OptimalTemperature": { "value": value } });
            if let Some(v) = version {
                patch["$version"] = json!(v);
            }
            ConsoleInput::Desired(DesiredChange::from_json(&patch)?)
        }
        "desired" => ConsoleInput::Desired(DesiredChange::parse_str(rest)?),
        "quit" | "exit" => ConsoleInput::Quit,
        other => bail!("unknown input '{other}'"),
    };
    Ok(Some(input))
}

fn split_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    })
}

#[cfg(test)]
mod tests {
    use truck_device::Setting;

    use super::*;

    #[test]
    fn commands() {
        assert_eq!(parse_line("go 3").unwrap(), Some(ConsoleInput::Command(DeviceCommand::GoToCustomer(3))));
        assert_eq!(parse_line("  RECALL ").unwrap(), Some(ConsoleInput::Command(DeviceCommand::Recall)));
        assert_eq!(parse_line("quit").unwrap(), Some(ConsoleInput::Quit));
        assert_eq!(parse_line("   ").unwrap(), None);
        assert!(parse_line("go").is_err());
        assert!(parse_line("fly 3").is_err());
    }

    #[test]
    fn temperature() {
        let Some(ConsoleInput::Desired(change)) = parse_line("temp -7.5 9").unwrap() else {
            panic!("expected a desired change");
        };
        assert_eq!(change.version, Some(9));
        assert_eq!(change.settings, vec![Setting::OptimalTemperature(-7.5)]);

        let Some(ConsoleInput::Desired(change)) = parse_line("temp -3").unwrap() else {
            panic!("expected a desired change");
        };
        assert_eq!(change.version, None);
        assert!(parse_line("temp warm").is_err());
    }

    #[test]
    fn raw_desired_patch() {
        let parsed = parse_line(r#"desired {"OptimalTemperature":{"value":-6},"$version":2}"#).unwrap();
        let Some(ConsoleInput::Desired(change)) = parsed else {
            panic!("expected a desired change");
        };
        assert_eq!(change.version, Some(2));
        assert_eq!(change.settings, vec![Setting::OptimalTemperature(-6.0)]);
    }
}
