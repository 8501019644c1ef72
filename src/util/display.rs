use crate::util::{show_json, CliError, JsonOutcome, Outcome};
use serde::Serialize;
use serde_json::{Number, Value};
use strum_macros::{AsRefStr, EnumString};

#[derive(AsRefStr, EnumString, Debug, Clone, Copy, PartialEq)]
#[allow(non_camel_case_types)]
pub enum OutputFormat {
    pretty,
    json,
    yaml,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::pretty
    }
}

pub fn display<T, F>(
    outcome: Result<Outcome<T>, CliError>,
    format: OutputFormat,
    f_data: F,
) -> anyhow::Result<i32>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match (outcome, format) {
        (Ok(outcome), OutputFormat::json) => match outcome {
            Outcome::SuccessWithMessage(msg) => {
                show_json(serde_json::to_string(&JsonOutcome::success(msg))?)
            }
            Outcome::SuccessWithData(data) => println!("{}", serde_json::to_string(&data)?),
        },
        (Ok(outcome), OutputFormat::yaml) => match outcome {
            Outcome::SuccessWithMessage(msg) => println!("{msg}"),
            Outcome::SuccessWithData(data) => print!("{}", to_yaml(&data)?),
        },
        (Ok(outcome), OutputFormat::pretty) => match outcome {
            Outcome::SuccessWithMessage(msg) => println!("{msg}"),
            Outcome::SuccessWithData(data) => f_data(&data),
        },
        (Err(e), OutputFormat::json) => {
            show_json(serde_json::to_string(&JsonOutcome::from(&e))?);
            return Ok(e.exit_code());
        }
        (Err(e), _) => {
            log::debug!("{:?}", e);
            println!("Error: {}", e.chain());
            return Ok(e.exit_code());
        }
    }
    Ok(0)
}

/// Serializes through `serde_yaml`, keeping JSON numbers as YAML numbers.
pub fn to_yaml<T: Serialize>(data: &T) -> anyhow::Result<String> {
    let value = yaml_value(serde_json::to_value(data)?);
    Ok(serde_yaml::to_string(&value)?)
}

fn yaml_value(value: Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(b),
        Value::Number(n) => yaml_number(&n),
        Value::String(s) => serde_yaml::Value::String(s),
        Value::Array(values) => {
            serde_yaml::Value::Sequence(values.into_iter().map(yaml_value).collect())
        }
        Value::Object(map) => serde_yaml::Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (serde_yaml::Value::String(k), yaml_value(v)))
                .collect(),
        ),
    }
}

// Numbers a YAML number cannot hold exactly are written as strings.
fn yaml_number(n: &Number) -> serde_yaml::Value {
    if let Some(u) = n.as_u64() {
        return serde_yaml::Value::Number(u.into());
    }
    if let Some(i) = n.as_i64() {
        return serde_yaml::Value::Number(i.into());
    }
    match n.as_f64() {
        Some(f) if Number::from_f64(f).map(|exact| exact.to_string()) == Some(n.to_string()) => {
            serde_yaml::Value::Number(f.into())
        }
        _ => serde_yaml::Value::String(n.to_string()),
    }
}
