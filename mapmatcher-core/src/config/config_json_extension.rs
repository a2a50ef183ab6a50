use super::ConfigError;
use serde_json::Value;

/// typed accessors over an untyped configuration tree. keys are given as a path
/// of nested object keys, and errors name the dotted form of that path
/// (e.g. `["input", "network", "file"]` is reported as `input.network.file`).
///
/// a key holding JSON `null` is treated the same as an absent key.
pub trait ConfigJsonExtensions {
    /// walks the path, returning `None` when any segment is absent.
    /// fails if an intermediate value exists but is not an object.
    fn get_config_value(&self, path: &[&str]) -> Result<Option<&Value>, ConfigError>;

    /// reads a string field. numbers are accepted and rendered as strings, since
    /// column names such as `id` are sometimes written unquoted.
    fn get_config_string_optional(&self, path: &[&str]) -> Result<Option<String>, ConfigError> {
        match self.get_config_value(path)? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(invalid(path, "a string", other)),
        }
    }

    /// reads a path-valued field, which must be a string.
    fn get_config_path(&self, path: &[&str]) -> Result<String, ConfigError> {
        match self.get_config_value(path)? {
            None => Err(ConfigError::MissingField(dotted(path))),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(invalid(path, "a file path string", other)),
        }
    }

    /// reads a non-negative integer. integral floats such as `8.0` are accepted.
    fn get_config_usize_optional(&self, path: &[&str]) -> Result<Option<usize>, ConfigError> {
        let value = match self.get_config_value(path)? {
            None => return Ok(None),
            Some(v) => v,
        };
        if let Some(u) = value.as_u64() {
            return usize::try_from(u)
                .map(Some)
                .map_err(|e| invalid_msg(path, e.to_string()));
        }
        match value.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 => {
                Ok(Some(f as usize))
            }
            _ => Err(invalid(path, "a non-negative integer", value)),
        }
    }

    /// reads a finite number.
    fn get_config_f64_optional(&self, path: &[&str]) -> Result<Option<f64>, ConfigError> {
        match self.get_config_value(path)? {
            None => Ok(None),
            Some(value) => match value.as_f64() {
                Some(f) if f.is_finite() => Ok(Some(f)),
                _ => Err(invalid(path, "a finite number", value)),
            },
        }
    }
}

impl ConfigJsonExtensions for Value {
    fn get_config_value(&self, path: &[&str]) -> Result<Option<&Value>, ConfigError> {
        let mut current = self;
        for (depth, key) in path.iter().enumerate() {
            let obj = current.as_object().ok_or_else(|| {
                let parent = if depth == 0 {
                    String::from("<root>")
                } else {
                    dotted(&path[..depth])
                };
                ConfigError::InvalidField {
                    field: parent,
                    message: format!("expected an object, found {}", type_name(current)),
                }
            })?;
            match obj.get(*key) {
                None | Some(Value::Null) => return Ok(None),
                Some(next) => current = next,
            }
        }
        Ok(Some(current))
    }
}

pub(crate) fn dotted(path: &[&str]) -> String {
    path.join(".")
}

fn invalid(path: &[&str], expected: &str, found: &Value) -> ConfigError {
    invalid_msg(path, format!("expected {expected}, found {}", type_name(found)))
}

fn invalid_msg(path: &[&str], message: String) -> ConfigError {
    ConfigError::InvalidField {
        field: dotted(path),
        message,
    }
}

fn type_name(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string '{s}'"),
        Value::Array(_) => String::from("array"),
        Value::Object(_) => String::from("object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let conf = json!({"input": {"network": {"file": "edges.shp"}}});
        let file = conf.get_config_path(&["input", "network", "file"]).unwrap();
        assert_eq!(file, "edges.shp");
    }

    #[test]
    fn test_missing_intermediate_reports_full_path() {
        let conf = json!({"input": {}});
        match conf.get_config_path(&["input", "ubodt", "file"]) {
            Err(ConfigError::MissingField(field)) => assert_eq!(field, "input.ubodt.file"),
            other => panic!("expected MissingField, found {other:?}"),
        }
    }

    #[test]
    fn test_null_is_absent() {
        let conf = json!({"parameters": {"k": null}});
        let k = conf.get_config_usize_optional(&["parameters", "k"]).unwrap();
        assert_eq!(k, None);
    }

    #[test]
    fn test_non_object_intermediate() {
        let conf = json!({"input": {"network": "edges.shp"}});
        match conf.get_config_path(&["input", "network", "file"]) {
            Err(ConfigError::InvalidField { field, .. }) => assert_eq!(field, "input.network"),
            other => panic!("expected InvalidField, found {other:?}"),
        }
    }

    #[test]
    fn test_usize_accepts_integral_float() {
        let conf = json!({"k": 8.0});
        assert_eq!(conf.get_config_usize_optional(&["k"]).unwrap(), Some(8));
    }

    #[test]
    fn test_usize_rejects_fraction_and_negative() {
        for bad in [json!({"k": 2.5}), json!({"k": -1}), json!({"k": "eight"})] {
            match bad.get_config_usize_optional(&["k"]) {
                Err(ConfigError::InvalidField { field, .. }) => assert_eq!(field, "k"),
                other => panic!("expected InvalidField, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_string_accepts_numbers() {
        let conf = json!({"id": 7});
        assert_eq!(
            conf.get_config_string_optional(&["id"]).unwrap(),
            Some(String::from("7"))
        );
    }

    #[test]
    fn test_path_rejects_numbers() {
        let conf = json!({"file": 7});
        assert!(matches!(
            conf.get_config_path(&["file"]),
            Err(ConfigError::InvalidField { .. })
        ));
    }
}
