/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use namefmt_core::NameComponents;
use serde_json::Value;

use crate::ProcessorError;

/// Load names from a file.
/// Supports YAML/JSON holding either one mapping or a list of mappings.
pub fn load_names(path: &Path) -> Result<Vec<NameComponents>, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let value: Value = match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?,
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?
        }
    };
    names_from_value(&value)
}

/// Extract names from an already parsed document.
pub fn names_from_value(value: &Value) -> Result<Vec<NameComponents>, ProcessorError> {
    match value {
        Value::Array(items) => Ok(items.iter().map(NameComponents::from_value).collect()),
        Value::Object(_) => Ok(vec![NameComponents::from_value(value)]),
        Value::Null => Ok(Vec::new()),
        other => Err(ProcessorError::ParseError(
            "names".to_string(),
            format!("expected a mapping or a list of mappings, found {}", other),
        )),
    }
}
