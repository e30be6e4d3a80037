//! JSON rendering of the extracted model.

use api_model::Model;

use crate::error::WriteError;

/// Render `model` as JSON, terminated by a newline.
pub fn render_model(model: &Model, pretty: bool) -> Result<String, WriteError> {
    let mut json = if pretty {
        serde_json::to_string_pretty(model)?
    } else {
        serde_json::to_string(model)?
    };
    json.push('\n');
    Ok(json)
}

/// Parse a previously rendered model.
pub fn parse_model(json: &str) -> Result<Model, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_model::{Enum, EnumMember};

    fn model() -> Model {
        let mut color = Enum::new("Color");
        color.members.push(EnumMember::new("Red"));
        Model {
            interfaces: vec![],
            enums: vec![color],
        }
    }

    #[test]
    fn test_compact_rendering() {
        let json = render_model(&model(), false).unwrap();
        assert_eq!(
            json,
            "{\"interfaces\":[],\"enums\":[{\"name\":\"Color\",\"members\":[{\"name\":\"Red\"}]}]}\n"
        );
    }

    #[test]
    fn test_pretty_rendering_parses_back() {
        let json = render_model(&model(), true).unwrap();
        assert!(json.contains("\n  \"enums\": ["));
        assert_eq!(parse_model(&json).unwrap(), model());
    }
}
