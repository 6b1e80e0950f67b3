use ts_rs::TS;

/// Every type exported to the TypeScript client, in output order
pub const API_TYPE_NAMES: &[&str] = &[
    "AskRequest",
    "AskResponse",
    "FeedbackRequest",
    "MessageResponse",
    "InteractionItem",
    "InteractionListResponse",
    "HealthResponse",
    "ErrorResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "AskRequest" => AskRequest::export_to_string()?,
        "AskResponse" => AskResponse::export_to_string()?,

        "FeedbackRequest" => FeedbackRequest::export_to_string()?,
        "MessageResponse" => MessageResponse::export_to_string()?,
        "InteractionItem" => InteractionItem::export_to_string()?,
        "InteractionListResponse" => InteractionListResponse::export_to_string()?,

        "HealthResponse" => HealthResponse::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_type() {
        let result = generate_typescript_definitions(&["AskResponse"]).unwrap();
        assert!(result.contains("AskResponse"));
        assert!(result.contains("pergunta: string"));
        assert!(result.contains("resposta: string"));
    }

    #[test]
    fn test_generate_multiple_types() {
        let result =
            generate_typescript_definitions(&["InteractionItem", "InteractionListResponse"])
                .unwrap();
        assert!(result.contains("InteractionItem"));
        assert!(result.contains("interacoes"));
    }

    #[test]
    fn test_all_registered_types_export() {
        let result = generate_typescript_definitions(API_TYPE_NAMES).unwrap();
        for name in API_TYPE_NAMES {
            assert!(result.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_unknown_type_error() {
        let result = generate_typescript_definitions(&["NonExistentType"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown type"));
    }

    #[test]
    fn test_empty_type_names() {
        let result = generate_typescript_definitions(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cleaned_output() {
        let result = generate_typescript_definitions(&["HealthResponse"]).unwrap();
        assert!(!result.contains("import type"));
        assert!(!result.contains("This file was generated"));
    }
}
