use serde::{Deserialize, Serialize};

use crate::model::{DiffRequest, DiffResult};

/// Body of `POST <diffUrl>`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiffRequestBody {
    #[serde(rename = "modelName")]
    pub model_name: String,
    #[serde(rename = "fromModel")]
    pub from_model: String,
    #[serde(rename = "toModel")]
    pub to_model: String,
    pub metamodels: Vec<String>,
}

/// The diff service's response: raw textual diff plus the two munidiff
/// representations.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiffResponse {
    pub diff: String,
    #[serde(rename = "textual-munidiff")]
    pub textual_munidiff: String,
    #[serde(rename = "graphical-munidiff")]
    pub graphical_munidiff: String,
}

impl From<&DiffRequest> for DiffRequestBody {
    fn from(request: &DiffRequest) -> DiffRequestBody {
        DiffRequestBody {
            model_name: request.model_name.clone(),
            from_model: request.from_model_content.clone(),
            to_model: request.to_model_content.clone(),
            metamodels: request.schema_contents.clone(),
        }
    }
}

impl From<DiffResponse> for DiffResult {
    fn from(response: DiffResponse) -> DiffResult {
        DiffResult {
            textual_diff: response.diff,
            structured_textual_diff: response.textual_munidiff,
            graphical_diff_markup: response.graphical_munidiff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimelineError;

    #[test]
    fn test_request_body_field_names() -> Result<(), TimelineError> {
        let request = DiffRequest {
            model_name: "m.ecore".to_string(),
            from_model_content: "".to_string(),
            to_model_content: "<model/>".to_string(),
            schema_contents: vec!["<schema/>".to_string()],
        };
        let body = serde_json::to_value(DiffRequestBody::from(&request))?;
        assert_eq!(body["modelName"], "m.ecore");
        assert_eq!(body["fromModel"], "");
        assert_eq!(body["toModel"], "<model/>");
        assert_eq!(body["metamodels"][0], "<schema/>");
        Ok(())
    }

    #[test]
    fn test_response_hyphenated_keys() -> Result<(), TimelineError> {
        let body = serde_json::json!({
            "diff": "-a\n+b",
            "textual-munidiff": "changed a to b",
            "graphical-munidiff": "<svg/>"
        })
        .to_string();
        let result = DiffResult::from(serde_json::from_str::<DiffResponse>(&body)?);
        assert_eq!(result.textual_diff, "-a\n+b");
        assert_eq!(result.structured_textual_diff, "changed a to b");
        assert_eq!(result.graphical_diff_markup, "<svg/>");
        Ok(())
    }
}
