// src/api/types.rs
use serde::Deserialize;

/// Successful response of `POST /extract`. The service also sends bookkeeping
/// fields (`total_count`, `processing_time_ms`) which we have no use for;
/// serde drops them on the floor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub file: String,
    pub language: String,
    pub functions: Vec<FunctionInfo>,
}

/// One detected function. Order is the service's order and is preserved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub parameters: Vec<String>,
    #[serde(default)]
    pub return_type: Option<String>,
    pub line_number: u32,
}

/// Response of `GET /status`. `/health` answers with the same shape minus
/// the language list, so the field defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub supported_languages: Vec<String>,
}

impl AnalysisResult {
    pub fn language_tag(&self) -> String {
        self.language.to_uppercase()
    }

    pub fn count_caption(&self) -> String {
        format!("{} functions", self.functions.len())
    }
}

impl FunctionInfo {
    /// `name(a, b) → ret`; the arrow segment is omitted when the service
    /// reported no return type.
    pub fn signature(&self) -> String {
        let mut signature = format!("{}({})", self.name, self.parameters.join(", "));
        if let Some(return_type) = self.return_type.as_deref() {
            if !return_type.is_empty() {
                signature.push_str(&format!(" → {}", return_type));
            }
        }
        signature
    }

    pub fn line_label(&self) -> String {
        format!("Line {}", self.line_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_result() {
        let value = json!({
            "file": "a.py",
            "language": "python",
            "functions": [
                {"name": "f", "parameters": ["x", "y"], "return_type": "int", "line_number": 3}
            ],
            "total_count": 1,
            "processing_time_ms": 15.5
        });

        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.file, "a.py");
        assert_eq!(result.language_tag(), "PYTHON");
        assert_eq!(result.count_caption(), "1 functions");
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].signature(), "f(x, y) → int");
        assert_eq!(result.functions[0].line_label(), "Line 3");
    }

    #[test]
    fn null_return_type_omits_arrow() {
        let function: FunctionInfo = serde_json::from_value(json!({
            "name": "run", "parameters": [], "return_type": null, "line_number": 10
        }))
        .unwrap();
        assert_eq!(function.signature(), "run()");
    }

    #[test]
    fn absent_return_type_omits_arrow() {
        let function: FunctionInfo = serde_json::from_value(json!({
            "name": "run", "parameters": ["a"], "line_number": 10
        }))
        .unwrap();
        assert_eq!(function.signature(), "run(a)");
    }

    #[test]
    fn empty_return_type_omits_arrow() {
        let function = FunctionInfo {
            name: "main".to_string(),
            parameters: vec![],
            return_type: Some(String::new()),
            line_number: 1,
        };
        assert_eq!(function.signature(), "main()");
    }

    #[test]
    fn functions_keep_service_order() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "file": "b.go",
            "language": "go",
            "functions": [
                {"name": "zeta", "parameters": [], "line_number": 40},
                {"name": "alpha", "parameters": [], "line_number": 2}
            ]
        }))
        .unwrap();
        let names: Vec<&str> = result.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn status_parses_without_language_list() {
        let status: ServiceStatus = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert_eq!(status.status, "ok");
        assert!(status.supported_languages.is_empty());
    }
}
