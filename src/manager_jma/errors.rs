use thiserror::Error;

/// Failures fetching a forecast document. A document that parses but is incomplete is not
/// an error, the reconciler just gets less out of it.
#[derive(Error, Debug)]
pub enum JmaError {
    #[error("JmaError::Http: area {area_code}: {source}")]
    Http {
        area_code: String,
        #[source]
        source: ureq::Error,
    },
    #[error("JmaError::Document: area {area_code}: {source}")]
    Document {
        area_code: String,
        #[source]
        source: serde_json::Error,
    },
}

impl JmaError {
    pub fn http(area_code: &str, source: ureq::Error) -> JmaError {
        JmaError::Http { area_code: area_code.to_string(), source }
    }

    pub fn document(area_code: &str, source: serde_json::Error) -> JmaError {
        JmaError::Document { area_code: area_code.to_string(), source }
    }

    /// Area the failed request was for
    pub fn area_code(&self) -> &str {
        match self {
            JmaError::Http { area_code, .. } => area_code,
            JmaError::Document { area_code, .. } => area_code,
        }
    }
}
