//! The API capability document served at `GET /api/`.
//!
//! Clients of the real service read this once on start-up to discover URL
//! templates and the recognised groups, pipelines, searches and labels. Only
//! the values a live CBC pipeline needs are advertised.

use serde::Serialize;

pub const API_VERSIONS: [&str; 3] = ["default", "v1", "v2"];
pub const GROUPS: [&str; 2] = ["CBC", "Test"];
pub const PIPELINES: [&str; 1] = ["pycbc"];
pub const SEARCHES: [&str; 1] = ["AllSky"];
pub const LABELS: [&str; 2] = ["EARLY_WARNING", "SNR_OPTIMIZED"];

/// Top-level capability document. Field order is the serialized order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Capabilities {
    pub links: Links,
    pub templates: Templates,
    pub groups: Vec<String>,
    pub pipelines: Vec<String>,
    pub searches: Vec<String>,
    pub labels: Vec<String>,
    #[serde(rename = "api-versions")]
    pub api_versions: Vec<String>,
    #[serde(rename = "server-version")]
    pub server_version: String,
    #[serde(rename = "API_VERSIONS")]
    pub api_versions_legacy: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Links {
    pub events: String,
    #[serde(rename = "self")]
    pub self_: String,
    pub performance: String,
    #[serde(rename = "user-info")]
    pub user_info: String,
}

/// URL templates with `{graceid}`, `{N}` and `{label}` placeholders left
/// for the client to fill in.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Templates {
    #[serde(rename = "event-detail-template")]
    pub event_detail: String,
    #[serde(rename = "event-log-template")]
    pub event_log: String,
    #[serde(rename = "event-log-detail-template")]
    pub event_log_detail: String,
    #[serde(rename = "event-label-template")]
    pub event_label: String,
}

impl Capabilities {
    /// Build the document for an API rooted at `api_base`, which must end
    /// with `/api/`.
    pub fn for_base_url(api_base: &str, server_version: &str) -> Self {
        let versions = to_strings(&API_VERSIONS);
        Self {
            links: Links {
                events: format!("{api_base}events/"),
                self_: api_base.to_string(),
                performance: format!("{api_base}performance/"),
                user_info: format!("{api_base}user-info/"),
            },
            templates: Templates {
                event_detail: format!("{api_base}events/{{graceid}}"),
                event_log: format!("{api_base}events/{{graceid}}/log/"),
                event_log_detail: format!("{api_base}events/{{graceid}}/log/{{N}}"),
                event_label: format!("{api_base}events/{{graceid}}/labels/{{label}}"),
            },
            groups: to_strings(&GROUPS),
            pipelines: to_strings(&PIPELINES),
            searches: to_strings(&SEARCHES),
            labels: to_strings(&LABELS),
            api_versions: versions.clone(),
            server_version: server_version.to_string(),
            api_versions_legacy: versions,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_keep_placeholders() {
        let caps = Capabilities::for_base_url("http://localhost:8000/api/", "2.28.1");
        assert_eq!(
            caps.templates.event_log,
            "http://localhost:8000/api/events/{graceid}/log/"
        );
        assert_eq!(
            caps.templates.event_label,
            "http://localhost:8000/api/events/{graceid}/labels/{label}"
        );
        assert_eq!(caps.links.self_, "http://localhost:8000/api/");
    }

    #[test]
    fn serialized_keys_follow_wire_names() {
        let caps = Capabilities::for_base_url("http://h:1/api/", "2.28.1");
        let value = serde_json::to_value(&caps).unwrap();
        assert_eq!(value["links"]["self"], "http://h:1/api/");
        assert_eq!(value["links"]["user-info"], "http://h:1/api/user-info/");
        assert_eq!(value["api-versions"], serde_json::json!(["default", "v1", "v2"]));
        assert_eq!(value["API_VERSIONS"], value["api-versions"]);
        assert_eq!(value["server-version"], "2.28.1");
        assert_eq!(value["groups"], serde_json::json!(["CBC", "Test"]));
        assert_eq!(
            value["labels"],
            serde_json::json!(["EARLY_WARNING", "SNR_OPTIMIZED"])
        );
    }
}
