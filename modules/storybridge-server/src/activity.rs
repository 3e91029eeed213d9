//! Inbound Bot Framework activity model and invocation resolution.
//!
//! Teams posts one JSON activity per messaging-extension interaction. The
//! activity shape is resolved exactly once at the handler boundary into a
//! closed `Invocation` variant; handlers never re-inspect raw fields.

use serde::Deserialize;
use serde_json::Value;

/// Activity type for messaging-extension traffic.
pub const INVOKE_ACTIVITY_TYPE: &str = "invoke";

/// Parameter name Teams sends before the user has typed a keyword.
pub const INITIAL_RUN_PARAMETER: &str = "initialRun";

/// Inbound activity. Everything is optional on the wire; validity is decided
/// by `Invocation::resolve`, not by deserialization failures.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub activity_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

/// The query-data substructure of an extension-query invoke.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionQuery {
    #[serde(rename = "commandId", default)]
    pub command_id: Option<String>,
    #[serde(default)]
    pub parameters: Vec<QueryParameter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryParameter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl ExtensionQuery {
    /// Keyword to send to the search backend. Only the first parameter is
    /// consulted; `initialRun` means the user has not typed anything yet and
    /// maps to the empty keyword, not a literal filter value.
    pub fn effective_keyword(&self) -> String {
        match self.parameters.first() {
            Some(p) if p.name == INITIAL_RUN_PARAMETER => String::new(),
            Some(p) => match &p.value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            },
            None => String::new(),
        }
    }
}

/// Outcome of inspecting one inbound activity.
#[derive(Debug, Clone)]
pub enum Invocation {
    /// A well-formed extension query: `invoke` type, a command id, and at
    /// least one parameter.
    ExtensionQuery(ExtensionQuery),
    /// Anything else. The handler answers with the fixed client-error
    /// diagnostic and makes no remote call.
    Malformed,
}

impl Invocation {
    pub fn resolve(activity: &Activity) -> Self {
        if activity.activity_type != INVOKE_ACTIVITY_TYPE {
            return Self::Malformed;
        }
        let Some(value) = &activity.value else {
            return Self::Malformed;
        };
        let Ok(query) = serde_json::from_value::<ExtensionQuery>(value.clone()) else {
            return Self::Malformed;
        };
        if query.command_id.is_none() || query.parameters.is_empty() {
            return Self::Malformed;
        }
        Self::ExtensionQuery(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activity(body: Value) -> Activity {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn non_invoke_activity_is_malformed() {
        let a = activity(json!({
            "type": "message",
            "value": { "commandId": "searchCmd", "parameters": [{ "name": "q", "value": "x" }] }
        }));
        assert!(matches!(Invocation::resolve(&a), Invocation::Malformed));
    }

    #[test]
    fn invoke_without_value_is_malformed() {
        let a = activity(json!({ "type": "invoke" }));
        assert!(matches!(Invocation::resolve(&a), Invocation::Malformed));
    }

    #[test]
    fn invoke_without_command_id_is_malformed() {
        let a = activity(json!({
            "type": "invoke",
            "value": { "parameters": [{ "name": "q", "value": "x" }] }
        }));
        assert!(matches!(Invocation::resolve(&a), Invocation::Malformed));
    }

    #[test]
    fn invoke_with_empty_parameters_is_malformed() {
        let a = activity(json!({
            "type": "invoke",
            "value": { "commandId": "searchCmd", "parameters": [] }
        }));
        assert!(matches!(Invocation::resolve(&a), Invocation::Malformed));
    }

    #[test]
    fn invoke_with_non_object_value_is_malformed() {
        let a = activity(json!({ "type": "invoke", "value": "nope" }));
        assert!(matches!(Invocation::resolve(&a), Invocation::Malformed));
    }

    #[test]
    fn well_formed_query_resolves() {
        let a = activity(json!({
            "type": "invoke",
            "name": "composeExtension/query",
            "value": { "commandId": "searchCmd", "parameters": [{ "name": "q", "value": "retail" }] }
        }));
        let Invocation::ExtensionQuery(query) = Invocation::resolve(&a) else {
            panic!("expected extension query");
        };
        assert_eq!(query.command_id.as_deref(), Some("searchCmd"));
        assert_eq!(query.effective_keyword(), "retail");
    }

    #[test]
    fn initial_run_maps_to_empty_keyword() {
        let a = activity(json!({
            "type": "invoke",
            "value": { "commandId": "searchCmd", "parameters": [{ "name": "initialRun", "value": "true" }] }
        }));
        let Invocation::ExtensionQuery(query) = Invocation::resolve(&a) else {
            panic!("expected extension query");
        };
        assert_eq!(query.effective_keyword(), "");
    }

    #[test]
    fn only_first_parameter_is_consulted() {
        let a = activity(json!({
            "type": "invoke",
            "value": {
                "commandId": "searchCmd",
                "parameters": [
                    { "name": "q", "value": "bar" },
                    { "name": "initialRun", "value": "true" }
                ]
            }
        }));
        let Invocation::ExtensionQuery(query) = Invocation::resolve(&a) else {
            panic!("expected extension query");
        };
        assert_eq!(query.effective_keyword(), "bar");
    }

    #[test]
    fn non_string_parameter_value_is_coerced() {
        let a = activity(json!({
            "type": "invoke",
            "value": { "commandId": "searchCmd", "parameters": [{ "name": "q", "value": 42 }] }
        }));
        let Invocation::ExtensionQuery(query) = Invocation::resolve(&a) else {
            panic!("expected extension query");
        };
        assert_eq!(query.effective_keyword(), "42");
    }
}
