use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SalesDashResult;

/// Identifier as sent by the backend: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        RecordId::Number(n.into())
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: RecordId,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Deal {
    pub fn new(
        id: impl Into<RecordId>,
        client: impl Into<String>,
        status: impl Into<String>,
        value: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            client: client.into(),
            status: status.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRep {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deals: Vec<Deal>,
}

impl SalesRep {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            deals: Vec::new(),
        }
    }

    pub fn with_deal(mut self, deal: Deal) -> Self {
        self.deals.push(deal);
        self
    }

    pub fn has_deals(&self) -> bool {
        !self.deals.is_empty()
    }

    /// Decodes a list response body. An empty body or a JSON `null` is an
    /// empty list.
    pub fn list_from_json(body: &[u8]) -> SalesDashResult<Vec<SalesRep>> {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }
        let reps: Option<Vec<SalesRep>> = serde_json::from_slice(body)?;
        Ok(reps.unwrap_or_default())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Deal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Deal>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "rep-7"]"#).unwrap();
        assert_eq!(ids[0], RecordId::Number(7));
        assert_eq!(ids[1], RecordId::Text("rep-7".to_string()));
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "rep-7");
    }

    #[test]
    fn test_decode_rep_with_deals() {
        let json = r#"{
            "id": 1,
            "name": "Alice",
            "role": "Senior Sales Executive",
            "region": "North America",
            "deals": [
                {"id": 1, "client": "Acme", "status": "won", "value": 12000},
                {"id": 2, "client": "Globex", "status": "in progress"}
            ]
        }"#;

        let rep: SalesRep = serde_json::from_str(json).unwrap();
        assert_eq!(rep.name, "Alice");
        assert_eq!(rep.deals.len(), 2);
        assert_eq!(rep.deals[0].value, Some(12000.0));
        assert_eq!(rep.deals[1].value, None);
        assert!(rep.has_deals());
    }

    #[test]
    fn test_missing_or_null_deals_are_empty() {
        let rep: SalesRep =
            serde_json::from_str(r#"{"id": 2, "name": "Bob", "role": "Rep"}"#).unwrap();
        assert!(rep.deals.is_empty());

        let rep: SalesRep =
            serde_json::from_str(r#"{"id": 2, "name": "Bob", "role": "Rep", "deals": null}"#)
                .unwrap();
        assert!(!rep.has_deals());
    }

    #[test]
    fn test_list_from_json_null_and_empty_body() {
        assert!(SalesRep::list_from_json(b"null").unwrap().is_empty());
        assert!(SalesRep::list_from_json(b"").unwrap().is_empty());
        assert!(SalesRep::list_from_json(b"  \n").unwrap().is_empty());
        assert!(SalesRep::list_from_json(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_list_from_json_rejects_wrapped_object() {
        let err = SalesRep::list_from_json(br#"{"salesReps": []}"#).unwrap_err();
        assert_eq!(err.error_code(), "E1004");
    }

    #[test]
    fn test_builders() {
        let rep = SalesRep::new(3, "Carol", "Account Manager")
            .with_deal(Deal::new(10, "Initech", "lost", Some(500.0)));
        assert_eq!(rep.id, RecordId::Number(3));
        assert_eq!(rep.deals[0].client, "Initech");
    }
}
