use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Classification prefix marking a finalized sale lead.
pub const CONFIRMED_PREFIX: &str = "CONFIRMADO";

/// One call-detail record from the campaign view.
///
/// `site` and `subgroup` are not columns of the view: they are parsed out of
/// the raw `category` string once at load time so the report engine never has
/// to do substring matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub call_time: Option<NaiveDateTime>,
    pub site_id: String,
    pub site_name: String,
    pub agent_id: String,
    pub agent_name: String,
    pub wait_seconds: i64,
    pub duration_seconds: i64,
    pub phone_number: String,
    pub status: Option<String>,
    pub deduced_status: Option<String>,
    pub callback_status: Option<String>,
    pub callback_date: Option<NaiveDateTime>,
    pub category: String,
    pub classification: Option<String>,
    pub tags: Option<String>,
    pub site: Option<Site>,
    pub subgroup: Option<Subgroup>,
}

impl CallRecord {
    /// A call is qualified when it received any classification label.
    pub fn is_qualified(&self) -> bool {
        self.classification.is_some()
    }

    /// A call is confirmed when its classification marks a finalized sale.
    pub fn is_confirmed(&self) -> bool {
        self.classification
            .as_deref()
            .is_some_and(|c| c.starts_with(CONFIRMED_PREFIX))
    }
}

/// Physical sales location. The campaign runs at exactly two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Site {
    Nacoes,
    Morumbi,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::Nacoes, Site::Morumbi];

    pub fn display_name(&self) -> &str {
        match self {
            Site::Nacoes => "Toyota Nacoes",
            Site::Morumbi => "Toyota Morumbi",
        }
    }

    /// Case-insensitive match against a raw category string.
    pub fn parse(category: &str) -> Option<Site> {
        let upper = category.to_uppercase();
        Site::ALL
            .into_iter()
            .find(|site| upper.contains(&site.display_name().to_uppercase()))
    }
}

/// Secondary campaign split within a site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subgroup {
    Alpha,
    Omega,
}

impl Subgroup {
    pub const ALL: [Subgroup; 2] = [Subgroup::Alpha, Subgroup::Omega];

    pub fn token(&self) -> &str {
        match self {
            Subgroup::Alpha => "ALPHA",
            Subgroup::Omega => "OMEGA",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Subgroup::Alpha => "Alpha",
            Subgroup::Omega => "Omega",
        }
    }

    /// Case-insensitive token match against a raw category string.
    pub fn parse(category: &str) -> Option<Subgroup> {
        let upper = category.to_uppercase();
        Subgroup::ALL
            .into_iter()
            .find(|sg| upper.contains(sg.token()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, classification: Option<&str>) -> CallRecord {
        CallRecord {
            call_time: None,
            site_id: "1".to_string(),
            site_name: String::new(),
            agent_id: "100".to_string(),
            agent_name: "Ana".to_string(),
            wait_seconds: 0,
            duration_seconds: 0,
            phone_number: String::new(),
            status: None,
            deduced_status: None,
            callback_status: None,
            callback_date: None,
            category: category.to_string(),
            classification: classification.map(str::to_string),
            tags: None,
            site: Site::parse(category),
            subgroup: Subgroup::parse(category),
        }
    }

    #[test]
    fn parses_site_and_subgroup_from_category() {
        let rec = record("Toyota Nacoes ALPHA", Some("CONFIRMADO VENDA"));
        assert_eq!(rec.site, Some(Site::Nacoes));
        assert_eq!(rec.subgroup, Some(Subgroup::Alpha));
        assert!(rec.is_confirmed());
    }

    #[test]
    fn site_match_is_case_insensitive() {
        assert_eq!(Site::parse("toyota morumbi omega"), Some(Site::Morumbi));
        assert_eq!(Subgroup::parse("toyota morumbi omega"), Some(Subgroup::Omega));
    }

    #[test]
    fn unknown_category_parses_to_none() {
        let rec = record("Honda Centro", None);
        assert_eq!(rec.site, None);
        assert_eq!(rec.subgroup, None);
    }

    #[test]
    fn qualification_follows_classification_presence() {
        assert!(record("Toyota Nacoes", Some("AGENDADO")).is_qualified());
        assert!(!record("Toyota Nacoes", None).is_qualified());
        assert!(!record("Toyota Nacoes", Some("AGENDADO")).is_confirmed());
    }

    #[test]
    fn wire_format_uses_camel_case_and_enum_tokens() {
        let rec = record("Toyota Nacoes ALPHA", Some("CONFIRMADO VENDA"));
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["agentName"], "Ana");
        assert_eq!(json["site"], "NACOES");
        assert_eq!(json["subgroup"], "ALPHA");
        assert_eq!(json["classification"], "CONFIRMADO VENDA");
    }
}
