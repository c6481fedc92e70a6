//! Post-match slot extraction. After a widget is selected, structured data
//! is pulled from the raw query text (ticket numbers, KB article ids, an
//! agent name in possessive phrasing) and returned as widget data. Purely
//! additive: extraction never changes which widget matched.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

use crate::pattern::WidgetType;

static TICKET_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btick-?(\d+)\b").expect("valid ticket key regex"));
static TICKET_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:#(\d+)\b|\bticket\s+#?(\d+)\b)").expect("valid ticket number regex")
});
static KB_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bkb[-\s]?(\d+)\b").expect("valid kb id regex"));
static AGENT_TICKETS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([a-z]+)'s\s+tickets?\b").expect("valid agent regex"));

/// Extract widget data for the matched widget type from the raw query.
/// Returns `None` when the query carries no extractable slots.
pub fn widget_data(widget_type: &WidgetType, raw_query: &str) -> Option<Value> {
    match widget_type.as_str() {
        "ticket-detail" => ticket_reference(raw_query),
        "knowledge-article" => kb_article_id(raw_query).map(|id| json!({ "id": id })),
        "ticket-list" => agent_list_title(raw_query).map(|title| json!({ "title": title })),
        _ => None,
    }
}

/// "TICK-001" style keys keep their zero padding; bare "#123" / "ticket 456"
/// forms yield just the number.
fn ticket_reference(raw_query: &str) -> Option<Value> {
    if let Some(caps) = TICKET_KEY_RE.captures(raw_query) {
        let digits = caps.get(1)?.as_str();
        return Some(json!({ "ticketId": format!("TICK-{digits}") }));
    }
    if let Some(caps) = TICKET_NUMBER_RE.captures(raw_query) {
        let number = caps.get(1).or_else(|| caps.get(2))?.as_str();
        return Some(json!({ "ticketNumber": number }));
    }
    None
}

/// KB references normalize to the canonical "KB-<n>" form.
fn kb_article_id(raw_query: &str) -> Option<String> {
    let caps = KB_ID_RE.captures(raw_query)?;
    Some(format!("KB-{}", caps.get(1)?.as_str()))
}

/// "Show me Sarah's tickets" → "Sarah's Tickets".
fn agent_list_title(raw_query: &str) -> Option<String> {
    let caps = AGENT_TICKETS_RE.captures(raw_query)?;
    let name = caps.get(1)?.as_str();
    let mut chars = name.chars();
    let first = chars.next()?;
    let capitalized: String = first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect();
    Some(format!("{capitalized}'s Tickets"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(id: &str) -> WidgetType {
        WidgetType::from(id)
    }

    #[test]
    fn extracts_ticket_key_with_padding() {
        let data = widget_data(&widget("ticket-detail"), "Show ticket TICK-001").unwrap();
        assert_eq!(data["ticketId"], "TICK-001");
    }

    #[test]
    fn extracts_bare_ticket_numbers() {
        let data = widget_data(&widget("ticket-detail"), "Show me ticket #123").unwrap();
        assert_eq!(data["ticketNumber"], "123");

        let data = widget_data(&widget("ticket-detail"), "ticket 456").unwrap();
        assert_eq!(data["ticketNumber"], "456");
    }

    #[test]
    fn extracts_kb_ids_in_every_spelling() {
        for (query, expected) in [
            ("Open KB-107", "KB-107"),
            ("open kb 456", "KB-456"),
            ("kb892", "KB-892"),
        ] {
            let data = widget_data(&widget("knowledge-article"), query).unwrap();
            assert_eq!(data["id"], expected, "query: {query}");
        }
    }

    #[test]
    fn extracts_possessive_agent_name_for_ticket_lists() {
        let data = widget_data(&widget("ticket-list"), "Show me Sarah's tickets").unwrap();
        assert_eq!(data["title"], "Sarah's Tickets");
    }

    #[test]
    fn queries_without_slots_yield_no_data() {
        assert!(widget_data(&widget("ticket-detail"), "open the most urgent issue").is_none());
        assert!(widget_data(&widget("executive-summary"), "Show ticket TICK-001").is_none());
    }
}
