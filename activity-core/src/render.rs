//! List markup production. All interpolated values pass through
//! [`escape_html`]; the stylesheet hooks mirror the page this frontend was
//! written against.

use crate::dto::Activity;
use chrono::DateTime;

/// Rendered instead of an empty container when the list has no records.
pub const EMPTY_PLACEHOLDER: &str = r#"<p class="text-gray-500">No activities found.</p>"#;

/// Escape a value for interpolation into markup, in both text and attribute
/// positions. Applied to every server-supplied string, no exceptions.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Display form for a server timestamp. Falls back to the raw value when it
/// is not RFC 3339.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn status_badge(status: &str) -> &'static str {
    if status == "active" {
        "success"
    } else {
        "secondary"
    }
}

/// One list block. Edit/Delete buttons carry `data-action`/`data-id` for the
/// controller's delegated click listener instead of inline handlers.
pub fn activity_block(activity: &Activity) -> String {
    let description = activity.description.as_deref().unwrap_or("");
    format!(
        r#"<div class="activity-item border rounded p-4 mb-4 hover:shadow-lg transition">
    <div class="flex justify-between items-start">
        <div class="flex-1">
            <h3 class="font-bold text-lg">{name}</h3>
            <p class="text-gray-600">{description}</p>
            <div class="mt-2 flex gap-2">
                <span class="badge badge-primary">{activity_type}</span>
                <span class="badge badge-{badge}">{status}</span>
            </div>
        </div>
        <div class="flex gap-2">
            <button data-action="edit" data-id="{id}" class="btn btn-sm btn-info">Edit</button>
            <button data-action="delete" data-id="{id}" class="btn btn-sm btn-danger">Delete</button>
        </div>
    </div>
    <div class="text-xs text-gray-400 mt-2">Created: {created}</div>
</div>
"#,
        name = escape_html(&activity.name),
        description = escape_html(description),
        activity_type = escape_html(&activity.activity_type),
        badge = status_badge(&activity.status),
        status = escape_html(&activity.status),
        id = activity.id,
        created = escape_html(&format_timestamp(&activity.created_at)),
    )
}

/// The whole list, in server order. The client imposes no ordering of its
/// own.
pub fn activity_list(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    activities.iter().map(activity_block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, status: &str) -> Activity {
        Activity {
            id: 42,
            name: name.to_string(),
            description: Some("desc".to_string()),
            activity_type: "general".to_string(),
            status: status.to_string(),
            created_at: "2025-02-10T14:30:00Z".to_string(),
            ..Activity::default()
        }
    }

    #[test]
    fn markup_never_carries_unescaped_input() {
        let hostile = Activity {
            id: 1,
            name: "<script>alert('x')</script>".to_string(),
            description: Some("a & b < c".to_string()),
            activity_type: "\"quoted\"".to_string(),
            status: "<active>".to_string(),
            ..Activity::default()
        };

        let html = activity_block(&hostile);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b &lt; c"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("badge-secondary\">&lt;active&gt;"));
    }

    #[test]
    fn empty_list_renders_the_placeholder_only() {
        let html = activity_list(&[]);
        assert_eq!(html, EMPTY_PLACEHOLDER);
        assert!(!html.contains("activity-item"));
    }

    #[test]
    fn active_status_gets_the_success_badge() {
        let html = activity_block(&activity("Run", "active"));
        assert!(html.contains("badge-success"));

        let html = activity_block(&activity("Run", "paused"));
        assert!(html.contains("badge-secondary"));
    }

    #[test]
    fn buttons_carry_the_record_id() {
        let html = activity_block(&activity("Run", "active"));
        assert!(html.contains(r#"data-action="edit" data-id="42""#));
        assert!(html.contains(r#"data-action="delete" data-id="42""#));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn timestamps_format_when_parseable_and_pass_through_otherwise() {
        assert_eq!(format_timestamp("2025-02-10T14:30:00Z"), "2025-02-10 14:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn list_keeps_server_order() {
        let list = [activity("b", "active"), activity("a", "active")];
        let html = activity_list(&list);
        let b = html.find(">b<").expect("b rendered");
        let a = html.find(">a<").expect("a rendered");
        assert!(b < a);
    }
}
