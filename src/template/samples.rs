//! Sample event data for manual testing and the bundled demo template

use std::collections::HashMap;

/// Demo event-announcement template shipped with the crate.
pub const EVENT_ANNOUNCEMENT_HTML: &str =
    include_str!("../../templates/event_announcement.html");

/// Sixteen example key/value pairs covering every placeholder in
/// [`EVENT_ANNOUNCEMENT_HTML`]. Demo data only, not part of the engine
/// contract.
pub fn sample_event_values() -> HashMap<String, String> {
    let pairs = [
        ("event_name", "Shipday 2026"),
        (
            "event_description",
            "A one-day single-track conference on shipping reliable \
             software: postmortems, release engineering war stories, and \
             hands-on workshops with the people who run production at scale.",
        ),
        ("event_date", "Saturday, October 17, 2026, 9:00 AM - 6:00 PM"),
        ("event_location", "Harborview Conference Center, 400 Pier Ave, Seattle, WA"),
        ("speaker_name", "Priya Raman"),
        ("speaker_title", "Principal Engineer"),
        ("speaker_company", "Northwind Systems"),
        (
            "speaker_bio",
            "Priya has spent a decade running incident response for one of \
             the busiest payment platforms in North America and writes the \
             widely-read Paging All Engineers newsletter.",
        ),
        ("cta_text", "Reserve your seat"),
        ("cta_url", "https://shipday.example.com/register?src=email"),
        ("contact_email", "hello@shipday.example.com"),
        ("contact_phone", "+1 (206) 555-0173"),
        ("unsubscribe_url", "https://shipday.example.com/unsubscribe?list=announce"),
        ("headline", "One day. Every lesson production ever taught us."),
        (
            "intro_copy",
            "You know that feeling when a deploy goes out and nothing \
             breaks? We built an entire conference about getting there on \
             purpose instead of by luck.",
        ),
        (
            "closing_copy",
            "Seats sold out eight weeks early last year, and this year's \
             venue is smaller. If any of this sounds like your week at \
             work, you belong in the room.",
        ),
    ];

    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
