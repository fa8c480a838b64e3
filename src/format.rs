//! Display Formatting
//!
//! Label tables and path resolution shared by the dashboard and the
//! admin panel.

/// Prefix prepended to relative `image_path` values
pub const STATIC_PREFIX: &str = "/static/";

/// Plain event-type label: "mens" -> "Men's" etc.
///
/// Unknown values fall back to the raw string unchanged.
pub fn event_type_label(raw: &str) -> String {
    match raw.to_ascii_lowercase().as_str() {
        "mens" => "Men's".to_string(),
        "womens" => "Women's".to_string(),
        "team" => "Team".to_string(),
        "individual" => "Individual".to_string(),
        _ => raw.to_string(),
    }
}

/// Event-type label with emoji prefix, used on result cards and the
/// admin results table.
pub fn event_type_label_emoji(raw: &str) -> String {
    match raw.to_ascii_lowercase().as_str() {
        "mens" => "👨 Men's".to_string(),
        "womens" => "👩 Women's".to_string(),
        "team" => "👥 Team".to_string(),
        "individual" => "👤 Individual".to_string(),
        _ => raw.to_string(),
    }
}

/// Medal label for a podium position; positions outside 1-3 get none.
pub fn position_label(position: u32) -> &'static str {
    match position {
        1 => "🥇 1st Place",
        2 => "🥈 2nd Place",
        3 => "🥉 3rd Place",
        _ => "",
    }
}

/// Short medal label for the admin results table.
pub fn position_label_short(position: u32) -> &'static str {
    match position {
        1 => "🥇 1st",
        2 => "🥈 2nd",
        3 => "🥉 3rd",
        _ => "",
    }
}

/// CSS class for a podium position row.
pub fn position_class(position: u32) -> &'static str {
    match position {
        1 => "first",
        2 => "second",
        3 => "third",
        _ => "",
    }
}

/// CSS class for a department's rank badge.
pub fn rank_badge_class(rank: u32) -> &'static str {
    match rank {
        1 => "gold",
        2 => "silver",
        3 => "bronze",
        _ => "default",
    }
}

/// Resolve an image path against the static-asset prefix.
///
/// Absolute URLs are passed through unchanged.
pub fn image_src(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", STATIC_PREFIX, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        assert_eq!(event_type_label("mens"), "Men's");
        assert_eq!(event_type_label("womens"), "Women's");
        assert_eq!(event_type_label("team"), "Team");
        assert_eq!(event_type_label("individual"), "Individual");
        // Case-insensitive match
        assert_eq!(event_type_label("MENS"), "Men's");
        // Unknown values pass through unchanged
        assert_eq!(event_type_label("mixed"), "mixed");
        assert_eq!(event_type_label(""), "");
    }

    #[test]
    fn test_event_type_labels_emoji() {
        assert_eq!(event_type_label_emoji("mens"), "👨 Men's");
        assert_eq!(event_type_label_emoji("individual"), "👤 Individual");
        assert_eq!(event_type_label_emoji("relay"), "relay");
        assert_eq!(event_type_label_emoji(""), "");
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(position_label(1), "🥇 1st Place");
        assert_eq!(position_label(2), "🥈 2nd Place");
        assert_eq!(position_label(3), "🥉 3rd Place");
        assert_eq!(position_label(4), "");
        assert_eq!(position_label(0), "");

        assert_eq!(position_label_short(1), "🥇 1st");
        assert_eq!(position_label_short(7), "");
    }

    #[test]
    fn test_position_class() {
        assert_eq!(position_class(1), "first");
        assert_eq!(position_class(2), "second");
        assert_eq!(position_class(3), "third");
        assert_eq!(position_class(4), "");
    }

    #[test]
    fn test_rank_badge_class() {
        assert_eq!(rank_badge_class(1), "gold");
        assert_eq!(rank_badge_class(2), "silver");
        assert_eq!(rank_badge_class(3), "bronze");
        assert_eq!(rank_badge_class(4), "default");
        assert_eq!(rank_badge_class(0), "default");
    }

    #[test]
    fn test_image_src() {
        assert_eq!(image_src("uploads/pic.jpg"), "/static/uploads/pic.jpg");
        assert_eq!(
            image_src("https://cdn.example.com/pic.jpg"),
            "https://cdn.example.com/pic.jpg"
        );
        assert_eq!(image_src("http://host/pic.jpg"), "http://host/pic.jpg");
    }
}
