//! Result Grouping
//!
//! Groups declared results by event for the dashboard results grid.

use crate::models::EventResult;

/// Results sharing one `(event_name, event_type)` signature, podium
/// entries sorted ascending by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub event_name: String,
    pub event_type: String,
    pub entries: Vec<EventResult>,
}

/// Group results by event signature in first-seen order.
///
/// Recomputed on every render; nothing is cached between refreshes.
pub fn group_results(results: &[EventResult]) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();
    for result in results {
        let existing = groups
            .iter_mut()
            .find(|g| g.event_name == result.event_name && g.event_type == result.event_type);
        match existing {
            Some(group) => group.entries.push(result.clone()),
            None => groups.push(ResultGroup {
                event_name: result.event_name.clone(),
                event_type: result.event_type.clone(),
                entries: vec![result.clone()],
            }),
        }
    }
    for group in &mut groups {
        group.entries.sort_by_key(|entry| entry.position);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventResult;

    fn make_result(id: u32, event: &str, event_type: &str, position: u32) -> EventResult {
        EventResult {
            id,
            event_name: event.to_string(),
            event_type: event_type.to_string(),
            department_id: id,
            department_name: format!("Dept {}", id),
            position,
            points_awarded: 10,
        }
    }

    #[test]
    fn test_groups_by_event_signature() {
        let results = vec![
            make_result(1, "100m Sprint", "mens", 2),
            make_result(2, "100m Sprint", "womens", 1),
            make_result(3, "100m Sprint", "mens", 1),
            make_result(4, "Relay", "team", 1),
        ];

        let groups = group_results(&results);

        // First-seen order: mens sprint, womens sprint, relay
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].event_name, "100m Sprint");
        assert_eq!(groups[0].event_type, "mens");
        assert_eq!(groups[1].event_type, "womens");
        assert_eq!(groups[2].event_name, "Relay");

        // Same name, different type stays separate
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].entries.len(), 1);
    }

    #[test]
    fn test_entries_sorted_by_position() {
        let results = vec![
            make_result(1, "Chess", "individual", 3),
            make_result(2, "Chess", "individual", 1),
            make_result(3, "Chess", "individual", 2),
        ];

        let groups = group_results(&results);

        assert_eq!(groups.len(), 1);
        let positions: Vec<u32> = groups[0].entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_results(&[]).is_empty());
    }
}
