use model::{filter::FilterSelection, training::TrainingSession};

/// Keeps sessions matching every constrained field. Input order is preserved.
pub fn filter(sessions: &[TrainingSession], selection: &FilterSelection) -> Vec<TrainingSession> {
    sessions
        .iter()
        .filter(|s| matches(s, selection))
        .cloned()
        .collect()
}

pub fn matches(session: &TrainingSession, selection: &FilterSelection) -> bool {
    selection.trainer.matches(&session.trainer)
        && selection.location.matches(&session.location)
        && selection.group.matches(&session.group)
}

/// Values offered by the trainer, pool and group selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub trainers: Vec<String>,
    pub locations: Vec<String>,
    pub groups: Vec<String>,
}

impl FilterOptions {
    /// Distinct values in first-seen order. Call it with the unfiltered batch
    /// so narrowing one selector keeps the others' options.
    pub fn collect(sessions: &[TrainingSession]) -> FilterOptions {
        let mut options = FilterOptions::default();
        for session in sessions {
            push_unique(&mut options.trainers, &session.trainer);
            push_unique(&mut options.locations, &session.location);
            push_unique(&mut options.groups, &session.group);
        }
        options
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use model::filter::FilterSelection;

    use super::*;
    use crate::fixtures::{august, session, SessionExt as _};

    fn ids(sessions: &[TrainingSession]) -> Vec<&str> {
        sessions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_no_constraints_is_identity() {
        let sessions = august();
        assert_eq!(filter(&sessions, &FilterSelection::default()), sessions);
    }

    #[test]
    fn test_all_sentinel_keeps_single_session() {
        let sessions = vec![session("2", "2024-08-25").personal()];
        let selection = FilterSelection::default()
            .trainer("all")
            .location("all")
            .group("all");
        assert_eq!(filter(&sessions, &selection), sessions);
    }

    #[test]
    fn test_single_field() {
        let sessions = august();
        let by_trainer = filter(&sessions, &FilterSelection::default().trainer("Anna Ivanova"));
        assert_eq!(ids(&by_trainer), vec!["1", "4"]);

        let by_pool = filter(&sessions, &FilterSelection::default().location("Pool 2"));
        assert_eq!(ids(&by_pool), vec!["2", "5"]);

        let by_group = filter(&sessions, &FilterSelection::default().group("Intermediate"));
        assert_eq!(ids(&by_group), vec!["3"]);
    }

    #[test]
    fn test_case_sensitive() {
        let sessions = august();
        assert!(filter(&sessions, &FilterSelection::default().trainer("anna ivanova")).is_empty());
    }

    #[test]
    fn test_conjunction() {
        let sessions = august();
        let selection = FilterSelection::default()
            .trainer("Sergey Petrov")
            .location("Pool 2")
            .group("Advanced");
        assert_eq!(ids(&filter(&sessions, &selection)), vec!["2", "5"]);

        let selection = FilterSelection::default()
            .trainer("Sergey Petrov")
            .location("Pool 1");
        assert!(filter(&sessions, &selection).is_empty());
    }

    #[test]
    fn test_composability_on_disjoint_fields() {
        let sessions = august();
        let trainers = ["all", "Anna Ivanova", "Sergey Petrov", "Maria Kozlova", "Nobody"];
        let locations = ["all", "Pool 1", "Pool 2"];
        for trainer in trainers {
            for location in locations {
                let first = FilterSelection::default().trainer(trainer);
                let second = FilterSelection::default().location(location);
                let both = FilterSelection::default().trainer(trainer).location(location);
                assert_eq!(
                    filter(&filter(&sessions, &first), &second),
                    filter(&sessions, &both)
                );
            }
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let sessions = august();
        let copy = sessions.clone();
        let _ = filter(&sessions, &FilterSelection::default().group("Advanced"));
        assert_eq!(sessions, copy);
    }

    #[test]
    fn test_options_from_unfiltered_list() {
        let sessions = august();
        let options = FilterOptions::collect(&sessions);
        assert_eq!(
            options.trainers,
            vec!["Anna Ivanova", "Sergey Petrov", "Maria Kozlova"]
        );
        assert_eq!(options.locations, vec!["Pool 1", "Pool 2"]);
        assert_eq!(options.groups, vec!["Beginners", "Advanced", "Intermediate"]);
        assert_eq!(FilterOptions::collect(&[]), FilterOptions::default());
    }
}
