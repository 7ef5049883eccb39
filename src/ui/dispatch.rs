use crate::core::error::AddUserError;
use crate::core::state::AppState;
use crate::models::user::UserRecord;
use crate::ui::commands::Command;

/// What the event loop should do after a command was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the table
    Render,
    /// A user was added; redraw
    Added(UserRecord),
    /// The add-user form was rejected; nothing changed
    Rejected(AddUserError),
    /// Print one record in full
    Details(UserRecord),
    /// Start a fresh seed load
    Reload,
    /// Print a short message without redrawing
    Notice(String),
    Help,
    Quit,
}

/// Apply one command to the state
pub fn apply(state: &mut AppState, command: Command) -> Outcome {
    match command {
        Command::Search(query) => {
            state.view.set_query(query);
            Outcome::Render
        }
        Command::Clear => {
            state.view.clear_query();
            Outcome::Render
        }
        Command::Sort(key) => {
            state.view.set_sort_key(key);
            Outcome::Render
        }
        Command::Next | Command::Prev | Command::Page(_) if state.view.is_showing_all() => {
            Outcome::Notice("Showing all users; type 'paged' to page through them".to_string())
        }
        Command::Next => {
            state.view.next_page();
            Outcome::Render
        }
        Command::Prev => {
            state.view.prev_page();
            Outcome::Render
        }
        Command::Page(page) => {
            state.view.set_page(page);
            Outcome::Render
        }
        Command::All => {
            state.view.show_all();
            Outcome::Render
        }
        Command::Paged => {
            state.view.show_paged();
            Outcome::Render
        }
        Command::Add(candidate) => match state.view.submit_new_user(candidate) {
            Ok(record) => Outcome::Added(record),
            Err(e) => Outcome::Rejected(e),
        },
        Command::Show(id) => match state.view.find(id) {
            Some(record) => Outcome::Details(record.clone()),
            None => Outcome::Notice(format!("No user with id {id}")),
        },
        Command::Reload => {
            if state.is_loading() {
                return Outcome::Notice("Users are still loading".to_string());
            }
            state.begin_load();
            Outcome::Reload
        }
        Command::Help => Outcome::Help,
        Command::Quit => Outcome::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::models::user::NewUser;
    use crate::models::view::SortKey;

    fn ready_state() -> AppState {
        let config = Config::from_toml(
            "[source]\nendpoint = \"http://localhost:8000/users\"\n[view]\npage_size = 2\n",
        )
        .unwrap();
        let mut state = AppState::new(config);
        state.finish_load(Ok(vec![
            UserRecord::new(1, "John Smith", "johnuser", "john@example.com"),
            UserRecord::new(2, "Jane Wilson", "janeuser", "jane@example.com"),
            UserRecord::new(3, "Bob Smith", "bobuser", "bob@test.com"),
        ]));
        state
    }

    #[test]
    fn test_apply_search_and_clear() {
        let mut state = ready_state();

        assert_eq!(apply(&mut state, Command::Search("smith".into())), Outcome::Render);
        assert_eq!(state.view.snapshot().filtered_count, 2);

        apply(&mut state, Command::Clear);
        assert_eq!(state.view.snapshot().filtered_count, 3);
    }

    #[test]
    fn test_apply_sort_and_page() {
        let mut state = ready_state();
        apply(&mut state, Command::Sort(SortKey::Newest));
        apply(&mut state, Command::Next);

        let snapshot = state.view.snapshot();
        assert_eq!(snapshot.page, 2);
        assert_eq!(snapshot.rows[0].id, 1);
    }

    #[test]
    fn test_apply_paging_ignored_when_showing_all() {
        let mut state = ready_state();
        apply(&mut state, Command::All);

        let outcome = apply(&mut state, Command::Next);
        assert!(matches!(outcome, Outcome::Notice(_)));
        assert_eq!(state.view.current_page(), 1);

        apply(&mut state, Command::Paged);
        assert_eq!(apply(&mut state, Command::Next), Outcome::Render);
        assert_eq!(state.view.current_page(), 2);
    }

    #[test]
    fn test_apply_add() {
        let mut state = ready_state();
        let outcome = apply(
            &mut state,
            Command::Add(NewUser::new("Ann Lee", "annlee", "ann@lee.com")),
        );

        match outcome {
            Outcome::Added(record) => assert_eq!(record.id, 4),
            other => panic!("Expected Added, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_add_rejected() {
        let mut state = ready_state();
        let outcome = apply(&mut state, Command::Add(NewUser::new("Ann", "", "ann")));

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert_eq!(state.view.records().len(), 3);
    }

    #[test]
    fn test_apply_show_finds_records_off_the_current_page() {
        let mut state = ready_state();
        apply(&mut state, Command::Search("jane".into()));

        match apply(&mut state, Command::Show(3)) {
            Outcome::Details(record) => assert_eq!(record.name, "Bob Smith"),
            other => panic!("Expected Details, got {other:?}"),
        }
        assert_eq!(
            apply(&mut state, Command::Show(42)),
            Outcome::Notice("No user with id 42".to_string())
        );
    }

    #[test]
    fn test_apply_reload_only_when_idle() {
        let mut state = ready_state();

        assert_eq!(apply(&mut state, Command::Reload), Outcome::Reload);
        assert!(state.is_loading());
        assert!(matches!(apply(&mut state, Command::Reload), Outcome::Notice(_)));
    }
}
