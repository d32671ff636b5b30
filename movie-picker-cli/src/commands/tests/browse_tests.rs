use super::*;
use movie_picker_lib::{JoinPolicy, TitleRecord};

fn dataset() -> Dataset {
    let titles = vec![
        TitleRecord::new("1", "Old Drama", Some(1960), Some("['drama']".to_string()), None),
        TitleRecord::new("2", "New Comedy", Some(2018), Some("['comedy']".to_string()), None),
        TitleRecord::new(
            "3",
            "Mid Drama",
            Some(2004),
            Some("['drama', 'romance']".to_string()),
            None,
        ),
    ];
    Dataset::from_parts(titles, Vec::new(), JoinPolicy::default())
}

fn state() -> BrowseState {
    BrowseState::new(&dataset(), &Settings::default(), &SelectionArgs::default()).unwrap()
}

#[test]
fn test_parse_commands() {
    assert_eq!(
        BrowseCommand::parse("genre Science Fiction\n").unwrap(),
        BrowseCommand::Genre("Science Fiction".to_string())
    );
    assert_eq!(
        BrowseCommand::parse("g drama").unwrap(),
        BrowseCommand::Genre("drama".to_string())
    );
    assert_eq!(BrowseCommand::parse("from 1990").unwrap(), BrowseCommand::From(1990));
    assert_eq!(BrowseCommand::parse("TO 2001").unwrap(), BrowseCommand::To(2001));
    assert_eq!(
        BrowseCommand::parse("years 1980  1999").unwrap(),
        BrowseCommand::Years(1980, 1999)
    );
    assert_eq!(BrowseCommand::parse("").unwrap(), BrowseCommand::Show);
    assert_eq!(BrowseCommand::parse("q").unwrap(), BrowseCommand::Quit);
    assert_eq!(
        BrowseCommand::parse("genres").unwrap(),
        BrowseCommand::ListGenres
    );
    assert_eq!(BrowseCommand::parse("reset").unwrap(), BrowseCommand::Reset);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(BrowseCommand::parse("genre").is_err());
    assert!(BrowseCommand::parse("from soon").is_err());
    assert!(BrowseCommand::parse("years 1990").is_err());
    assert!(BrowseCommand::parse("years 1990 2000 2010").is_err());
    assert!(BrowseCommand::parse("dance").is_err());
}

#[test]
fn test_initial_state_defaults() {
    let state = state();
    assert_eq!(state.query.genre, "comedy");
    assert_eq!(state.query.years, YearRange::new(2000, 2018));
}

#[test]
fn test_apply_genre_change() {
    let mut state = state();
    assert!(state.apply(&BrowseCommand::Genre("Drama".to_string())).unwrap());
    assert_eq!(state.query.genre, "drama");
}

#[test]
fn test_apply_unknown_genre_keeps_selection() {
    let mut state = state();
    assert!(state.apply(&BrowseCommand::Genre("western".to_string())).is_err());
    assert_eq!(state.query.genre, "comedy");
}

#[test]
fn test_apply_year_changes_are_clamped() {
    let mut state = state();
    state.apply(&BrowseCommand::From(1900)).unwrap();
    assert_eq!(state.query.years, YearRange::new(1960, 2018));
    state.apply(&BrowseCommand::To(1990)).unwrap();
    assert_eq!(state.query.years, YearRange::new(1960, 1990));
    state.apply(&BrowseCommand::Years(2001, 2100)).unwrap();
    assert_eq!(state.query.years, YearRange::new(2001, 2018));
}

#[test]
fn test_apply_reset() {
    let mut state = state();
    state.apply(&BrowseCommand::Genre("romance".to_string())).unwrap();
    state.apply(&BrowseCommand::Years(1960, 1970)).unwrap();
    state.apply(&BrowseCommand::Reset).unwrap();
    assert_eq!(state.query.genre, "comedy");
    assert_eq!(state.query.years, YearRange::new(2000, 2018));
}

#[test]
fn test_non_selection_commands_do_not_redraw() {
    let mut state = state();
    assert!(!state.apply(&BrowseCommand::Help).unwrap());
    assert!(!state.apply(&BrowseCommand::ListGenres).unwrap());
}
