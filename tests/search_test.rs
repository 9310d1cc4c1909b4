use refactor_kata::{found_people, found_people_api, CANDIDATES};

#[test]
fn test_first_matching_candidate_is_returned() {
    assert_eq!(found_people(&["Beak", "Don", "Emily"]), "Don");
    assert_eq!(found_people_api(&["Beak", "Don", "Emily"]), "Don");
}

#[test]
fn test_sentinel_when_nothing_matches() {
    assert_eq!(found_people(&["Beak", "Emily"]), "");
    assert_eq!(found_people_api(&["Beak", "Emily"]), "");
}

#[test]
fn test_earliest_position_in_roster_wins() {
    // "Kent" sits after "Don" in the candidate list but earlier in the
    // roster, so it wins.
    assert_eq!(found_people(&["Kent", "Don", "Emily"]), "Kent");
    assert_eq!(found_people_api(&["Kent", "Don", "Emily"]), "Kent");
}

#[test]
fn test_empty_roster_returns_sentinel() {
    let empty: [&str; 0] = [];
    assert_eq!(found_people(&empty), "");
    assert_eq!(found_people_api(&empty), "");
}

#[test]
fn test_manual_scan_and_api_search_agree() {
    let rosters: Vec<Vec<&str>> = vec![
        vec!["Beak", "Don", "Emily"],
        vec!["Beak", "Emily"],
        vec!["Kent", "Don", "Emily"],
        vec!["John"],
        vec!["don", "KENT"], // matching is case-sensitive
        vec![],
    ];

    for roster in &rosters {
        assert_eq!(
            found_people(roster),
            found_people_api(roster),
            "implementations disagree on {:?}",
            roster
        );
    }
}

#[test]
fn test_candidates_never_contain_the_sentinel() {
    assert!(CANDIDATES.iter().all(|candidate| !candidate.is_empty()));
}

#[test]
fn test_owned_strings_are_accepted() {
    let roster = vec!["Beak".to_string(), "John".to_string()];
    assert_eq!(found_people(&roster), "John");
    assert_eq!(found_people_api(&roster), "John");
}
