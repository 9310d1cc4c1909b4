use std::collections::HashSet;

/// The fixed names the lookup recognizes. None of them is the empty string,
/// which keeps the `""` not-found sentinel unambiguous.
pub const CANDIDATES: [&str; 3] = ["Don", "John", "Kent"];

/// The before picture: a hand-rolled scan that checks every candidate with
/// its own branch and returns on the first hit.
pub fn found_people<S: AsRef<str>>(people: &[S]) -> String {
    for person in people {
        let person = person.as_ref();

        if person == "Don" {
            return "Don".to_string();
        }

        if person == "John" {
            return "John".to_string();
        }

        if person == "Kent" {
            return "Kent".to_string();
        }
    }

    String::new()
}

/// The after picture: one pass with `find` and a set-membership test.
/// Must agree with [`found_people`] on every input.
pub fn found_people_api<S: AsRef<str>>(people: &[S]) -> String {
    let candidates: HashSet<&str> = CANDIDATES.iter().copied().collect();

    people
        .iter()
        .map(|person| person.as_ref())
        .find(|person| candidates.contains(person))
        .map(str::to_string)
        .unwrap_or_default()
}
