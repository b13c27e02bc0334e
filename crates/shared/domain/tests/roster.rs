use thub_domain::{Candidate, CandidateName, DomainError, DomainErrorExt, Email, Phone, Roster, Tag};

fn candidate(name: &str, phone: &str, email: &str, tags: &[&str]) -> Candidate {
    Candidate::new(
        CandidateName::try_from(name).expect("valid name"),
        Phone::try_from(phone).expect("valid phone"),
        Email::try_from(email).expect("valid email"),
        tags.iter().map(|t| Tag::try_from(*t).expect("valid tag")).collect(),
    )
}

#[test]
fn roster_holds_distinct_candidates() {
    let mut roster = Roster::new();
    roster.add(candidate("Alex Yeoh", "87438807", "alexyeoh@example.com", &["backend"])).unwrap();
    roster.add(candidate("Bernice Yu", "99272758", "berniceyu@example.com", &[])).unwrap();

    assert_eq!(roster.len(), 2);
    assert!(!roster.is_empty());
    assert!(roster.contains(&candidate("Alex Yeoh", "00000000", "other@example.com", &[])));
}

#[test]
fn duplicate_rejection_names_the_candidate() {
    let mut roster = Roster::new();
    roster.add(candidate("Alex Yeoh", "87438807", "alexyeoh@example.com", &[])).unwrap();

    let err = roster
        .add(candidate("Alex Yeoh", "99272758", "alex@example.com", &[]))
        .unwrap_err();
    assert!(format!("{err}").contains("Alex Yeoh"));
}

#[test]
fn validation_errors_accept_extra_context() {
    let result: Result<CandidateName, DomainError> = CandidateName::try_from("$$$");
    let err = result.map(|_| ()).context("importing row 7").unwrap_err();

    let rendered = format!("{err}");
    assert!(rendered.contains("importing row 7"), "unexpected display: {rendered}");
}

#[test]
fn cloned_roster_is_an_independent_snapshot() {
    let mut original = Roster::new();
    original.add(candidate("Alex Yeoh", "87438807", "alexyeoh@example.com", &[])).unwrap();

    let snapshot = original.clone();
    original.add(candidate("Bernice Yu", "99272758", "berniceyu@example.com", &[])).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(original.len(), 2);
}
