use proptest::prelude::*;
use std::collections::HashSet;
use tempfile::TempDir;
use thub_domain::{Candidate, CandidateName, Email, Phone, Roster, Tag};
use thub_persistence::{Encoding, RosterStorage};

type CandidateEntry = (String, String, String, Vec<String>);

fn candidate_entries() -> impl Strategy<Value = Vec<CandidateEntry>> {
    proptest::collection::vec(
        (
            "[A-Za-z][A-Za-z0-9]{0,11}( [A-Za-z0-9]{1,11}){0,2}",
            "[0-9]{3,12}",
            "[a-z0-9]{1,10}@[a-z0-9]{1,10}\\.[a-z]{2,4}",
            proptest::collection::vec("[A-Za-z0-9]{1,8}", 0..3),
        ),
        0..12,
    )
}

fn build_roster(entries: Vec<CandidateEntry>) -> Roster {
    let mut seen = HashSet::new();
    let mut roster = Roster::new();

    for (name, phone, email, tags) in entries {
        if !seen.insert(name.clone()) {
            continue;
        }
        let candidate = Candidate::new(
            CandidateName::try_from(name).expect("generated name is valid"),
            Phone::try_from(phone).expect("generated phone is valid"),
            Email::try_from(email).expect("generated email is valid"),
            tags.into_iter()
                .map(|t| Tag::try_from(t).expect("generated tag is valid"))
                .collect(),
        );
        roster.add(candidate).expect("names were deduplicated");
    }

    roster
}

proptest! {
    #[test]
    fn roundtrip_arbitrary_valid_rosters(entries in candidate_entries()) {
        let roster = build_roster(entries);
        let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();

        for encoding in [Encoding::Pretty, Encoding::Compact] {
            let temp = TempDir::new().unwrap();
            let storage = RosterStorage::builder()
                .file_path(temp.path().join("roster.json"))
                .encoding(encoding)
                .build()
                .unwrap();

            let loaded = rt.block_on(async {
                storage.save(&roster).await?;
                storage.load().await
            }).unwrap();

            prop_assert_eq!(loaded.as_ref(), Some(&roster));
        }
    }
}
