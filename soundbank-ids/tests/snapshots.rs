//! Properties of the committed soundbank revisions

use std::collections::HashSet;

use soundbank_ids::generated::{v1, v2, v3};
use soundbank_ids::{Category, SnapshotDiff, SymbolError, latest, short_id, snapshot, snapshots};

/// Identifiers whose ID was hashed from a display name with spaces
const FROM_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("_2D_SFX", "2D SFX"),
    ("_3D_MUSIC", "3D Music"),
    ("_3D_SFX", "3D SFX"),
    ("MASTER_BINAURAL", "Master Binaural"),
];

#[test]
fn every_symbol_is_unique_within_its_category() {
    for snapshot in snapshots() {
        let mut seen = HashSet::new();
        for entry in snapshot.entries() {
            assert!(
                seen.insert((entry.category, entry.group, entry.name)),
                "revision {}: {} listed twice",
                snapshot.revision,
                entry
            );
            assert_eq!(
                snapshot.lookup(entry.category, &entry.qualified_name()),
                Ok(entry.id),
                "revision {}: {}",
                snapshot.revision,
                entry
            );
        }
    }
}

#[test]
fn lookups_are_idempotent() {
    let rev3 = snapshot(3).unwrap();
    let first = rev3.lookup(Category::Event, "PLAY_SHIPHIT").unwrap();
    for _ in 0..3 {
        assert_eq!(rev3.lookup(Category::Event, "PLAY_SHIPHIT"), Ok(first));
    }
}

#[test]
fn stable_ids_across_revisions() {
    for snapshot in snapshots() {
        assert_eq!(
            snapshot.lookup(Category::Event, "PLAY_BIRDATTACK"),
            Ok(2435460859)
        );
        assert_eq!(snapshot.lookup(Category::Bank, "INIT"), Ok(1355168291));
        assert_eq!(
            snapshot.state("WAVE_STATE", "PEACE1"),
            Ok((108563492, 1350254358))
        );
    }

    assert_eq!(v1::EVENTS::PLAY_BIRDATTACK, v3::EVENTS::PLAY_BIRDATTACK);
    assert_eq!(v2::BUSSES::_2D_SFX, v3::BUSSES::_2D_SFX);
}

#[test]
fn renamed_event_changes_between_revisions() {
    let rev1 = snapshot(1).unwrap();
    let rev3 = snapshot(3).unwrap();

    assert_eq!(rev1.lookup(Category::Event, "PLAY_BIRDTARGET"), Ok(1602214372));
    assert_eq!(v1::EVENTS::PLAY_BIRDTARGET, 1602214372);

    assert!(!rev3.contains(Category::Event, "PLAY_BIRDTARGET"));
    assert_eq!(
        rev3.lookup(Category::Event, "PLAY_BIRDTARGET_DEPRECATED"),
        Ok(4054685192)
    );
    assert_eq!(v3::EVENTS::PLAY_BIRDTARGET_DEPRECATED, 4054685192);
}

#[test]
fn event_counts() {
    assert_eq!(snapshot(1).unwrap().count(Category::Event), 20);
    assert_eq!(snapshot(2).unwrap().count(Category::Event), 22);
    assert_eq!(snapshot(3).unwrap().count(Category::Event), 24);
}

#[test]
fn unknown_symbol_names_revision() {
    let err = snapshot(1)
        .unwrap()
        .lookup(Category::Event, "PLAY_DAMAGE")
        .unwrap_err();

    assert_eq!(
        err,
        SymbolError::UnknownSymbol {
            category: Category::Event,
            name: "PLAY_DAMAGE".to_string(),
            revision: 1,
        }
    );
    assert!(err.to_string().contains("PLAY_DAMAGE"));
}

#[test]
fn enumeration_follows_generated_order() {
    let groups: Vec<_> = latest()
        .enumerate(Category::StateGroup)
        .map(|e| e.name)
        .collect();
    assert_eq!(groups, vec!["MENU_STATE", "WAVE_STATE", "WAVE_TYPE"]);

    let menu: Vec<_> = latest()
        .enumerate(Category::StateValue)
        .take(3)
        .map(|e| e.qualified_name())
        .collect();
    assert_eq!(menu, vec!["MENU_STATE.MAIN", "MENU_STATE.NONE", "MENU_STATE.PAUSED"]);

    let busses: Vec<_> = latest().enumerate(Category::Bus).map(|e| e.name).collect();
    assert_eq!(
        busses,
        vec!["_2D_SFX", "_3D_MUSIC", "_3D_SFX", "MASTER_BINAURAL", "UI"]
    );
}

#[test]
fn ids_hash_from_names() {
    for snapshot in snapshots() {
        for entry in snapshot.entries() {
            let display = FROM_DISPLAY_NAMES
                .iter()
                .find(|(identifier, _)| *identifier == entry.name)
                .map_or(entry.name, |(_, display)| *display);
            assert_eq!(
                short_id(display),
                entry.id,
                "revision {}: {}",
                snapshot.revision,
                entry
            );
        }
    }
}

#[test]
fn same_state_name_in_different_groups_shares_id() {
    assert_eq!(
        v3::STATES::MENU_STATE::STATE::NONE,
        v3::STATES::WAVE_TYPE::STATE::NONE
    );

    let rev3 = snapshot(3).unwrap();
    let (menu, none) = rev3.state("MENU_STATE", "NONE").unwrap();
    assert_eq!(menu, 3941853002);
    assert_eq!(none, 748895195);
    assert_ne!(rev3.state("MENU_STATE", "NONE"), rev3.state("WAVE_TYPE", "NONE"));
}

#[test]
fn diff_first_to_latest() {
    let diff = SnapshotDiff::between(snapshot(1).unwrap(), snapshot(3).unwrap());

    let removed: Vec<_> = diff.removed.iter().map(|e| e.qualified_name()).collect();
    assert_eq!(removed, vec!["PLAY_BIRDTARGET"]);

    let added: HashSet<_> = diff.added.iter().map(|e| (e.category, e.qualified_name())).collect();
    assert_eq!(added.len(), 12);
    assert!(added.contains(&(Category::Event, "PLAY_BIRDTARGET_DEPRECATED".to_string())));
    assert!(added.contains(&(Category::StateGroup, "MENU_STATE".to_string())));
    assert!(added.contains(&(Category::StateValue, "MENU_STATE.PAUSED".to_string())));
    assert!(added.contains(&(Category::Bus, "UI".to_string())));

    assert!(diff.changed.is_empty());
    assert_eq!(diff.unchanged, 48);
}

#[test]
fn diff_of_additive_revision() {
    let diff = SnapshotDiff::between(snapshot(1).unwrap(), snapshot(2).unwrap());

    assert!(diff.removed.is_empty());
    assert_eq!(diff.added.len(), 3);
    assert_eq!(diff.unchanged, 49);
}

#[test]
fn fingerprints_distinguish_revisions() {
    let fingerprints: HashSet<u64> = snapshots().iter().map(|s| s.fingerprint()).collect();
    assert_eq!(fingerprints.len(), snapshots().len());

    let rev1 = snapshot(1).unwrap();
    assert!(rev1.check_fingerprint(rev1.fingerprint()).is_ok());
    assert!(matches!(
        rev1.check_fingerprint(snapshot(2).unwrap().fingerprint()),
        Err(SymbolError::FingerprintMismatch { revision: 1, .. })
    ));
}

#[test]
fn snapshot_metadata() {
    let rev2 = snapshot(2).unwrap();
    assert_eq!(rev2.label, "bird death and wave progress");
    assert_eq!(rev2.source, "soundbanks/v2/Wwise_IDs.h");
    assert_eq!(rev2.entries().count(), 52);
}

#[test]
fn diff_serializes_for_tooling() {
    let diff = SnapshotDiff::between(snapshot(2).unwrap(), snapshot(3).unwrap());
    let value = serde_json::to_value(&diff).unwrap();

    assert_eq!(value["from"], 2);
    assert_eq!(value["to"], 3);
    assert_eq!(value["removed"][0]["category"], "event");
    assert_eq!(value["removed"][0]["name"], "PLAY_BIRDTARGET");
    assert_eq!(value["removed"][0]["group"], serde_json::Value::Null);
}
