// GENERATED FILE - DO NOT EDIT
// Generator: tools/id-gen

//! Generated soundbank ID tables, one module per revision.

pub mod v1;
pub mod v2;
pub mod v3;

pub use v3 as current;

use crate::snapshot::Snapshot;

/// Every generated snapshot, oldest first.
pub static SNAPSHOTS: &[&Snapshot] = &[&v1::SNAPSHOT, &v2::SNAPSHOT, &v3::SNAPSHOT];

/// The newest generated snapshot.
pub static LATEST: &Snapshot = &v3::SNAPSHOT;
