//! Grouping stage: partition the flat candidate list by owning type.

use indexmap::IndexMap;

use crate::member::{CandidateMember, OwningTypeGroup};

/// Groups candidates by owning-type logical identity.
///
/// Members of one logical type join the same group even when they come from
/// separate physical declarations or separate units. Group order and member
/// order within a group follow discovery order, so output is reproducible.
/// A type with no candidates simply has no group.
pub fn group_by_owner(members: Vec<CandidateMember>) -> Vec<OwningTypeGroup> {
    let mut groups: IndexMap<String, OwningTypeGroup> = IndexMap::new();
    for member in members {
        groups
            .entry(member.owner.key())
            .or_insert_with(|| OwningTypeGroup {
                owner: member.owner.clone(),
                members: Vec::new(),
            })
            .members
            .push(member);
    }
    groups.into_values().collect()
}
