/*!
 * Rule Applier Integration Tests
 * Clean/preserve matrix and idempotence against the in-memory provider
 */

use std::path::Path;

use aclsweep::{
    apply, AccessEntry, AclEntry, Descriptor, MemoryAclProvider, PermissionSet, Right, Rights,
};
use pretty_assertions::assert_eq;

fn access_entry(principal: &str, right: Right) -> AccessEntry {
    AccessEntry {
        principal: principal.to_string(),
        rights: Rights::from(right),
        inheritance: Default::default(),
        propagation: Default::default(),
        kind: Default::default(),
    }
}

fn permission_set(clean_explicit: bool, preserve_inherited: bool) -> PermissionSet {
    PermissionSet {
        name: "managed".to_string(),
        protect_from_inheritance: true,
        preserve_inherited,
        clean_explicit,
        entries: vec![
            access_entry("svc_app", Right::Modify),
            access_entry("auditors", Right::Read),
        ],
    }
}

fn provider_with_existing_state(target: &Path) -> MemoryAclProvider {
    let provider = MemoryAclProvider::new();
    let mut desc = Descriptor::new();
    desc.add_entry(AclEntry::allow("stale_admin", Rights::from(Right::FullControl)));
    desc.add_inherited(AclEntry::allow("domain_users", Rights::from(Right::Read)));
    provider.seed(target, desc);
    provider
}

#[test]
fn test_clean_preserve_matrix() {
    let target = Path::new("/srv/share");

    // clean_explicit + preserve_inherited: explicit removed, inherited kept
    let provider = provider_with_existing_state(target);
    apply(&permission_set(true, true), target, &provider).unwrap();
    let desc = provider.descriptor(target).unwrap();
    assert_eq!(desc.inherited_entries().len(), 1);
    let explicit: Vec<String> = desc
        .explicit_entries()
        .into_iter()
        .map(|e| e.principal)
        .collect();
    assert_eq!(explicit, vec!["svc_app", "auditors"]);

    // clean_explicit without preserve: everything pre-existing removed
    let provider = provider_with_existing_state(target);
    apply(&permission_set(true, false), target, &provider).unwrap();
    let desc = provider.descriptor(target).unwrap();
    assert_eq!(desc.inherited_entries().len(), 0);
    assert_eq!(desc.explicit_entries().len(), 2);

    // No clean: pre-existing entries untouched in both preserve modes
    for preserve in [true, false] {
        let provider = provider_with_existing_state(target);
        apply(&permission_set(false, preserve), target, &provider).unwrap();
        let desc = provider.descriptor(target).unwrap();
        assert_eq!(desc.inherited_entries().len(), 1);
        assert_eq!(desc.explicit_entries().len(), 3);
    }
}

#[test]
fn test_idempotence_with_clean() {
    let target = Path::new("/srv/share");
    let provider = provider_with_existing_state(target);
    let set = permission_set(true, false);

    apply(&set, target, &provider).unwrap();
    let once = provider.descriptor(target).unwrap();

    apply(&set, target, &provider).unwrap();
    let twice = provider.descriptor(target).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.explicit_entries().len(), 2);
}

#[test]
fn test_repeated_apply_without_clean_accumulates() {
    // The documented exception: without clean_explicit, each run appends
    let target = Path::new("/srv/share");
    let provider = MemoryAclProvider::new();
    let set = permission_set(false, false);

    apply(&set, target, &provider).unwrap();
    apply(&set, target, &provider).unwrap();

    let desc = provider.descriptor(target).unwrap();
    assert_eq!(desc.explicit_entries().len(), 4);
}

#[test]
fn test_protection_follows_permission_set() {
    let target = Path::new("/srv/share");
    let provider = MemoryAclProvider::new();

    apply(&permission_set(false, true), target, &provider).unwrap();
    let desc = provider.descriptor(target).unwrap();
    assert!(desc.is_protected());
    assert!(desc.preserves_inherited());

    let mut open_set = permission_set(false, false);
    open_set.protect_from_inheritance = false;
    apply(&open_set, target, &provider).unwrap();
    let desc = provider.descriptor(target).unwrap();
    assert!(!desc.is_protected());
}
