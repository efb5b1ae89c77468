//! Multiset reconciliation of two entity collections.
//!
//! Elements are first paired by fingerprint (content hash). Whatever is
//! left is paired by key (name, or member identity for methods and
//! constructors); such a pair is *modified*. The rest is removed (only in
//! `previous`) or added (only in `next`).
//!
//! Every element of `previous` ends in exactly one of unchanged, modified
//! or removed, and every element of `next` in exactly one of unchanged,
//! modified or added.

use std::collections::{HashMap, VecDeque};

use crate::model::{
    AnnotationInfo, ClassInfo, ConstructorInfo, Content, FieldInfo, InnerClassInfo, MethodInfo,
    PackageInfo,
};

/// Anything the reconciler can match: a key for the name fallback and a
/// fingerprint for identity.
pub trait Keyed {
    fn key(&self) -> &str;
    fn fingerprint(&self) -> &str;
}

macro_rules! keyed_by_content {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                fn key(&self) -> &str {
                    Content::name(self)
                }

                fn fingerprint(&self) -> &str {
                    self.content_hash()
                }
            }
        )*
    };
}

keyed_by_content!(
    AnnotationInfo,
    ClassInfo,
    ConstructorInfo,
    FieldInfo,
    InnerClassInfo,
    MethodInfo,
    PackageInfo,
);

/// Plain type names (interfaces, exceptions) are their own fingerprint.
impl Keyed for String {
    fn key(&self) -> &str {
        self
    }

    fn fingerprint(&self) -> &str {
        self
    }
}

/// Outcome of [`reconcile`]; every list keeps encounter order.
#[derive(Debug)]
pub struct Reconciliation<'a, E> {
    pub unchanged: Vec<(&'a E, &'a E)>,
    pub modified: Vec<(&'a E, &'a E)>,
    pub removed: Vec<&'a E>,
    pub added: Vec<&'a E>,
}

impl<E> Reconciliation<'_, E> {
    /// True when nothing was added, removed or modified.
    pub fn is_unchanged(&self) -> bool {
        self.modified.is_empty() && self.removed.is_empty() && self.added.is_empty()
    }
}

pub fn reconcile<'a, E: Keyed>(previous: &'a [E], next: &'a [E]) -> Reconciliation<'a, E> {
    let mut taken = vec![false; next.len()];
    let mut unchanged = Vec::new();

    let mut by_fingerprint: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (index, element) in next.iter().enumerate() {
        by_fingerprint
            .entry(element.fingerprint())
            .or_default()
            .push_back(index);
    }

    let mut pending = Vec::new();
    for element in previous {
        let hit = by_fingerprint
            .get_mut(element.fingerprint())
            .and_then(VecDeque::pop_front);
        match hit {
            Some(index) => {
                taken[index] = true;
                unchanged.push((element, &next[index]));
            }
            None => pending.push(element),
        }
    }

    let mut by_key: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (index, element) in next.iter().enumerate() {
        if !taken[index] {
            by_key.entry(element.key()).or_default().push_back(index);
        }
    }

    let mut modified = Vec::new();
    let mut removed = Vec::new();
    for element in pending {
        match by_key.get_mut(element.key()).and_then(VecDeque::pop_front) {
            Some(index) => {
                taken[index] = true;
                modified.push((element, &next[index]));
            }
            None => removed.push(element),
        }
    }

    let added = next
        .iter()
        .zip(taken)
        .filter(|(_, taken)| !taken)
        .map(|(element, _)| element)
        .collect();

    Reconciliation {
        unchanged,
        modified,
        removed,
        added,
    }
}
