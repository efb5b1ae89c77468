use classdelta_core::diff::Diff;
use classdelta_core::model::{AccessFlags, ClassInfo};

/// A public class with version 52 and the given superclass
#[allow(dead_code)]
pub fn public_class(name: &str) -> classdelta_core::model::class::ClassInfoBuilder {
    ClassInfo::builder(name)
        .access(AccessFlags::PUBLIC | AccessFlags::SYNCHRONIZED)
        .version(52)
}

/// Message keys of a diff list, in order
#[allow(dead_code)]
pub fn keys(diffs: &[Diff]) -> Vec<String> {
    diffs.iter().map(|d| d.message_key().to_string()).collect()
}

/// Rendered arguments of one diff
#[allow(dead_code)]
pub fn args(diff: &Diff) -> Vec<String> {
    diff.args().iter().map(|a| a.to_string()).collect()
}
