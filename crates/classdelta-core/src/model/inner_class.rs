use super::access::AccessFlags;
use super::hash::{Content, HashCell};

/// An `InnerClasses` entry, or a class entry of a package.
#[derive(Debug, Clone)]
pub struct InnerClassInfo {
    name: String,
    access: AccessFlags,
    hash: HashCell,
}

impl InnerClassInfo {
    pub fn new(name: impl AsRef<str>, access: AccessFlags) -> Self {
        Self {
            name: name.as_ref().replace('/', "."),
            access,
            hash: HashCell::default(),
        }
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }
}

impl Content for InnerClassInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> String {
        format!("IC{{N={}#D={}}}", self.name, self.access.raw())
    }

    fn content_hash(&self) -> &str {
        self.hash.get_or_compute(|| self.content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_class_content() {
        let ic = InnerClassInfo::new(
            "com/acme/Outer$Inner",
            AccessFlags::PUBLIC | AccessFlags::STATIC,
        );
        assert_eq!(ic.name(), "com.acme.Outer$Inner");
        assert_eq!(ic.content(), "IC{N=com.acme.Outer$Inner#D=9}");
    }
}
