use super::annotation::AnnotationInfo;
use super::hash::{content_list, sort_children, Content, HashCell};
use super::inner_class::InnerClassInfo;

/// A package: its `package-info` annotations and its top-level classes.
#[derive(Debug, Clone)]
pub struct PackageInfo {
    name: String,
    annotations: Vec<AnnotationInfo>,
    classes: Vec<InnerClassInfo>,
    hash: HashCell,
}

impl PackageInfo {
    pub fn builder(name: impl AsRef<str>) -> PackageInfoBuilder {
        PackageInfoBuilder {
            name: name.as_ref().replace('/', "."),
            annotations: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// A package with no annotations and no classes.
    pub fn empty(name: impl AsRef<str>) -> Self {
        Self::builder(name).build()
    }

    pub fn annotations(&self) -> &[AnnotationInfo] {
        &self.annotations
    }

    pub fn classes(&self) -> &[InnerClassInfo] {
        &self.classes
    }
}

impl Content for PackageInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> String {
        let mut out = format!("P{{N={}", self.name);
        if !self.annotations.is_empty() {
            out.push_str(&format!("#A={}", content_list(&self.annotations)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!("#C={}", content_list(&self.classes)));
        }
        out.push('}');
        out
    }

    fn content_hash(&self) -> &str {
        self.hash.get_or_compute(|| self.content())
    }
}

#[derive(Debug, Clone)]
pub struct PackageInfoBuilder {
    name: String,
    annotations: Vec<AnnotationInfo>,
    classes: Vec<InnerClassInfo>,
}

impl PackageInfoBuilder {
    pub fn annotation(mut self, annotation: AnnotationInfo) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn annotations(mut self, annotations: impl IntoIterator<Item = AnnotationInfo>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub fn class(mut self, class: InnerClassInfo) -> Self {
        self.classes.push(class);
        self
    }

    pub fn build(mut self) -> PackageInfo {
        sort_children(&mut self.annotations);
        sort_children(&mut self.classes);
        PackageInfo {
            name: self.name,
            annotations: self.annotations,
            classes: self.classes,
            hash: HashCell::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccessFlags;

    #[test]
    fn test_package_content() {
        let pkg = PackageInfo::builder("com.acme")
            .class(InnerClassInfo::new("com.acme.B", AccessFlags::PUBLIC))
            .class(InnerClassInfo::new("com.acme.A", AccessFlags::empty()))
            .annotation(AnnotationInfo::builder("javax.annotation.ParametersAreNonnullByDefault").build())
            .build();
        assert_eq!(
            pkg.content(),
            "P{N=com.acme#A=[A{N=javax.annotation.ParametersAreNonnullByDefault}]#C=[IC{N=com.acme.A#D=0},IC{N=com.acme.B#D=1}]}"
        );
        assert_eq!(PackageInfo::empty("com.acme").content(), "P{N=com.acme}");
    }
}
