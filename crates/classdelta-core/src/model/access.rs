//! JVM access flags and their keyword rendering.

use bitflags::bitflags;

bitflags! {
    /// Access flags as stored in the class file, plus classdelta pseudo flags.
    ///
    /// The low 16 bits are the JVM flags. Several bits are shared between
    /// contexts (`SYNCHRONIZED` is `ACC_SUPER` on classes, `VOLATILE` is
    /// `ACC_BRIDGE` and `TRANSIENT` is `ACC_VARARGS` on methods); the raw
    /// value is kept and interpreted by the renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AccessFlags: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
        const MANDATED = 0x8000;

        /// Interface default method. Never present in a class file.
        const DEFAULT = 0x4_0000;

        const _ = !0;
    }
}

/// `ACC_SUPER` shares its bit with `SYNCHRONIZED`.
pub const ACC_SUPER: AccessFlags = AccessFlags::SYNCHRONIZED;

impl AccessFlags {
    /// Raw flag value, as carried in message arguments and canonical content.
    pub fn raw(self) -> u32 {
        self.bits()
    }

    pub fn is_static_final(self) -> bool {
        self.contains(AccessFlags::STATIC | AccessFlags::FINAL)
    }

    /// Render the flags as Java keywords in canonical order.
    ///
    /// ```
    /// use classdelta_core::model::AccessFlags;
    ///
    /// let flags = AccessFlags::PUBLIC | AccessFlags::STATIC | AccessFlags::FINAL;
    /// assert_eq!(flags.keywords(), "public static final");
    /// ```
    pub fn keywords(self) -> String {
        let mut words: Vec<&str> = Vec::new();

        if self.contains(AccessFlags::PUBLIC) {
            words.push("public");
        } else if self.contains(AccessFlags::PROTECTED) {
            words.push("protected");
        } else if self.contains(AccessFlags::PRIVATE) {
            words.push("private");
        }
        if self.contains(AccessFlags::STATIC) {
            words.push("static");
        }
        if self.contains(AccessFlags::FINAL) {
            words.push("final");
        }
        if self.contains(AccessFlags::ENUM) {
            words.push("enum");
        } else if self.contains(AccessFlags::ANNOTATION) {
            words.push("@interface");
        } else if self.contains(AccessFlags::INTERFACE) {
            words.push("interface");
        } else if self.contains(AccessFlags::ABSTRACT) {
            words.push("abstract");
        }
        if self.contains(AccessFlags::DEFAULT) {
            words.push("default");
        }
        if self.contains(AccessFlags::VOLATILE) {
            words.push("volatile");
        }
        if self.contains(AccessFlags::TRANSIENT) {
            words.push("transient");
        }
        if self.contains(AccessFlags::SYNCHRONIZED) {
            words.push("synchronized");
        }
        if self.contains(AccessFlags::STRICT) {
            words.push("strictfp");
        }
        if self.contains(AccessFlags::NATIVE) {
            words.push("native");
        }

        words.join(" ")
    }
}
