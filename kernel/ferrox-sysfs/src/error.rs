//! Attribute-layer error types.

use core::fmt;

/// Errors surfaced by attribute dispatch and object registration.
///
/// Everything here returns synchronously to the immediate caller; nothing is
/// retried internally and nothing is fatal. (Tearing a group down while
/// members remain registered is a contract violation, not an error value --
/// see [`AttrGroup::destroy`](crate::AttrGroup::destroy).)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysfsError {
    /// Allocating a namespace entry or object identity failed.
    NoMemory,
    /// The requested name did not resolve to a registered entry.
    UnknownAttribute,
    /// The attribute's access policy does not permit reads.
    NotReadable,
    /// The attribute's access policy does not permit writes.
    NotWritable,
    /// A namespace entry with the same name already exists.
    AlreadyExists,
}

impl fmt::Display for SysfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMemory => f.write_str("out of memory"),
            Self::UnknownAttribute => f.write_str("no such attribute"),
            Self::NotReadable => f.write_str("attribute is not readable"),
            Self::NotWritable => f.write_str("attribute is not writable"),
            Self::AlreadyExists => f.write_str("entry already exists"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_all_variants() {
        assert_eq!(format!("{}", SysfsError::NoMemory), "out of memory");
        assert_eq!(
            format!("{}", SysfsError::UnknownAttribute),
            "no such attribute"
        );
        assert_eq!(
            format!("{}", SysfsError::NotReadable),
            "attribute is not readable"
        );
        assert_eq!(
            format!("{}", SysfsError::NotWritable),
            "attribute is not writable"
        );
        assert_eq!(
            format!("{}", SysfsError::AlreadyExists),
            "entry already exists"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(SysfsError::NotReadable, SysfsError::NotReadable);
        assert_ne!(SysfsError::NotReadable, SysfsError::NotWritable);
    }
}
