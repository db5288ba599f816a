//! Relative locations between documents

use crate::entity::EntityKind;

/// Resolves where a project reference points, relative to the referring document
///
/// Documents of one kind share a folder, so same-kind targets are addressed
/// by bare name and everything else goes through the parent folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Locator for `target_name` as seen from a document of `source_kind`
    pub fn resolve(source_kind: EntityKind, target_kind: EntityKind, target_name: &str) -> String {
        if source_kind == target_kind {
            target_name.to_string()
        } else {
            format!("../{}/{}", target_kind.folder(), target_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_kind_is_bare_name() {
        assert_eq!(
            PathResolver::resolve(EntityKind::Protocol, EntityKind::Protocol, "Bar"),
            "Bar"
        );
    }

    #[test]
    fn test_cross_kind_goes_through_folder() {
        assert_eq!(
            PathResolver::resolve(EntityKind::Protocol, EntityKind::Class, "Foo"),
            "../Classes/Foo"
        );
        assert_eq!(
            PathResolver::resolve(EntityKind::Class, EntityKind::Category, "NSString(Extras)"),
            "../Categories/NSString(Extras)"
        );
        assert_eq!(
            PathResolver::resolve(EntityKind::Category, EntityKind::Protocol, "Delegate"),
            "../Protocols/Delegate"
        );
    }
}
