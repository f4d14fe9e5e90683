use camino::{Utf8Path, Utf8PathBuf};

const DOMAIN_APP: &str = "authservice-domain/domain-application/src/main/java/me/namila/service/auth/domain/application";
const CONTROLLER: &str =
    "authservice-application/src/main/java/me/namila/service/auth/application/controller";

/// Members of the target directory set, in provisioning order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetDir {
    RequestDto,
    ResponseDto,
    Service,
    Mapper,
    Controller,
}

impl TargetDir {
    pub const ALL: [TargetDir; 5] = [
        TargetDir::RequestDto,
        TargetDir::ResponseDto,
        TargetDir::Service,
        TargetDir::Mapper,
        TargetDir::Controller,
    ];

    fn relative(&self) -> Utf8PathBuf {
        match self {
            TargetDir::RequestDto => Utf8Path::new(DOMAIN_APP).join("configuration/dto/request"),
            TargetDir::ResponseDto => Utf8Path::new(DOMAIN_APP).join("configuration/dto/response"),
            TargetDir::Service => Utf8Path::new(DOMAIN_APP).join("configuration/service"),
            TargetDir::Mapper => Utf8Path::new(DOMAIN_APP).join("configuration/mapper"),
            TargetDir::Controller => Utf8PathBuf::from(CONTROLLER),
        }
    }
}

/// The generated tree anchored at a base directory.
#[derive(Clone, Debug)]
pub struct Layout {
    base: Utf8PathBuf,
}

impl Layout {
    pub fn new(base: impl Into<Utf8PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Utf8Path {
        &self.base
    }

    pub fn dir(&self, target: TargetDir) -> Utf8PathBuf {
        self.base.join(target.relative())
    }

    /// Ordered target directory set.
    pub fn directories(&self) -> Vec<Utf8PathBuf> {
        TargetDir::ALL.iter().map(|target| self.dir(*target)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_follow_fixed_order() {
        let layout = Layout::new("auth-service");
        let dirs = layout.directories();
        assert_eq!(dirs.len(), 5);
        assert!(dirs[0].ends_with("configuration/dto/request"));
        assert!(dirs[1].ends_with("configuration/dto/response"));
        assert!(dirs[2].ends_with("configuration/service"));
        assert!(dirs[3].ends_with("configuration/mapper"));
        assert_eq!(
            dirs[4],
            Utf8PathBuf::from(
                "auth-service/authservice-application/src/main/java/me/namila/service/auth/application/controller"
            )
        );
    }

    #[test]
    fn every_directory_is_under_base() {
        let layout = Layout::new("out/svc");
        for dir in layout.directories() {
            assert!(dir.starts_with("out/svc"), "{dir} escaped the base");
        }
    }
}
