//! Compiler classpath assembly.
//!
//! The GWT compiler resolves classes by first match, so order matters:
//! the local source root always comes first and the SDK archives last.

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;

/// Local source root, relative to the project root.
pub const LOCAL_SOURCE_ROOT: &str = "src";

/// SDK archives appended after every other root.
pub const TOOLCHAIN_ARCHIVES: [&str; 2] = ["gwt-dev.jar", "gwt-user.jar"];

/// Platform path-list separator.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: &str = ":";

/// Ordered compilation roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classpath {
    roots: Vec<PathBuf>,
}

impl Classpath {
    /// Assemble the classpath from configuration. No I/O.
    pub fn build(config: &Config) -> Self {
        let mut roots = vec![PathBuf::from(LOCAL_SOURCE_ROOT)];
        roots.extend(config.classpath.roots().iter().cloned());
        roots.extend(TOOLCHAIN_ARCHIVES.iter().map(|jar| config.gwt.join(jar)));
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Join the roots into a single search-path string.
    pub fn join(&self) -> String {
        self.roots
            .iter()
            .map(|root| root.display().to_string())
            .collect::<Vec<_>>()
            .join(PATH_LIST_SEPARATOR)
    }
}

impl fmt::Display for Classpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Convenience wrapper returning the joined search path.
pub fn build_classpath(config: &Config) -> String {
    Classpath::build(config).join()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtraClasspath;

    fn config(classpath: ExtraClasspath) -> Config {
        Config {
            gwt: PathBuf::from("/opt/gwt"),
            classpath,
            java: None,
            compile_timeout: None,
            openchemlib: None,
            datawarrior: None,
        }
    }

    #[test]
    fn test_no_extra_roots() {
        let classpath = Classpath::build(&config(ExtraClasspath::None));
        assert_eq!(
            classpath.roots(),
            &[
                PathBuf::from("src"),
                PathBuf::from("/opt/gwt/gwt-dev.jar"),
                PathBuf::from("/opt/gwt/gwt-user.jar"),
            ]
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_many_roots_joined() {
        let cp = build_classpath(&config(ExtraClasspath::Many(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
        ])));
        assert_eq!(cp, "src:a:b:/opt/gwt/gwt-dev.jar:/opt/gwt/gwt-user.jar");
    }

    #[test]
    fn test_order_invariant() {
        for extra in [
            ExtraClasspath::None,
            ExtraClasspath::Single(PathBuf::from("lib")),
            ExtraClasspath::Many((0..5).map(|i| PathBuf::from(format!("r{i}"))).collect()),
        ] {
            let count = extra.roots().len();
            let classpath = Classpath::build(&config(extra));
            let roots = classpath.roots();

            assert_eq!(roots.len(), count + 3);
            assert_eq!(roots[0], PathBuf::from(LOCAL_SOURCE_ROOT));
            assert!(roots[roots.len() - 2].ends_with("gwt-dev.jar"));
            assert!(roots[roots.len() - 1].ends_with("gwt-user.jar"));
        }
    }
}
