use crate::config::BuildConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A fully planned generator run: program, argument list and the directory
/// it executes in. Planning is pure so the command line can be inspected
/// without spawning anything.
#[derive(Clone, Debug)]
pub struct GeneratorInvocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
}

/// Plan `<program> -D<VAR>=<dependency dir> <source root>` executed from
/// inside the build directory, mirroring `cmake -DGLEW_DIR=<path> ../`.
pub fn plan_invocation(
    build: &BuildConfig,
    dependency_dir: &Path,
    project_root: &Path,
) -> GeneratorInvocation {
    let mut define = OsString::from(format!("-D{}=", build.dependency_var));
    define.push(dependency_dir.as_os_str());

    GeneratorInvocation {
        program: build.program.clone(),
        args: vec![define, build.source_root.clone().into_os_string()],
        working_dir: project_root.join(&build.directory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_invocation_embeds_dependency_dir() {
        let build = BuildConfig::default();
        let invocation =
            plan_invocation(&build, Path::new("/tmp/glew"), Path::new("/projects/demo"));

        assert_eq!(invocation.program, "cmake");
        assert_eq!(
            invocation.args,
            vec![
                OsString::from("-DGLEW_DIR=/tmp/glew"),
                OsString::from("..")
            ]
        );
        assert_eq!(invocation.working_dir, PathBuf::from("/projects/demo/build"));
    }

    #[test]
    fn test_invocation_honours_overrides() {
        let build = BuildConfig {
            directory: PathBuf::from("out"),
            program: "cmake3".to_string(),
            dependency_var: "DEP_DIR".to_string(),
            source_root: PathBuf::from("../src"),
        };
        let invocation = plan_invocation(&build, Path::new("deps/glew"), Path::new("."));

        assert_eq!(invocation.program, "cmake3");
        assert_eq!(invocation.args[0], OsStr::new("-DDEP_DIR=deps/glew"));
        assert_eq!(invocation.args[1], OsStr::new("../src"));
        assert_eq!(invocation.working_dir, PathBuf::from("./out"));
    }
}
