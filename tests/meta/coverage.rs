//! Structural checks keeping unit tests in step with the source tree
//!
//! Every engine and collaborator file under `src/` has a mirror under
//! `tests/unit/`, every test file holds at least one test, and every public
//! function a source file declares is called from its mirror.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TESTS_ROOT: &str = "tests";

    // Crate roots and module declarations carry no behaviour of their own
    fn is_structural(relative: &Path) -> bool {
        matches!(
            relative.file_name().and_then(|name| name.to_str()),
            Some("lib.rs" | "main.rs" | "mod.rs")
        )
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|_strip_error| io::Error::other("path outside scan root"))?;
                    files.insert(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }

    fn behavioural_files(root: &str) -> BTreeSet<PathBuf> {
        let Ok(files) = rust_files(Path::new(root)) else {
            unreachable!("{root} should be readable from the package root");
        };
        files
            .into_iter()
            .filter(|relative| !is_structural(relative))
            .collect()
    }

    fn report(header: &str, offenders: &[String]) -> String {
        format!("{header}:\n{}", offenders.join("\n"))
    }

    // Public functions declared at the start of a line, methods included
    fn public_functions(source: &str) -> Vec<String> {
        source
            .lines()
            .filter_map(|line| {
                let line = line.trim_start();
                line.strip_prefix("pub fn ")
                    .or_else(|| line.strip_prefix("pub const fn "))
            })
            .filter_map(|signature| {
                let end = signature.find(['(', '<'])?;
                signature.get(..end).map(str::to_string)
            })
            .collect()
    }

    // Tests every source file has a unit test mirror
    // Verified by adding a source file without a mirror
    #[test]
    fn test_source_files_have_unit_tests() {
        let sources = behavioural_files(SRC_ROOT);
        let units = behavioural_files(UNIT_ROOT);

        let missing: Vec<String> = sources
            .difference(&units)
            .map(|relative| format!("  - src/{0} -> tests/unit/{0}", relative.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests every unit test file still has a source counterpart
    // Verified by deleting a source file and keeping its tests
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = behavioural_files(SRC_ROOT);
        let units = behavioural_files(UNIT_ROOT);

        let orphaned: Vec<String> = units
            .difference(&sources)
            .map(|relative| format!("  - tests/unit/{}", relative.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without a source file", &orphaned)
        );
    }

    // Tests every non-structural test file defines at least one test
    // Verified by emptying a unit test module
    #[test]
    fn test_test_files_contain_tests() {
        let empty: Vec<String> = behavioural_files(TESTS_ROOT)
            .into_iter()
            .filter(|relative| {
                !fs::read_to_string(Path::new(TESTS_ROOT).join(relative))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|relative| format!("  - tests/{}", relative.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without any #[test] function", &empty)
        );
    }

    // Tests each public function is called from the mirrored unit test file
    // Verified by adding an uncalled public method to a source file
    #[test]
    fn test_public_functions_called_from_mirror() {
        let mut uncalled = Vec::new();

        for relative in behavioural_files(SRC_ROOT) {
            let source = fs::read_to_string(Path::new(SRC_ROOT).join(&relative));
            let mirror = fs::read_to_string(Path::new(UNIT_ROOT).join(&relative));
            let (Ok(source), Ok(mirror)) = (source, mirror) else {
                continue;
            };

            for name in public_functions(&source) {
                if !mirror.contains(&format!("{name}(")) {
                    uncalled.push(format!("  - src/{}: {name}", relative.display()));
                }
            }
        }

        assert!(
            uncalled.is_empty(),
            "{}",
            report("Public functions never called from their unit tests", &uncalled)
        );
    }

    // Tests the declaration scan sees plain, const and generic functions
    // Verified by matching only `pub fn`
    #[test]
    fn test_public_function_scan() {
        let source = "pub fn alpha(x: i32) {}\n    pub const fn beta(&self) {}\n\
                      pub(crate) fn gamma() {}\nfn delta() {}\npub fn epsilon<T>(t: T) {}\n";

        assert_eq!(public_functions(source), vec!["alpha", "beta", "epsilon"]);
    }
}
