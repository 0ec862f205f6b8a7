// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command lines for build and test stages

use nb_config::shell_quote;
use nb_core::{Os, PlatformFacts};

/// Commit metadata in the line order `parse_commit_log` expects
pub const COMMIT_LOG_FORMAT: &str = "--pretty=format:%s%n%cN%n%cE%n%aN%n%aE";

/// Mount point used while extracting a disk image
const DMG_MOUNT: &str = "/Volumes/nb-julia";

fn bash(script: String) -> Vec<String> {
    vec!["/bin/bash".to_string(), "-c".to_string(), script]
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn fetch() -> Vec<String> {
    argv(&["git", "fetch"])
}

/// Clone into the workspace if it is not a checkout yet, then force a clean
/// checkout of `target` with submodules.
pub fn checkout(repository: &str, target: &str) -> Vec<String> {
    bash(format!(
        "([ -d .git ] || git clone {repo} .) && git fetch --tags origin && git checkout -f {target} && git clean -fdx && git submodule update --init --recursive",
        repo = shell_quote(repository),
        target = shell_quote(target),
    ))
}

pub fn brew_deps() -> Vec<String> {
    argv(&["brew", "install", "gcc", "cmake"])
}

/// `make {-jN} {flags} {targets}`
pub fn make(platform: &PlatformFacts, targets: &str, jobs: Option<u32>) -> Vec<String> {
    let jobs = jobs.map(|j| format!("-j{}", j)).unwrap_or_default();
    bash(join_words(&["make", &jobs, platform.flags(), targets]))
}

pub fn commit_log() -> Vec<String> {
    argv(&["git", "log", "-1", COMMIT_LOG_FORMAT])
}

fn exe(path: &str, platform: &PlatformFacts) -> String {
    let suffix = platform.os().map(|os| os.exe_suffix()).unwrap_or("");
    format!("{}{}", path, suffix)
}

/// Print `major.minor.patch` and the ten-character commit of the built binary
pub fn version_probe(platform: &PlatformFacts) -> Vec<String> {
    vec![
        exe("usr/bin/julia", platform),
        "-e".to_string(),
        r#"println("$(VERSION.major).$(VERSION.minor).$(VERSION.patch)\n$(Base.GIT_VERSION_INFO.commit[1:10])")"#
            .to_string(),
    ]
}

pub fn artifact_report() -> Vec<String> {
    argv(&["make", "print-JULIA_BINARYDIST_FILENAME"])
}

/// `make app`, or the older `contrib/mac/app` makefile plus a move of the
/// image to `local_filename`
pub fn mac_app(platform: &PlatformFacts, local_filename: &str) -> Vec<String> {
    let new_way = join_words(&["make", platform.flags(), "app"]);
    let old_way = format!(
        "{} && mv contrib/mac/app/*.dmg {}",
        join_words(&["make", platform.flags(), "-C", "contrib/mac/app"]),
        shell_quote(local_filename)
    );
    bash(format!(
        "~/unlock_keychain.sh && ({} || ({}))",
        new_way, old_way
    ))
}

pub fn clean_workspace() -> Vec<String> {
    argv(&["/bin/sh", "-c", "rm -rf *"])
}

/// Name the tester downloads the artifact to
pub fn download_name(platform: &PlatformFacts) -> String {
    match platform.os() {
        Some(Os::Windows) => format!("julia-installer.{}", platform.os_pkg_ext),
        _ => format!("julia.{}", platform.os_pkg_ext),
    }
}

/// Unpack a downloaded artifact so that `bin/julia` lands in the workspace
pub fn extract(platform: &PlatformFacts, file: &str) -> Vec<String> {
    let file = shell_quote(file);
    let script = match platform.os_pkg_ext.as_str() {
        "dmg" => format!(
            "hdiutil attach {file} -mountpoint {mnt} -nobrowse && cp -a {mnt}/Julia-*.app/Contents/Resources/julia/. . ; status=$?; hdiutil detach {mnt}; exit $status",
            file = file,
            mnt = DMG_MOUNT,
        ),
        "exe" => format!(
            "chmod +x {file} && ./{file} /S /D=\"$(cygpath -w \"$(pwd)\")\"",
            file = file
        ),
        _ => format!("tar zxf {} --strip-components=1", file),
    };
    bash(script)
}

/// Full test suite, including network tests, capped at `nthreads` workers
pub fn test_suite(platform: &PlatformFacts, nthreads: u32) -> Vec<String> {
    let code = format!(
        r#"include(joinpath(Sys.BINDIR, Base.DATAROOTDIR, "julia", "test", "choosetests.jl")); Base.runtests(append!(choosetests()[1], ["LibGit2/online", "download"]); ncores=min(Sys.CPU_THREADS, 8, {}))"#,
        nthreads
    );
    vec![exe("bin/julia", platform), "-e".to_string(), code]
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
