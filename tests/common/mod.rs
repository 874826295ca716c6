#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn blogsync_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blogsync").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a config pointing at `notes/` and `blog/` under `root`
pub fn write_config(root: &Path) {
    fs::write(
        root.join("blogsync.toml"),
        "source = \"notes\"\n\
        destination = \"blog\"\n\
        repo_url = \"https://example.com/blog.git\"\n",
    )
    .unwrap();
}

/// Notes, an already initialized site and the link rewriter
pub fn prepare_site(root: &Path) {
    fs::create_dir_all(root.join("notes/posts")).unwrap();
    fs::write(root.join("notes/posts/hello.md"), "# Hello\n").unwrap();
    fs::create_dir_all(root.join("blog/.git")).unwrap();
    fs::create_dir_all(root.join("blog/themes/terminal")).unwrap();
    fs::write(root.join("blog/hugo.toml"), "title = \"test\"\n").unwrap();
    fs::write(root.join("replace.py"), "").unwrap();
    write_config(root);
}

/// Install a shell script named `name` that appends its invocation to
/// `$BLOGSYNC_CALLS` and then runs `body`
#[cfg(unix)]
pub fn fake_tool(bin: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin).unwrap();
    let path = bin.join(name);
    let script = format!(
        "#!/bin/sh\necho \"{} $*\" >> \"$BLOGSYNC_CALLS\"\n{}\nexit 0\n",
        name, body
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// git that reports `origin` as a remote and `status` as the given output
#[cfg(unix)]
pub fn fake_toolchain(bin: &Path, status: &str) {
    let git = format!(
        "case \"$1\" in\n  remote) echo origin ;;\n  status) printf '%s' '{}' ;;\nesac",
        status
    );
    fake_tool(bin, "git", &git);
    fake_tool(bin, "rsync", "");
    fake_tool(bin, "python3", "");
    fake_tool(bin, "hugo", "");
}

pub fn read_calls(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|l| l.trim_end().to_string())
        .collect()
}
