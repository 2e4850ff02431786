//! Test project builder for isolated depwatch runs.
//!
//! Provides `TestProject` - a temp directory holding an entrypoint, its
//! dependencies, shell stand-ins for the analyzer and runner, and a
//! `depwatch.toml` pointing at them. Each run gets its own HOME so no user
//! configuration leaks in.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, Output, Stdio};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Isolated project directory with a configured analyzer and runner.
pub struct TestProject {
    pub root: TempDir,
    pub home: TempDir,
}

impl TestProject {
    /// Project with `main.toit` depending on `lib/util.toit`.
    pub fn new() -> Self {
        let project = Self {
            root: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        };
        project.write("main.toit", "import .lib.util\nmain: util\n");
        project.write("lib/util.toit", "util: print 1\n");
        project.write("unrelated/notes.txt", "nothing to see\n");
        project.write_analyzer(&["main.toit", "lib/util.toit"]);
        project.write("run.sh", "#!/bin/sh\necho \"ran $1\"\n");
        project.write_config();
        project
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Replace the analyzer so it reports `deps` (project-relative).
    pub fn write_analyzer(&self, deps: &[&str]) {
        let mut script = String::from("#!/bin/sh\n: > \"$1\"\n");
        for (i, dep) in deps.iter().enumerate() {
            let line = if i == 0 {
                format!("{}:", self.path(dep).display())
            } else {
                self.path(dep).display().to_string()
            };
            script.push_str(&format!("echo '{}' >> \"$1\"\n", line));
        }
        self.write("analyze.sh", &script);
    }

    /// Make the analyzer exit non-zero.
    pub fn write_failing_analyzer(&self) {
        self.write("analyze.sh", "#!/bin/sh\necho 'syntax error' >&2\nexit 1\n");
    }

    fn write_config(&self) {
        let config = format!(
            r#"[analyzer]
command = ["sh", "{analyze}", "{{dependency_file}}", "{{entrypoint}}"]

[runner]
command = ["sh", "{run}", "{{entrypoint}}", "--device={{device}}"]

[watch]
debounce_ms = 100
poll_interval_ms = 20
"#,
            analyze = self.path("analyze.sh").display(),
            run = self.path("run.sh").display(),
        );
        self.write("depwatch.toml", &config);
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_depwatch"));
        cmd.args(args)
            .current_dir(self.root.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("DEPWATCH_DEVICE")
            .env_remove("DEPWATCH_DEBOUNCE_MS")
            .env_remove("DEPWATCH_COLOR");
        cmd
    }

    /// Run depwatch to completion.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().unwrap()
    }

    /// Start depwatch in the background with stdout captured line by line.
    pub fn spawn(&self, args: &[&str]) -> Running {
        let mut child = self
            .command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .expect("failed to start depwatch");

        let stdout = child.stdout.take().unwrap();
        let (tx, rx) = channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Running {
            child,
            lines: rx,
            seen: Vec::new(),
        }
    }
}

/// A depwatch process under test.
pub struct Running {
    child: Child,
    lines: Receiver<String>,
    pub seen: Vec<String>,
}

impl Running {
    /// Wait until a stdout line satisfies `pred`; returns it.
    pub fn wait_for(&mut self, timeout: Duration, pred: impl Fn(&str) -> bool) -> Option<String> {
        let deadline = Instant::now() + timeout;
        while let Some(left) = deadline.checked_duration_since(Instant::now()) {
            match self.lines.recv_timeout(left) {
                Ok(line) => {
                    self.seen.push(line.clone());
                    if pred(&line) {
                        return Some(line);
                    }
                }
                Err(_) => return None,
            }
        }
        None
    }

    /// Like `wait_for`, but a matching line printed earlier also counts.
    pub fn wait_for_seen(&mut self, timeout: Duration, pred: impl Fn(&str) -> bool) -> Option<String> {
        if let Some(line) = self.seen.iter().find(|l| pred(l)) {
            return Some(line.clone());
        }
        self.wait_for(timeout, pred)
    }

    /// Collect everything printed during `period`.
    pub fn drain_for(&mut self, period: Duration) -> Vec<String> {
        let deadline = Instant::now() + period;
        let mut lines = Vec::new();
        while let Some(left) = deadline.checked_duration_since(Instant::now()) {
            match self.lines.recv_timeout(left) {
                Ok(line) => {
                    self.seen.push(line.clone());
                    lines.push(line);
                }
                Err(_) => break,
            }
        }
        lines
    }

    pub fn kill(mut self) -> Vec<String> {
        let _ = self.child.kill();
        let _ = self.child.wait();
        self.seen
    }
}

/// JSON event name of an NDJSON line, if it is one.
pub fn event_name(line: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(line).ok()?;
    value.get("event")?.as_str().map(str::to_string)
}

/// Whether `line` is the JSON event `name` with `field == expected`.
pub fn is_event_with(line: &str, name: &str, field: &str, expected: serde_json::Value) -> bool {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(line) else {
        return false;
    };
    value.get("event").and_then(|e| e.as_str()) == Some(name)
        && value.get(field) == Some(&expected)
}
