//! In-memory filesystem tree for the toy shell

/// A file or directory
///
/// Directory children keep their insertion order, which is also the
/// order `ls` prints them in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    File(&'static str),
    Dir(Vec<(&'static str, Node)>),
}

impl Node {
    /// Check if this node is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }

    /// Direct child by name
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Dir(children) => children.iter().find(|(n, _)| *n == name).map(|(_, node)| node),
            Node::File(_) => None,
        }
    }

    /// Walk absolute path segments from this node
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        path.iter().try_fold(self, |node, seg| node.child(seg.as_ref()))
    }

    /// Child names of a directory
    pub fn names(&self) -> Option<Vec<&'static str>> {
        match self {
            Node::Dir(children) => Some(children.iter().map(|(name, _)| *name).collect()),
            Node::File(_) => None,
        }
    }
}

/// The shell's initial tree
pub fn default_tree() -> Node {
    Node::Dir(vec![
        (
            "home",
            Node::Dir(vec![(
                "user",
                Node::Dir(vec![
                    (
                        "readme.txt",
                        Node::File("Welcome to the XP Portfolio terminal. Type \"help\" to see commands."),
                    ),
                    (
                        "projects",
                        Node::Dir(vec![
                            ("emotion-ai.md", Node::File("Emotion Detection AI - Python, OpenCV, ML")),
                            ("todo-app.md", Node::File("To-do App - HTML, CSS, JS")),
                        ]),
                    ),
                ]),
            )]),
        ),
        ("etc", Node::Dir(vec![("motd", Node::File("Have a productive day!"))])),
        ("var", Node::Dir(Vec::new())),
    ])
}

/// Resolve `arg` against `cwd` into absolute path segments
///
/// No argument means `cwd`. `.` is skipped and `..` pops a segment
/// (stopping at the root). Existence is not checked.
pub fn resolve_path(cwd: &[String], arg: Option<&str>) -> Vec<String> {
    let arg = match arg {
        Some(arg) if !arg.trim().is_empty() => arg,
        _ => return cwd.to_vec(),
    };

    let mut base = if arg.starts_with('/') { Vec::new() } else { cwd.to_vec() };
    for part in arg.split('/').filter(|p| !p.is_empty()) {
        match part {
            "." => {}
            ".." => {
                base.pop();
            }
            _ => base.push(part.to_string()),
        }
    }
    base
}
