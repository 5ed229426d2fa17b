//! Shell startup file editing.
//!
//! Inserts or replaces the single `THIS` assignment in a bash, zsh or fish
//! startup file. Everything outside the assignment's value is left
//! byte-for-byte as it was.

use regex::Regex;
use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;
use std::sync::LazyLock;

use super::ShellDialect;
use crate::error::{GetThisError, Result};

/// Name of the managed environment variable.
pub const VARIABLE_NAME: &str = "THIS";

/// `THIS=value` or `export THIS=value` at the start of a line.
///
/// Group 2 is the value: one shell word made of `$'...'`, `'...'` and
/// `"..."` segments, backslash escapes and bare characters. It ends at
/// unquoted whitespace or `;`, so a trailing comment is not part of it.
static POSIX_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?m)^([ \t]*(?:export[ \t]+)?THIS[ \t]*=[ \t]*)"#,
        r#"((?:\$'(?:[^'\\\n]|\\.)*'|'[^'\n]*'|"(?:[^"\\\n]|\\.)*"|\\.|[^;\s'"\\])*)"#,
    ))
    .expect("POSIX_ASSIGNMENT must compile")
});

/// `set -x THIS value` (any flags) at the start of a line.
///
/// Fish single quotes accept `\'` and `\\` escapes.
static FISH_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?m)^([ \t]*set[ \t]+(?:-[A-Za-z-]+[ \t]+)*THIS[ \t]+)"#,
        r#"((?:'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*"|\\.|[^;\s'"\\])*)"#,
    ))
    .expect("FISH_ASSIGNMENT must compile")
});

fn assignment_pattern(dialect: &ShellDialect) -> Result<&'static Regex> {
    match dialect {
        ShellDialect::Bash | ShellDialect::Zsh => Ok(&*POSIX_ASSIGNMENT),
        ShellDialect::Fish => Ok(&*FISH_ASSIGNMENT),
        ShellDialect::Unsupported(shell) => Err(GetThisError::UnsupportedShell {
            shell: shell.clone(),
        }),
    }
}

/// Set `THIS` to `value` in the startup file at `path`.
///
/// The file must already exist; it is never created. The updated content is
/// written back with a single write call.
pub fn write(path: &Path, dialect: &ShellDialect, value: &str) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|source| GetThisError::FileIo {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = apply(&content, dialect, value)?;
    if updated == content {
        tracing::debug!("{} already sets {}", path.display(), VARIABLE_NAME);
        return Ok(());
    }

    fs::write(path, updated).map_err(|source| GetThisError::FileIo {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Set {} in {}", VARIABLE_NAME, path.display());
    Ok(())
}

/// Compute the startup file content with `THIS` set to `value`.
///
/// Replaces the value of the first existing assignment, or appends a new
/// assignment line when there is none.
///
/// # Example
///
/// ```
/// use getthis::shell::{dotfile, ShellDialect};
///
/// let once = dotfile::apply("export FOO=bar\n", &ShellDialect::Bash, "/home/u/x.py").unwrap();
/// assert_eq!(once, "export FOO=bar\nexport THIS=/home/u/x.py;\n");
///
/// let twice = dotfile::apply(&once, &ShellDialect::Bash, "/home/u/y.py").unwrap();
/// assert_eq!(twice, "export FOO=bar\nexport THIS=/home/u/y.py;\n");
/// ```
pub fn apply(content: &str, dialect: &ShellDialect, value: &str) -> Result<String> {
    let pattern = assignment_pattern(dialect)?;
    let quoted = quote(dialect, value);

    if let Some(existing) = pattern.captures(content).and_then(|caps| caps.get(2)) {
        let mut updated = String::with_capacity(content.len() + quoted.len());
        updated.push_str(&content[..existing.start()]);
        updated.push_str(&quoted);
        updated.push_str(&content[existing.end()..]);
        return Ok(updated);
    }

    let mut updated = content.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(&assignment_line(dialect, &quoted));
    updated.push('\n');
    Ok(updated)
}

/// New assignment line for `dialect`, without the trailing newline.
fn assignment_line(dialect: &ShellDialect, quoted: &str) -> String {
    match dialect {
        ShellDialect::Fish => format!("set -x {} {};", VARIABLE_NAME, quoted),
        _ => format!("export {}={};", VARIABLE_NAME, quoted),
    }
}

/// The value `content` currently assigns to `THIS`, with quoting removed.
///
/// Reads the same assignment [`apply`] would replace.
pub fn read_value(content: &str, dialect: &ShellDialect) -> Result<Option<String>> {
    let pattern = assignment_pattern(dialect)?;
    Ok(pattern
        .captures(content)
        .and_then(|caps| caps.get(2))
        .map(|word| unquote(dialect, word.as_str())))
}

/// Quote `value` as a single shell word unless every character is safe.
///
/// Control characters need escapes: bash and zsh get `$'...'`, fish gets
/// escapes between single-quoted runs.
fn quote(dialect: &ShellDialect, value: &str) -> String {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+:@%,=~".contains(c));
    if safe {
        return value.to_string();
    }

    match dialect {
        ShellDialect::Fish => {
            let mut out = String::from("'");
            for c in value.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '\'' => out.push_str("\\'"),
                    c if c.is_ascii_control() => {
                        out.push('\'');
                        out.push_str(&control_escape(c));
                        out.push('\'');
                    }
                    c => out.push(c),
                }
            }
            out.push('\'');
            out
        }
        _ if value.chars().any(|c| c.is_ascii_control()) => {
            let mut out = String::from("$'");
            for c in value.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '\'' => out.push_str("\\'"),
                    c if c.is_ascii_control() => out.push_str(&control_escape(c)),
                    c => out.push(c),
                }
            }
            out.push('\'');
            out
        }
        _ => format!("'{}'", value.replace('\'', "'\\''")),
    }
}

fn control_escape(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        c => format!("\\x{:02x}", c as u32),
    }
}

/// Undo shell quoting of one word.
fn unquote(dialect: &ShellDialect, word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' if *dialect != ShellDialect::Fish && chars.peek() == Some(&'\'') => {
                chars.next();
                while let Some(c) = chars.next() {
                    match c {
                        '\'' => break,
                        '\\' => push_escape(&mut chars, &mut out),
                        c => out.push(c),
                    }
                }
            }
            '\'' if *dialect == ShellDialect::Fish => {
                while let Some(c) = chars.next() {
                    match c {
                        '\'' => break,
                        '\\' if matches!(chars.peek(), Some('\'') | Some('\\')) => {
                            out.extend(chars.next());
                        }
                        c => out.push(c),
                    }
                }
            }
            '\'' => {
                for c in chars.by_ref() {
                    if c == '\'' {
                        break;
                    }
                    out.push(c);
                }
            }
            '"' => {
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' if matches!(chars.peek(), Some('"' | '\\' | '$' | '`')) => {
                            out.extend(chars.next());
                        }
                        c => out.push(c),
                    }
                }
            }
            '\\' if *dialect == ShellDialect::Fish => push_escape(&mut chars, &mut out),
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }

    out
}

/// Decode the escape after a backslash in `$'...'` or unquoted fish text.
fn push_escape(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    match chars.next() {
        Some('n') => out.push('\n'),
        Some('t') => out.push('\t'),
        Some('r') => out.push('\r'),
        Some('x') => {
            let mut code = 0u32;
            for _ in 0..2 {
                match chars.peek().and_then(|c| c.to_digit(16)) {
                    Some(digit) => {
                        code = code * 16 + digit;
                        chars.next();
                    }
                    None => break,
                }
            }
            out.extend(char::from_u32(code));
        }
        Some(c) => out.push(c),
        None => out.push('\\'),
    }
}
