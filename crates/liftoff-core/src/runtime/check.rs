//! Java runtime detection

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if a Java runtime is available.
///
/// `java -version` prints to stderr; the first line carries the version.
pub fn check_java() -> RuntimeInfo {
    let output = Command::new("java").arg("-version").output();

    match output {
        Ok(out) if out.status.success() => {
            let text = if out.stderr.is_empty() {
                out.stdout
            } else {
                out.stderr
            };
            RuntimeInfo {
                name: "Java",
                version: parse_java_version(&String::from_utf8_lossy(&text)),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Java",
            version: None,
            available: false,
        },
    }
}

/// Version from the first line of `java -version`, e.g.
/// `openjdk version "17.0.9" 2023-10-17` gives `17.0.9`
fn parse_java_version(output: &str) -> Option<String> {
    let first = output.lines().next()?;
    let start = first.find('"')? + 1;
    let end = first[start..].find('"')? + start;
    Some(first[start..end].to_string())
}
