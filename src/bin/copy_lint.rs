use std::{fs, path::PathBuf, process::ExitCode};

use portfolio_site::{
    copy_lint::{CopyLint, BANNED_PHRASES},
    projects::Showcase,
};

/// Checks the embedded project write-ups plus any files given on the command line.
fn main() -> ExitCode {
    let lint = match CopyLint::new(BANNED_PHRASES) {
        Ok(lint) => lint,
        Err(e) => {
            eprintln!("copy-lint: {e}");
            return ExitCode::from(2);
        }
    };

    let mut sources = Showcase::iter()
        .filter_map(|file| {
            let content = Showcase::get(&file)?;
            let text = String::from_utf8(content.data.into()).ok()?;
            Some((format!("projects/{file}"), text))
        })
        .collect::<Vec<_>>();

    for path in std::env::args().skip(1).map(PathBuf::from) {
        match fs::read_to_string(&path) {
            Ok(text) => sources.push((path.display().to_string(), text)),
            Err(e) => {
                eprintln!("copy-lint: couldn't read {}: {e}", path.display());
                return ExitCode::from(2);
            }
        }
    }

    let findings = sources
        .iter()
        .flat_map(|(name, text)| lint.check(name, text))
        .collect::<Vec<_>>();
    for finding in &findings {
        println!("{finding}");
    }

    if findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        eprintln!("copy-lint: {} banned phrase(s) found", findings.len());
        ExitCode::FAILURE
    }
}
