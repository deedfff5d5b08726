use cipher_core::persistence::{load_trie, load_word_list, save_trie};
use cipher_core::{Alphabet, AnalysisEngine, LexicographicTrie};
use crossterm::style::Stylize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!(
            "Usage: {} <dictionary.txt> <cryptogram.txt> [starting-alphabet]",
            args[0]
        );
        return ExitCode::FAILURE;
    }

    match run(Path::new(&args[1]), Path::new(&args[2]), args.get(3)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn run(dictionary_path: &Path, cryptogram_path: &Path, start: Option<&String>) -> Result<(), String> {
    let start_alphabet = match start {
        Some(key) => key.parse::<Alphabet>().map_err(|e| e.to_string())?,
        None => Alphabet::identity(),
    };

    print!("Loading dictionary... ");
    let dictionary = load_dictionary(dictionary_path)?;
    println!("{} ({} words)", "done".green(), dictionary.len());

    let cryptogram = std::fs::read_to_string(cryptogram_path)
        .map_err(|e| format!("cannot read {}: {}", cryptogram_path.display(), e))?;

    let engine = AnalysisEngine::new(Arc::new(dictionary));
    let report = engine
        .guess_alphabet(&cryptogram, &start_alphabet)
        .map_err(|e| e.to_string())?;

    println!();
    println!(
        "=> Score: words = {} / valid = {} / invalid = {} / commits = {}",
        report.total_words,
        report.valid_words,
        report.total_words - report.valid_words,
        report.commits
    );
    if report.converged {
        println!("=> {}", "Converged: every extracted word is readable".green());
    } else {
        println!(
            "=> {}",
            "Did not fully converge: alphabet is a best-effort approximation".yellow()
        );
    }

    println!();
    println!("Starting     alphabet : {}", start_alphabet);
    println!("Approximated alphabet : {}", report.alphabet);
    println!(
        "Changed      positions: {}",
        compare_alphabets(&start_alphabet, &report.alphabet)
    );

    let decoded = report.alphabet.apply(&cryptogram);
    let preview: String = decoded.chars().take(200).collect();
    println!();
    println!("{}", "*** DECODED TEXT (preview) ***".bold());
    println!("{}", preview);

    Ok(())
}

/// Loads the word list, preferring a binary sidecar snapshot when present;
/// a fresh text load writes the snapshot back for the next run.
fn load_dictionary(path: &Path) -> Result<LexicographicTrie, String> {
    let snapshot: PathBuf = path.with_extension("bin");
    if snapshot.exists() {
        if let Ok(trie) = load_trie(&snapshot) {
            return Ok(trie);
        }
        // Fall through to a text reload when the snapshot is unreadable.
    }

    let trie = load_word_list(path)
        .map_err(|e| format!("cannot load {}: {}", path.display(), e))?;
    if let Err(e) = save_trie(&trie, &snapshot) {
        eprintln!(
            "{} could not write snapshot {}: {}",
            "warning:".yellow(),
            snapshot.display(),
            e
        );
    }
    Ok(trie)
}

/// Marks differing positions between two alphabets with an 'x'.
fn compare_alphabets(a: &Alphabet, b: &Alphabet) -> String {
    a.as_str()
        .bytes()
        .zip(b.as_str().bytes())
        .map(|(x, y)| if x == y { ' ' } else { 'x' })
        .collect()
}
