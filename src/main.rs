use clap::{Arg, ArgAction, Command};
use gopherish::{LeadingSound, split_punctuation, translate_sentence, translate_word};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("gopherish")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate English into Gopherish")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show how each word is split and classified")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("word")
                .about("Translate a single word")
                .arg(
                    Arg::new("word")
                        .help("English word, punctuation included")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("sentence")
                .about("Translate a sentence ending in '.', '!' or '?'")
                .arg(
                    Arg::new("sentence")
                        .help("English sentence")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
}

fn explain_word(word: &str) {
    let parts = split_punctuation(word);
    let lowercase = parts.core.to_ascii_lowercase();
    println!("📝 Word: \"{}\"", word);
    println!(
        "   Punctuation: leading \"{}\", core \"{}\", trailing \"{}\"",
        parts.leading, parts.core, parts.trailing
    );
    match LeadingSound::classify(&lowercase) {
        LeadingSound::Vowel { .. } => println!("   Sound: vowel"),
        LeadingSound::XrCluster { .. } => println!("   Sound: xr"),
        LeadingSound::Consonant { cluster, base } => {
            println!("   Sound: consonant \"{}\" + base \"{}\"", cluster, base)
        }
        LeadingSound::Unclassified => println!("   Sound: none"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    let verbose = matches.get_flag("verbose");

    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("word", sub)) => {
            let word = sub
                .get_one::<String>("word")
                .ok_or("missing word argument")?;
            if verbose {
                explain_word(word);
            }
            println!("{}", translate_word(word));
        }
        Some(("sentence", sub)) => {
            let sentence = sub
                .get_one::<String>("sentence")
                .ok_or("missing sentence argument")?;
            if verbose {
                for word in sentence.split_whitespace() {
                    explain_word(word);
                }
                println!();
            }
            match translate_sentence(sentence) {
                Ok(translated) => println!("{}", translated),
                Err(e) => {
                    eprintln!("❌ {}", e);
                    return Err(e.into());
                }
            }
        }
        _ => return Err("missing subcommand".into()),
    }

    Ok(())
}
