use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use word_class::{normalize, Classification, Classifier, Vocabulary};

mod source;

use source::VocabularySource;

#[derive(Parser, Debug)]
#[command(
    name = "word-class",
    about = "Detects the words of each vocabulary within text, counting occurrences."
)]
struct Args {
    /// A vocabulary word list, one word per line, as NAME=PATH or PATH (named after the file stem)
    #[arg(short, long = "vocabulary", value_name = "NAME=PATH", required = true)]
    vocabularies: Vec<VocabularySource>,

    /// Print results as JSON, one object per input
    #[arg(long)]
    json: bool,

    /// Print each vocabulary's transition table before classifying
    #[arg(long)]
    dump: bool,

    /// The text to classify. Lines are read from stdin when omitted
    text: Vec<String>,
}

trait OutputWriter {
    fn write_classifications(&mut self, input: &str, classifications: &[Classification]);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_classifications(&mut self, _input: &str, classifications: &[Classification]) {
        for classification in classifications {
            println!(
                "{} detected: {:?}",
                classification.class(),
                classification.words()
            );
            for (word, count) in classification.counts() {
                println!("{} {}", word, count);
            }
        }
        println!();
    }
}

#[derive(Serialize)]
struct ClassReport {
    class: String,
    words: Vec<String>,
    counts: Vec<(String, usize)>,
}

impl<'a, 'b> From<&'a Classification<'b>> for ClassReport {
    fn from(classification: &'a Classification<'b>) -> Self {
        ClassReport {
            class: classification.class().to_owned(),
            words: classification
                .words()
                .iter()
                .map(|word| (*word).to_owned())
                .collect(),
            counts: classification
                .counts()
                .into_iter()
                .map(|(word, count)| (word.to_owned(), count))
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct InputReport {
    input: String,
    classes: Vec<ClassReport>,
}

struct JsonWriter;

impl OutputWriter for JsonWriter {
    fn write_classifications(&mut self, input: &str, classifications: &[Classification]) {
        let report = InputReport {
            input: input.to_owned(),
            classes: classifications.iter().map(ClassReport::from).collect(),
        };
        match serde_json::to_string(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => log::error!("failed to serialize results: {}", error),
        }
    }
}

fn load_classifier(sources: &[VocabularySource]) -> anyhow::Result<Classifier> {
    let mut classifier = Classifier::new();
    for source in sources {
        let vocabulary = match &source.name {
            Some(name) => Vocabulary::from_named_path(name.as_str(), &source.path),
            None => Vocabulary::from_path(&source.path),
        }
        .with_context(|| format!("loading vocabulary from {}", source.path.display()))?;
        log::info!(
            "loaded vocabulary `{}` with {} words",
            vocabulary.name(),
            vocabulary.len()
        );
        classifier.add_vocabulary(&vocabulary);
    }
    Ok(classifier)
}

fn classify(classifier: &Classifier, input: &str, writer: &mut dyn OutputWriter) {
    let text = normalize(input);
    let classifications = classifier.classify(&text);
    writer.write_classifications(input, &classifications);
}

fn run(args: Args) -> anyhow::Result<()> {
    let classifier = load_classifier(&args.vocabularies)?;

    if args.dump {
        for (name, dfa) in classifier.classes() {
            println!("{}:", name);
            println!("{}", dfa);
        }
    }

    let mut writer: Box<dyn OutputWriter> = if args.json {
        Box::new(JsonWriter)
    } else {
        Box::new(StdoutWriter)
    };

    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading text from stdin")?;
            classify(&classifier, &line, &mut *writer);
        }
    } else {
        classify(&classifier, &args.text.join(" "), &mut *writer);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    run(Args::parse())
}
