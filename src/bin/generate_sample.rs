use anyhow::{Context, Result};
use serde::Serialize;

/// SplitMix64: tiny, seedable, and good enough for fixture data.
struct SampleRng(u64);

impl SampleRng {
    fn seeded(seed: u64) -> Self {
        SampleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * f64::EPSILON / 2.0
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let radius = (-2.0 * (1.0 - self.unit()).ln()).sqrt();
        let angle = std::f64::consts::TAU * self.unit();
        mean + std_dev * radius * angle.cos()
    }
}

/// One output row, in CORD-19 `metadata.csv` column order.
#[derive(Serialize)]
struct Row {
    cord_uid: String,
    title: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    authors: String,
    journal: String,
    publish_time: String,
}

const JOURNALS: &[&str] = &[
    "PLoS One",
    "bioRxiv",
    "medRxiv",
    "The Lancet",
    "BMJ",
    "Nature",
    "Journal of Virology",
    "Emerging Infectious Diseases",
    "Virology",
    "Viruses",
    "Science",
    "Cell",
];

const TOPICS: &[&str] = &[
    "SARS-CoV-2",
    "coronavirus",
    "influenza",
    "MERS",
    "ACE2 receptor",
    "vaccine efficacy",
    "viral transmission",
    "cytokine storm",
    "antibody response",
    "social distancing",
];

const PHRASES: &[&str] = &[
    "Analysis of",
    "A cohort study on",
    "Modelling the spread of",
    "Structural insights into",
    "Clinical outcomes of",
    "Genomic surveillance of",
];

const WORDS: &[&str] = &[
    "patients", "infection", "results", "we", "observed", "significant", "increase", "in", "the",
    "viral", "load", "among", "cases", "study", "data", "suggest", "that", "treatment", "protein",
    "binding", "model", "transmission", "rate", "was", "higher", "clinical", "samples", "of",
];

const SURNAMES: &[&str] = &["Zhang", "Smith", "Garcia", "Müller", "Kumar", "Okafor", "Rossi", "Kim"];

fn make_abstract(rng: &mut SampleRng, journal_idx: usize) -> String {
    // Preprint servers skew shorter; give each journal its own typical length.
    let mean = 120.0 + 15.0 * journal_idx as f64;
    let len = rng.normal(mean, 45.0).clamp(8.0, 600.0) as usize;
    (0..len)
        .map(|_| rng.pick(WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

fn publish_time(rng: &mut SampleRng) -> String {
    let year = 2015 + rng.below(8) as u32;
    let month = 1 + rng.below(12) as u32;
    let day = 1 + rng.below(28) as u32;
    match rng.below(20) {
        0 => String::new(),
        1 => "not-a-date".to_string(),
        2 | 3 => year.to_string(),
        _ => format!("{year}-{month:02}-{day:02}"),
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng::seeded(42);
    let output_path = "sample_metadata.csv";
    let n_papers = 2_000;

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for i in 0..n_papers {
        let journal_idx = rng.below(JOURNALS.len());
        let title = format!("{} {}", rng.pick(PHRASES), rng.pick(TOPICS));

        // Sprinkle in the dirt the loader has to cope with.
        let abstract_text = if rng.below(25) == 0 {
            String::new()
        } else {
            make_abstract(&mut rng, journal_idx)
        };
        let journal = if rng.below(15) == 0 {
            String::new()
        } else {
            JOURNALS[journal_idx].to_string()
        };
        let authors = (0..1 + rng.below(4))
            .map(|_| format!("{}, {}.", rng.pick(SURNAMES), (b'A' + rng.below(26) as u8) as char))
            .collect::<Vec<_>>()
            .join("; ");

        writer
            .serialize(Row {
                cord_uid: format!("{i:08x}"),
                title,
                abstract_text,
                authors,
                journal,
                publish_time: publish_time(&mut rng),
            })
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n_papers} papers to {output_path}");
    Ok(())
}
