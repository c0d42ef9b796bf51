//! Educational features: what each command asks the notary and how to read the answer.

use colored::Colorize;

const NOTARY_HOME: &str = "http://notary.icsi.berkeley.edu/";

/// Command explanation builder.
///
/// Printed to stderr so machine-readable output on stdout stays clean.
pub struct Explain {
    description: String,
    dns_query: Option<String>,
    what_happens: Vec<String>,
    learn_more: Option<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            dns_query: None,
            what_happens: Vec::new(),
            learn_more: None,
        }
    }

    fn query(mut self, record: &str, name: &str) -> Self {
        self.dns_query = Some(format!("{record} {name}"));
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn notary_home(mut self) -> Self {
        self.learn_more = Some(NOTARY_HOME.to_string());
        self
    }

    /// Lines of the explanation, uncolored.
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.description.clone()];
        lines.extend(
            self.what_happens
                .iter()
                .enumerate()
                .map(|(i, step)| format!("  {}. {}", i + 1, step)),
        );
        lines
    }

    /// Print the explanation to stderr.
    pub fn print(&self) {
        eprintln!();
        eprintln!("{}", "=== What This Does ===".bold().cyan());
        let mut lines = self.lines().into_iter();
        if let Some(description) = lines.next() {
            eprintln!("{description}");
        }
        eprintln!();

        if !self.what_happens.is_empty() {
            eprintln!("{}", "How it works:".bold());
            for step in lines {
                eprintln!("{step}");
            }
            eprintln!();
        }

        if let Some(query) = &self.dns_query {
            eprintln!("{} {}", "DNS Query:".bold(), query.dimmed());
        }

        if let Some(url) = &self.learn_more {
            eprintln!("{} {}", "Learn more:".bold(), url.cyan().underline());
        }
        eprintln!();
    }

    // ========================================================================
    // Command explanations
    // ========================================================================

    pub fn query_record(name: &str) -> Self {
        Self::new("Fetches what the notary knows about this certificate.")
            .query("TXT", name)
            .step("The certificate's SHA-1 fingerprint becomes the leftmost DNS label")
            .step("The TXT record holds space-separated key=value pairs")
            .step("first_seen and last_seen count days since 1970-01-01")
            .step("validated=1 means the certificate chained to a trusted root")
            .step("No record at all means the notary has never seen it")
            .notary_home()
    }

    pub fn status(name: &str) -> Self {
        Self::new("Asks the notary whether it has seen this certificate.")
            .query("A", name)
            .step("127.0.0.1 means the certificate was seen")
            .step("127.0.0.2 means it was seen and validated")
            .step("No such name means the certificate is unknown")
            .notary_home()
    }

    pub fn fingerprint(file: &str) -> Self {
        Self::new(&format!("Computes the SHA-1 fingerprint of {file}."))
            .step("PEM input is decoded to DER first")
            .step("The fingerprint is the SHA-1 digest of the DER bytes")
            .step("This is the hash the notary indexes certificates by")
    }
}
