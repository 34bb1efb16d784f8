use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use scrub_config::Config;
use scrub_core::{Category, DocumentHandle, EntitySpan, Result};
use scrub_engine::Redactor;
use scrub_sources::{
    EntityRecognizer, NoopRecognizer, SpanFileRecognizer, TextDocumentSource, TextMutator,
};

const INVOICE: &str = "\
Facture N° 2024
Client : Jean Dupont
Contact : jean.dupont@mail.com, tel: 06 12 34 56 78
Reference commande 987654321
\u{c}Règlement par virement
IBAN : FR76 3000 6000 0112 3456 7890 189
BIC: AGRIFRPP
Banque secondaire BIC: BNPAFRPP
Cordialement
";

struct CountingRecognizer {
    calls: AtomicUsize,
}

#[async_trait]
impl EntityRecognizer for CountingRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

fn write_input(dir: &tempfile::TempDir, content: &str) -> DocumentHandle {
    let path = dir.path().join("invoice.txt");
    std::fs::write(&path, content).unwrap();
    DocumentHandle::new(path)
}

fn redactor(recognizer: Arc<dyn EntityRecognizer>, out: &std::path::Path) -> Redactor {
    Redactor::new(
        &Config::default(),
        Arc::new(TextDocumentSource),
        recognizer,
        Arc::new(TextMutator::new(out)),
    )
    .unwrap()
}

#[tokio::test]
async fn test_scan_invoice() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_input(&dir, INVOICE);
    let scan = redactor(Arc::new(NoopRecognizer), dir.path())
        .scan(&doc)
        .await
        .unwrap();

    let detected = &scan.detected;
    assert!(detected.names.contains("Jean Dupont"));
    assert!(!detected.names.contains("Cordialement"));
    assert!(detected.emails.contains("jean.dupont@mail.com"));
    assert!(detected.telephones.contains("06 12 34 56 78"));
    assert!(detected.numerics.contains("987654321"));
    assert!(!detected.numerics.contains("2024"));
    assert_eq!(
        detected.ibans.iter().collect::<Vec<_>>(),
        vec!["FR76 3000 6000 0112 3456 7890 189"]
    );
    assert_eq!(
        detected.bics.iter().collect::<Vec<_>>(),
        vec!["AGRIFRPP", "BNPAFRPP"]
    );

    // one synthetic BIC for the whole document
    let bics: Vec<&str> = scan
        .mapping
        .by_category(Category::Bic)
        .map(|e| e.replacement.as_str())
        .collect();
    assert_eq!(bics.len(), 2);
    assert_eq!(bics[0], bics[1]);

    assert_eq!(scan.report.count(Category::Bic).unwrap().registered, 2);
    assert!(scan.report.mapping.is_none());
}

#[tokio::test]
async fn test_redact_invoice_rewrites_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_input(&dir, INVOICE);
    let out_dir = dir.path().join("out");

    let outcome = redactor(Arc::new(NoopRecognizer), &out_dir)
        .redact(&doc)
        .await
        .unwrap();
    let written = std::fs::read_to_string(&outcome.document.path).unwrap();

    assert!(!written.contains("Jean Dupont"));
    assert!(!written.contains("jean.dupont@"));
    assert!(written.contains("@mail.com"));
    assert!(!written.contains("AGRIFRPP"));
    assert!(!written.contains("BNPAFRPP"));
    assert!(!written.contains("987654321"));
    // country code of the IBAN survives
    assert!(written.contains("IBAN : FR"));
    assert!(!written.contains("FR76 3000 6000 0112 3456 7890 189"));
    // page break preserved
    assert!(written.contains('\u{c}'));
}

#[tokio::test]
async fn test_recognizer_names_are_redacted() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_input(&dir, "livraison pour mme lucie bernard, merci\n");
    let recognizer = SpanFileRecognizer::from_spans(vec![EntitySpan::new(
        "lucie bernard",
        "PER",
    )]);

    let outcome = redactor(Arc::new(recognizer), &dir.path().join("out"))
        .redact(&doc)
        .await
        .unwrap();

    assert_eq!(outcome.mapping.claimed_by("lucie bernard"), Some(Category::Name));
    let written = std::fs::read_to_string(&outcome.document.path).unwrap();
    assert!(!written.contains("lucie bernard"));
}

#[tokio::test]
async fn test_surname_before_full_name_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_input(&dir, "Dupont a signé.\nSigné: Jean Dupont\n");

    let outcome = redactor(Arc::new(NoopRecognizer), &dir.path().join("out"))
        .redact(&doc)
        .await
        .unwrap();
    let written = std::fs::read_to_string(&outcome.document.path).unwrap();

    assert!(!written.contains("Jean"));
    assert!(!written.contains("Dupont"));
    assert!(written.contains(" a signé.\n"));
}

#[tokio::test]
async fn test_recognized_first_name_and_full_name_both_redacted() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_input(&dir, "Client: Jean Dupont\n");
    let recognizer = SpanFileRecognizer::from_spans(vec![EntitySpan::new("Jean", "PER")]);

    let outcome = redactor(Arc::new(recognizer), &dir.path().join("out"))
        .redact(&doc)
        .await
        .unwrap();
    let written = std::fs::read_to_string(&outcome.document.path).unwrap();

    assert!(!written.contains("Jean"));
    assert!(!written.contains("Dupont"));
}

#[tokio::test]
async fn test_number_repeating_iban_digits_is_redacted() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_input(
        &dir,
        "IBAN FR76 3000 6000 0112 3456 7890 189\nDossier 6000 0112\n",
    );

    let outcome = redactor(Arc::new(NoopRecognizer), &dir.path().join("out"))
        .redact(&doc)
        .await
        .unwrap();

    assert_eq!(outcome.mapping.claimed_by("6000 0112"), Some(Category::Numeric));
    let written = std::fs::read_to_string(&outcome.document.path).unwrap();
    assert!(!written.contains("6000 0112"));
    assert!(written.starts_with("IBAN FR"));
}

#[tokio::test]
async fn test_blank_document_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_input(&dir, "\u{c}\u{c}");
    let recognizer = Arc::new(CountingRecognizer {
        calls: AtomicUsize::new(0),
    });

    let scan = redactor(recognizer.clone(), dir.path())
        .scan(&doc)
        .await
        .unwrap();

    assert!(scan.mapping.is_empty());
    assert!(scan.detected.is_empty());
    assert_eq!(recognizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let result = redactor(Arc::new(NoopRecognizer), dir.path())
        .scan(&DocumentHandle::new(dir.path().join("absent.txt")))
        .await;
    assert!(matches!(result, Err(scrub_core::Error::DocumentNotFound(_))));
}

#[tokio::test]
async fn test_invalid_config_fails_before_processing() {
    let mut config = Config::default();
    config.detection.min_name_length = 0;

    let result = Redactor::new(
        &config,
        Arc::new(TextDocumentSource),
        Arc::new(NoopRecognizer),
        Arc::new(TextMutator::new("/tmp")),
    );
    assert!(matches!(result, Err(scrub_core::Error::InvalidConfig(_))));
}
