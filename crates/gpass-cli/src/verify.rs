//! # Verify Subcommand
//!
//! Reads an already-decoded QR payload, loads the trust store, and reports
//! the covered identities and the trust decision.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, ValueEnum};
use gpass_crypto::{TrustStore, TrustStoreConfig};
use gpass_verify::{CertificateVerifier, VerificationResult};

/// Output format for the verification report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// A single JSON object.
    Json,
}

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// File holding the decoded QR payload. `-` reads stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Trust-store descriptor (YAML). Takes precedence over `--keys-dir`.
    #[arg(long, env = "GPASS_TRUST_STORE")]
    pub trust_store: Option<PathBuf>,

    /// Directory holding `RamzorQRPubKey.pem` and `IL-NB-DSC-01.pem`.
    #[arg(long, env = "GPASS_KEYS_DIR", default_value = "certs")]
    pub keys_dir: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the subcommand, printing the report. Returns the trust decision.
pub fn run(args: &VerifyArgs) -> anyhow::Result<bool> {
    let store = load_trust_store(args)?;
    let raw = read_input(&args.input)?;
    let result = CertificateVerifier::new(store)
        .verify(&raw)
        .with_context(|| format!("cannot read certificate from {}", args.input.display()))?;
    println!("{}", render(&result, args.format)?);
    Ok(result.is_trusted())
}

/// Load the descriptor if one was given, else the default pair of keys.
pub fn load_trust_store(args: &VerifyArgs) -> anyhow::Result<TrustStore> {
    let config = match &args.trust_store {
        Some(path) => TrustStoreConfig::from_file(path)
            .with_context(|| format!("loading trust store {}", path.display()))?,
        None => TrustStoreConfig::default_in(&args.keys_dir),
    };
    Ok(config.load()?)
}

/// Read the payload bytes, dropping one trailing line ending added by
/// text tools. The core sees the bytes exactly as the QR code held them.
pub fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    let mut raw = Vec::new();
    if path == Path::new("-") {
        std::io::stdin()
            .read_to_end(&mut raw)
            .context("reading certificate from stdin")?;
    } else {
        raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    }
    Ok(strip_line_ending(raw))
}

fn strip_line_ending(mut raw: Vec<u8>) -> Vec<u8> {
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
    raw
}

/// Format a result for the terminal.
pub fn render(result: &VerificationResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for record in result.identities() {
                out.push_str(&format!("\tIsraeli ID Number {}\n", record.id_num));
                out.push_str(&format!("\tID valid by {}\n", plain(&record.valid_by)));
                out.push_str(&format!("\tCert Unique ID {}\n", record.cert_id));
            }
            out.push_str(if result.is_trusted() {
                "Certificate is valid"
            } else {
                "Certificate is NOT valid"
            });
            Ok(out)
        }
    }
}

/// A JSON string without its quotes; any other value as compact JSON.
fn plain(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use gpass_crypto::config::{DEFAULT_EC_KEY_FILE, DEFAULT_RSA_KEY_FILE};
    use gpass_crypto::testing::TestSigner;

    const BATCH: &str = r#"{"ct":1,"id":"C9","p":[{"idl":"1","e":"2022-01-01"},{"idl":"2","e":"2022-02-01"}]}"#;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"a#b\n".to_vec()), b"a#b");
        assert_eq!(strip_line_ending(b"a#b\r\n".to_vec()), b"a#b");
        assert_eq!(strip_line_ending(b"a#b\n\n".to_vec()), b"a#b\n");
        assert_eq!(strip_line_ending(b"a#b".to_vec()), b"a#b");
    }

    #[test]
    fn test_verify_from_keys_dir() {
        let dir = tempfile::tempdir().unwrap();
        let rsa = TestSigner::rsa();
        let ec = TestSigner::ec();
        std::fs::write(dir.path().join(DEFAULT_RSA_KEY_FILE), rsa.public_pem()).unwrap();
        std::fs::write(dir.path().join(DEFAULT_EC_KEY_FILE), ec.public_pem()).unwrap();

        let cert = dir.path().join("cert.txt");
        let line = format!("{}#{}\n", BASE64.encode(rsa.sign(BATCH.as_bytes())), BATCH);
        std::fs::write(&cert, line).unwrap();

        let args = VerifyArgs {
            input: cert,
            trust_store: None,
            keys_dir: dir.path().to_path_buf(),
            format: OutputFormat::Text,
        };
        assert!(run(&args).unwrap());
    }

    #[test]
    fn test_render_text_lists_every_person() {
        let store = TrustStore::new(vec![TestSigner::ec().anchor("ec")]);
        let raw = format!("c2ln#{BATCH}");
        let result = CertificateVerifier::new(store).verify(raw.as_bytes()).unwrap();
        let text = render(&result, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "\tIsraeli ID Number 1\n\tID valid by 2022-01-01\n\tCert Unique ID C9\n\
             \tIsraeli ID Number 2\n\tID valid by 2022-02-01\n\tCert Unique ID C9\n\
             Certificate is NOT valid"
        );
    }

    #[test]
    fn test_render_text_non_string_validity() {
        let store = TrustStore::new(vec![TestSigner::ec().anchor("ec")]);
        let raw = r#"c2ln#{"ct":1,"id":"C1","p":[{"idl":"1","e":null},{"idl":"2","e":{"to":"2022"}}]}"#;
        let result = CertificateVerifier::new(store).verify(raw.as_bytes()).unwrap();
        let text = render(&result, OutputFormat::Text).unwrap();
        assert!(text.contains("\tID valid by null\n"));
        assert!(text.contains("\tID valid by {\"to\":\"2022\"}\n"));
    }

    #[test]
    fn test_render_json() {
        let store = TrustStore::new(vec![TestSigner::ec().anchor("ec")]);
        let raw = format!("c2ln#{BATCH}");
        let result = CertificateVerifier::new(store).verify(raw.as_bytes()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["trusted"], false);
        assert_eq!(json["identities"][1]["cert_id"], "C9");
    }

    #[test]
    fn test_missing_keys_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = VerifyArgs {
            input: PathBuf::from("-"),
            trust_store: None,
            keys_dir: dir.path().join("absent"),
            format: OutputFormat::Text,
        };
        assert!(load_trust_store(&args).is_err());
    }
}
