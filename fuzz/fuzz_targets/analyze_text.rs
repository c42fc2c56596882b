use freqcrack::{analyze_text, AnalysisConfig};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                if let Ok(report) = analyze_text(text, &AnalysisConfig::default()) {
                    let guess = report.decryption.unwrap_or_default();
                    assert_eq!(guess.chars().count(), text.chars().count());
                }
            }
        });
    }
}
